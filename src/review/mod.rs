// ==========================================
// 플랫폼 주문 통합 시스템 - 리뷰 문자 대상 산출
// ==========================================
// 역할: 배송 완료 주문 목록에서 반품/교환/CS 건을 빼고
//       리뷰 요청 문자 발송 대상 목록을 만든다
// 구성: parser (파일 판별/파싱), filter (차집합), feed (CS 시트 연동 경계)
// ==========================================

pub mod feed;
pub mod filter;
pub mod parser;

pub use feed::{build_candidates_with_feed, parse_cs_sheet_csv, CsSheetFeed};
pub use filter::{candidates_to_csv, filter_candidates};
pub use parser::{detect_review_file_kind, parse_orders_file, parse_return_exchange_file};

// ==========================================
// 플랫폼 주문 통합 시스템 - 핵심 라이브러리
// ==========================================
// 역할: 오픈마켓 주문 파일 파싱 · 표준화 · 통합 CSV 생성
// 지원: 네이버/쿠팡/토스/오늘의집/ESM/11번가/올웨이즈/자사몰/카카오
// ==========================================

// ==========================================
// 모듈 선언
// ==========================================

// 도메인 - 표준 주문 및 플랫폼 타입
pub mod domain;

// 오류 타입 - 파일 입출력/파싱 오류
pub mod error;

// 파일 리더 - 엑셀/CSV 공통 그리드
pub mod reader;

// 정규화 - 날짜/전화번호/우편번호/금액
pub mod normalize;

// 플랫폼 감지 - 파일명 기반 판별
pub mod detect;

// 파서 - 플랫폼별 주문 파일 파싱
pub mod parsers;

// 처리 파이프라인 - 감지/파싱/검증/통합
pub mod process;

// 출력 - 통합 CSV 파일 저장
pub mod sink;

// 리뷰 문자 - 발송/반품/교환 대조 및 CS 제외
pub mod review;

// 설정 - CS 시트/내보내기 설정
pub mod config;

// 로그 시스템
pub mod logging;

// ==========================================
// 핵심 타입 재수출
// ==========================================

// 도메인 타입
pub use domain::{
    CsSheetEntry, DetectionResult, FilterReport, Platform, PlatformOrder, ProcessingResult,
    ReturnExchangeEntry, ReviewFileKind, ReviewOrder, ValidationReport,
};

// 오류 타입
pub use error::{ImportError, ImportResult};

// 감지/파싱/처리
pub use detect::FileDetector;
pub use parsers::{parser_for, OrderParser};
pub use process::FileProcessor;

// 출력
pub use sink::{CsvFileSink, OrderSink};

// 리뷰 문자
pub use review::{build_candidates_with_feed, filter_candidates, CsSheetFeed};

// 설정
pub use config::AppConfig;

// ==========================================
// 상수 정의
// ==========================================

// 시스템 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 시스템 이름
pub const APP_NAME: &str = "플랫폼 주문 통합 시스템";

// ==========================================
// 사전 컴파일 확인
// ==========================================

// 컴파일 시 모든 모듈이 보이는지 확인
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_app_name() {
        assert_eq!(APP_NAME, "플랫폼 주문 통합 시스템");
    }
}

// ==========================================
// 플랫폼 주문 통합 시스템 - 리뷰 문자 대상 타입
// ==========================================
// 역할: 배송 완료 주문에서 반품/교환/CS 건을 제외한
//       리뷰 요청 문자 발송 대상 목록 관련 타입
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 리뷰 대상 주문
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewOrder {
    pub order_number: String,   // 주문번호
    pub product_name: String,   // 상품명
    pub receiver_name: String,  // 수취인명
    pub receiver_phone: String, // 수취인 전화번호 (숫자만)
}

// ==========================================
// 반품/교환 명단 항목
// ==========================================
// 주문번호 + 수취인명 복합 키로 대상 목록과 대조
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnExchangeEntry {
    pub order_number: String,
    pub receiver_name: String,
}

// ==========================================
// CS 시트 항목
// ==========================================
// CS 스프레드시트는 주문번호만으로 대조
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CsSheetEntry {
    pub order_number: String,
}

// ==========================================
// 리뷰 파일 종류
// ==========================================
// 파일명 접두사로 판별 (deliverylist / returndelivery / exchange)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewFileKind {
    Orders,    // 배송 완료 주문 목록
    Returns,   // 반품 명단
    Exchanges, // 교환 명단
    Unknown,   // 판별 불가
}

impl fmt::Display for ReviewFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewFileKind::Orders => write!(f, "orders"),
            ReviewFileKind::Returns => write!(f, "returns"),
            ReviewFileKind::Exchanges => write!(f, "exchanges"),
            ReviewFileKind::Unknown => write!(f, "unknown"),
        }
    }
}

// ==========================================
// 필터링 결과 (Filter Report)
// ==========================================
// 제외 사유별 목록을 보존해 운영자가 제외 근거를 확인할 수 있게 함
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterReport {
    pub original_count: usize,
    pub final_count: usize,
    pub removed_count: usize,
    pub candidates: Vec<ReviewOrder>,        // 최종 발송 대상
    pub removed_returns: Vec<ReviewOrder>,   // 반품으로 제외
    pub removed_exchanges: Vec<ReviewOrder>, // 교환으로 제외
    pub removed_cs: Vec<ReviewOrder>,        // CS 건으로 제외
    pub cs_error: Option<String>,            // CS 시트 조회 실패 시 안내 메시지
}

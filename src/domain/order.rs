// ==========================================
// 플랫폼 주문 통합 시스템 - 주문 레코드
// ==========================================
// 역할: 모든 플랫폼 파서가 수렴하는 표준 주문 스키마
// 원칙: 모든 필드는 항상 존재 (없는 값은 빈 문자열/0)
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::platform::Platform;

// ==========================================
// 표준 주문 레코드 (Canonical Order Record)
// ==========================================
// 필드 선언 순서 = 통합 CSV 컬럼 순서 (serde 직렬화가 그대로 따름)
// 식별자는 order_number 하나뿐이며 파일 간 중복 제거는 하지 않음
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformOrder {
    // ===== 주문 식별 =====
    pub order_number: String, // 플랫폼 고유 주문번호
    pub order_name: String,   // 주문자명 (플랫폼에 따라 구매자/상품 라벨)
    pub order_date: String,   // YYYY-MM-DD, 파싱 불가 시 빈 문자열

    // ===== 수취인 정보 =====
    pub receiver_name: String,    // 수취인명
    pub receiver_phone: String,   // 수취인 전화번호 (숫자만)
    pub receiver_post: String,    // 우편번호 (5자리 제로 패딩)
    pub receiver_address: String, // 배송지 주소

    // ===== 상품 정보 =====
    pub product_name: String, // 상품명
    pub option_name: String,  // 옵션명 (없으면 빈 문자열)
    pub quantity: i64,        // 수량 (검증 기준: > 0)
    pub final_price: i64,     // 결제 금액, 원 단위 (검증 기준: > 0)

    // ===== 출처 정보 =====
    pub platform: String,    // 운영자용 플랫폼/스토어 라벨 (행마다 다를 수 있음)
    pub order_phone: String, // 주문자 전화번호 (숫자만)
}

// ==========================================
// 파일 처리 결과 (Per-File Result)
// ==========================================
// 생성: 파일 1건 처리 또는 통합 직후 / 소비: 호출자가 즉시 사용, 저장하지 않음
// platform 은 파서가 정해진 뒤에만 실림 (감지 실패 결과에는 없음)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub success: bool,
    pub data: Vec<PlatformOrder>,     // 실패 시 빈 벡터
    pub errors: Vec<String>,          // 운영자용 오류 메시지
    pub platform: Option<String>,     // 플랫폼 식별자, 통합 결과는 "integrated"
    pub file_name: Option<String>,    // 원본 파일명
    pub csv_content: Option<String>,  // 통합 결과에만 존재
}

impl ProcessingResult {
    pub fn success(data: Vec<PlatformOrder>, platform: &str, file_name: &str) -> Self {
        ProcessingResult {
            success: true,
            data,
            errors: Vec::new(),
            platform: Some(platform.to_string()),
            file_name: Some(file_name.to_string()),
            csv_content: None,
        }
    }

    pub fn failure(errors: Vec<String>, file_name: Option<String>) -> Self {
        ProcessingResult {
            success: false,
            data: Vec::new(),
            errors,
            platform: None,
            file_name,
            csv_content: None,
        }
    }

    /// 파서 확정 이후의 실패(검증 실패 등)에 플랫폼 식별자를 덧붙임
    pub fn with_platform(mut self, platform: &str) -> Self {
        self.platform = Some(platform.to_string());
        self
    }
}

// ==========================================
// 플랫폼 감지 결과 (Detection Result)
// ==========================================
// 감지 직후 파서 선택에 한 번 소비되는 일시적 값
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    pub platform: Platform,
    pub confidence: f64, // 0.8 파일명 / 0.9 확장자 또는 내용 분석
    pub reason: String,  // 운영자용 감지 근거
}

// ==========================================
// 검증 결과 (Validation Report)
// ==========================================
// 오류는 행 단위 메시지 목록으로 누적, 예외로 던지지 않음
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

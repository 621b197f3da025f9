// ==========================================
// 플랫폼 주문 통합 시스템 - 도메인 모델 계층
// ==========================================
// 역할: 표준 주문 레코드, 플랫폼 식별자, 결과 타입 정의
// 원칙: 파일 접근 로직 없음, 파서 로직 없음
// ==========================================

pub mod order;
pub mod platform;
pub mod review;

// 핵심 타입 재수출
pub use order::{DetectionResult, PlatformOrder, ProcessingResult, ValidationReport};
pub use platform::Platform;
pub use review::{
    CsSheetEntry, FilterReport, ReturnExchangeEntry, ReviewFileKind, ReviewOrder,
};

// ==========================================
// 로그 시스템 초기화
// ==========================================
// tracing 과 tracing-subscriber 사용
// 환경 변수로 로그 레벨 설정 가능
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 로그 시스템 초기화
///
/// # 환경 변수
/// - RUST_LOG: 로그 레벨 필터 (기본값: info)
///   예: RUST_LOG=debug 또는 RUST_LOG=platform_orders=trace
///
/// # 예시
/// ```no_run
/// use platform_orders::logging;
/// logging::init();
/// ```
pub fn init() {
    // 환경 변수에서 로그 레벨을 읽고, 없으면 info 사용
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // 로그 포맷 설정
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// 테스트 환경용 로그 시스템 초기화
///
/// 디버깅에 편하도록 더 상세한 레벨을 사용
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

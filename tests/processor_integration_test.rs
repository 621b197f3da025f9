// ==========================================
// 파일 처리 파이프라인 통합 테스트
// ==========================================
// 테스트 목표: 감지 → 파싱 → 검증 → 통합 → 저장 전체 흐름 검증
// ==========================================

mod test_helpers;

use std::path::{Path, PathBuf};

use platform_orders::domain::PlatformOrder;
use platform_orders::logging;
use platform_orders::process::FileProcessor;
use platform_orders::sink::CsvFileSink;
use tempfile::tempdir;
use test_helpers::{cafe24_invalid_order_csv, cafe24_order_csv, write_fixture};

#[test]
fn test_process_single_file_cafe24_csv() {
    // 로그 시스템 초기화
    logging::init_test();

    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_fixture(dir.path(), "자사몰주문_20250718.csv", &cafe24_order_csv());

    let result = FileProcessor::process_single_file(&path);
    assert!(result.success, "Processing should succeed: {:?}", result.errors);
    assert_eq!(result.platform.as_deref(), Some("cafe24"));
    assert_eq!(result.file_name.as_deref(), Some("자사몰주문_20250718.csv"));
    assert_eq!(result.data.len(), 2, "Should map 2 data rows");

    // 1행: 날짜 유도, 전화번호/우편번호/금액 정규화 확인
    let first = &result.data[0];
    assert_eq!(first.order_number, "20250718-0000001");
    assert_eq!(first.order_date, "2025-07-18");
    assert_eq!(first.order_name, "김철수");
    assert_eq!(first.receiver_name, "김영희");
    assert_eq!(first.receiver_phone, "01012345678");
    assert_eq!(first.receiver_post, "06234");
    assert_eq!(first.receiver_address, "부산시 해운대구 우동 123");
    assert_eq!(first.product_name, "드립 커피 세트");
    assert_eq!(first.option_name, "다크 로스트");
    assert_eq!(first.quantity, 2);
    assert_eq!(first.final_price, 76000);
    assert_eq!(first.platform, "자사몰");
    assert_eq!(first.order_phone, "01098765432");

    // 2행: 따옴표 안 쉼표 주소, 짧은 우편번호 패딩, 빈 옵션
    let second = &result.data[1];
    assert_eq!(second.order_date, "2025-07-19");
    assert_eq!(second.receiver_post, "00416");
    assert_eq!(second.receiver_address, "서울시 마포구 합정동 45, 101호");
    assert_eq!(second.option_name, "");
    assert_eq!(second.final_price, 42000);
}

#[test]
fn test_process_single_file_undetectable_name() {
    logging::init_test();

    let result = FileProcessor::process_single_file(Path::new("random_orders.xlsx"));
    assert!(!result.success);
    assert_eq!(result.errors, vec!["플랫폼을 감지할 수 없습니다.".to_string()]);
    assert_eq!(result.platform, None);
    assert_eq!(result.file_name.as_deref(), Some("random_orders.xlsx"));
}

#[test]
fn test_process_single_file_corrupt_workbook() {
    logging::init_test();

    // ESM 파일명 규칙에는 걸리지만 워크북이 아닌 내용
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_fixture(dir.path(), "발송관리_0718.xls", "워크북 아님");

    let result = FileProcessor::process_single_file(&path);
    assert!(!result.success);
    assert_eq!(result.platform.as_deref(), Some("esm"));
    assert_eq!(result.errors.len(), 1);
    assert!(
        result.errors[0].starts_with("파일 처리 중 오류 발생"),
        "Unexpected error message: {}",
        result.errors[0]
    );
    assert!(result.errors[0].contains("파일 파싱 실패"));
}

#[test]
fn test_process_single_file_validation_failure() {
    logging::init_test();

    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_fixture(dir.path(), "자사몰주문_불량.csv", &cafe24_invalid_order_csv());

    let result = FileProcessor::process_single_file(&path);
    assert!(!result.success);
    assert_eq!(result.errors, vec!["1행: 수취인명이 누락되었습니다.".to_string()]);
    // 파서가 정해진 뒤의 실패라 플랫폼 식별자가 실린다
    assert_eq!(result.platform.as_deref(), Some("cafe24"));
    assert!(result.data.is_empty());
}

#[test]
fn test_process_with_platform_skips_detection() {
    logging::init_test();

    // 감지 규칙과 무관한 파일명에 플랫폼을 수동 지정
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_fixture(dir.path(), "내보내기.csv", &cafe24_order_csv());

    let result = FileProcessor::process_with_platform(&path, "cafe24");
    assert!(result.success, "Processing should succeed: {:?}", result.errors);
    assert_eq!(result.platform.as_deref(), Some("cafe24"));
    assert_eq!(result.data.len(), 2);
}

#[test]
fn test_process_files_keeps_input_order_and_isolates_failure() {
    logging::init_test();

    let dir = tempdir().expect("Failed to create temp dir");
    let good = write_fixture(dir.path(), "자사몰주문.csv", &cafe24_order_csv());
    let bad = PathBuf::from("random_orders.xlsx");

    let results = FileProcessor::process_files(&[good, bad]);
    assert_eq!(results.len(), 2);
    assert!(results[0].success);
    assert!(!results[1].success);
    assert_eq!(
        results[1].errors,
        vec!["플랫폼을 감지할 수 없습니다.".to_string()]
    );
}

#[test]
fn test_integrate_files_produces_parseable_csv() {
    logging::init_test();

    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_fixture(dir.path(), "자사몰주문.csv", &cafe24_order_csv());

    let result = FileProcessor::process_single_file(&path);
    assert!(result.success);

    let integrated = FileProcessor::integrate_files(&[result]);
    assert!(integrated.success);
    assert_eq!(integrated.platform.as_deref(), Some("integrated"));
    assert_eq!(integrated.data.len(), 2);

    let csv_content = integrated.csv_content.as_deref().expect("csv_content missing");
    let first_line = csv_content.lines().next().expect("Empty CSV");
    assert!(first_line.starts_with("\"order_number\""));

    // 통합 CSV를 다시 읽으면 같은 레코드가 나와야 한다
    let mut reader = csv::Reader::from_reader(csv_content.as_bytes());
    let parsed: Vec<PlatformOrder> = reader
        .deserialize()
        .collect::<Result<Vec<_>, _>>()
        .expect("Failed to parse integrated CSV");
    assert_eq!(parsed, integrated.data);
}

#[tokio::test]
async fn test_integrated_csv_saved_with_bom() {
    logging::init_test();

    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_fixture(dir.path(), "자사몰주문.csv", &cafe24_order_csv());

    let result = FileProcessor::process_single_file(&path);
    let integrated = FileProcessor::integrate_files(&[result]);
    assert!(integrated.success);

    let sink = CsvFileSink::new(dir.path().join("out"), "통합주문");
    let saved = sink
        .write_integrated(&integrated.data)
        .await
        .expect("Failed to write integrated CSV");

    assert!(saved.exists());
    assert!(saved
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("통합주문_"));

    let bytes = std::fs::read(&saved).expect("Failed to read saved CSV");
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF], "Saved CSV should start with BOM");
    let text = String::from_utf8(bytes).expect("Saved CSV should be UTF-8");
    assert!(text.contains("\"20250718-0000001\""));
}

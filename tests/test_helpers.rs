// ==========================================
// 테스트 보조 함수
// ==========================================
// 역할: 임시 디렉터리에 주문/리뷰 파일 픽스처를 만들어 주는 도구
// ==========================================

use std::path::{Path, PathBuf};

/// 임시 디렉터리에 픽스처 파일 생성
///
/// # 반환
/// - PathBuf: 생성된 파일 경로
pub fn write_fixture(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// 자사몰 주문 CSV 픽스처 (정상 2행)
///
/// 전화번호/주문번호는 하이픈 포함 문자열, 우편번호/수량/금액 일부는
/// 따옴표 없는 숫자 필드로 넣어 실제 내려받은 파일과 같은 모양을 만든다
pub fn cafe24_order_csv() -> String {
    [
        "주문번호,주문자명,수령인,수령인 휴대전화,수령인 우편번호,수령인 주소,주문상품명,상품옵션,수량,총 주문금액,주문자 휴대전화",
        "20250718-0000001,김철수,김영희,010-1234-5678,6234,\"부산시 해운대구 우동 123\",드립 커피 세트,다크 로스트,2,\"76,000원\",010-9876-5432",
        "20250719-0000002,박민수,박지은,010-2222-3333,416,\"서울시 마포구 합정동 45, 101호\",핸드밀 그라인더,,1,42000,010-7777-8888",
    ]
    .join("\n")
}

/// 수취인이 빠진 자사몰 주문 CSV 픽스처 (검증 실패용)
pub fn cafe24_invalid_order_csv() -> String {
    [
        "주문번호,주문자명,수령인,수령인 휴대전화,수령인 우편번호,수령인 주소,주문상품명,상품옵션,수량,총 주문금액,주문자 휴대전화",
        "20250720-0000003,이민정,,010-3333-4444,6234,\"대구시 수성구\",콜드브루 보틀,,1,15000,010-3333-4444",
    ]
    .join("\n")
}

/// 배송 완료 주문 CSV 픽스처 (리뷰 문자 대상 4건)
pub fn review_orders_csv() -> String {
    [
        "주문번호,등록상품명,수취인이름,수취인전화번호",
        "2025071812345-001,드립 커피 세트,김영희,010-1111-2222",
        "2025071812345-002,핸드밀 그라인더,박지은,010-3333-4444",
        "2025071812345-003,콜드브루 보틀,이민정,010-5555-6666",
        "2025071812345-004,서버 주전자,최수진,010-7777-8888",
    ]
    .join("\n")
}

/// 반품 CSV 픽스처 (주문 1건과 복합 키 일치)
pub fn review_returns_csv() -> String {
    ["주문번호,수취인", "2025071812345-001,김영희"].join("\n")
}

/// 교환 CSV 픽스처 (주문 1건과 복합 키 일치)
pub fn review_exchanges_csv() -> String {
    ["주문번호,수취인", "2025071812345-002,박지은"].join("\n")
}

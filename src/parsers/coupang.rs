// ==========================================
// 플랫폼 주문 통합 시스템 - 쿠팡 파서
// ==========================================
// 입력: 쿠팡 윙 발주서 엑셀 (deliverylist-*.xlsx)
// 특징: 주문자명 컬럼이 없어 등록상품명을 주문명으로 사용
// ==========================================

use std::path::Path;

use crate::domain::{Platform, PlatformOrder, ValidationReport};
use crate::error::{ImportError, ImportResult};
use crate::normalize;
use crate::parsers::{find_header_row, is_blank_row, validate_common, HeaderIndex, OrderParser};
use crate::reader::{self, SheetGrid};

// 헤더 행 판별용 필수 헤더 (3개 이상 일치 기준)
const REQUIRED_HEADERS: [&str; 5] = ["주문번호", "구매자", "주문일", "수취인이름", "등록상품명"];

pub struct CoupangParser;

impl CoupangParser {
    fn map_grid(grid: &SheetGrid) -> Vec<PlatformOrder> {
        let header_row = find_header_row(grid, &REQUIRED_HEADERS);
        let headers = HeaderIndex::from_row(grid.row(header_row));

        let mut records = Vec::new();
        for row_index in (header_row + 1)..grid.row_count() {
            if is_blank_row(grid.row(row_index)) {
                continue;
            }
            let cell = |name: &str| headers.cell(grid, row_index, name);
            records.push(PlatformOrder {
                order_number: cell("주문번호").to_display_string(),
                order_name: cell("등록상품명").to_display_string(),
                order_date: normalize::parse_coupang_date(&cell("주문일").to_display_string()),
                receiver_name: cell("수취인이름").to_display_string(),
                receiver_phone: normalize::format_phone(cell("수취인전화번호")),
                receiver_post: normalize::pad_zip(cell("우편번호")),
                receiver_address: cell("수취인 주소").to_display_string(),
                product_name: cell("등록상품명").to_display_string(),
                option_name: cell("등록옵션명").to_display_string(),
                quantity: normalize::parse_quantity(cell("구매수(수량)")),
                final_price: normalize::parse_price(cell("결제액")),
                platform: Platform::Coupang.label().to_string(),
                order_phone: normalize::format_phone(cell("구매자전화번호")),
            });
        }
        records
    }
}

impl OrderParser for CoupangParser {
    fn platforms(&self) -> &'static [Platform] {
        &[Platform::Coupang]
    }

    fn parse(&self, path: &Path) -> ImportResult<Vec<PlatformOrder>> {
        let grid = reader::load_grid(path).map_err(|e| ImportError::parse_failed("쿠팡", e))?;
        Ok(Self::map_grid(&grid))
    }

    fn validate(&self, records: &[PlatformOrder]) -> ValidationReport {
        ValidationReport::from_errors(validate_common(records, "주문번호", "수취인명"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::test_grid::grid;

    fn sample_grid() -> SheetGrid {
        grid(vec![
            vec![
                "주문번호",
                "구매자",
                "주문일",
                "수취인이름",
                "수취인전화번호",
                "우편번호",
                "수취인 주소",
                "등록상품명",
                "등록옵션명",
                "구매수(수량)",
                "결제액",
                "구매자전화번호",
            ],
            vec![
                "23000123456789",
                "김철수",
                "2025-07-21 15:15:32",
                "김영희",
                "010-1234-5678",
                "6234",
                "부산시 해운대구",
                "스테인리스 텀블러",
                "화이트 500ml",
                "2",
                "63,000원",
                "010-9876-5432",
            ],
        ])
    }

    #[test]
    fn test_map_grid() {
        let records = CoupangParser::map_grid(&sample_grid());
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.order_number, "23000123456789");
        assert_eq!(record.order_name, "스테인리스 텀블러");
        assert_eq!(record.order_date, "2025-07-21");
        assert_eq!(record.receiver_name, "김영희");
        assert_eq!(record.receiver_phone, "01012345678");
        assert_eq!(record.receiver_post, "06234");
        assert_eq!(record.product_name, "스테인리스 텀블러");
        assert_eq!(record.quantity, 2);
        assert_eq!(record.final_price, 63000);
        assert_eq!(record.platform, "쿠팡");
        assert_eq!(record.order_phone, "01098765432");
    }

    #[test]
    fn test_map_grid_with_title_row() {
        // 제목 행이 헤더 위에 삽입된 수출본
        let grid = grid(vec![
            vec!["쿠팡 발주 내역"],
            vec!["주문번호", "구매자", "주문일", "수취인이름", "등록상품명", "구매수(수량)", "결제액"],
            vec!["23000987654321", "이철수", "2025-07-18", "이영희", "머그컵", "1", "12000"],
        ]);
        let records = CoupangParser::map_grid(&grid);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].order_number, "23000987654321");
        assert_eq!(records[0].order_date, "2025-07-18");
    }

    #[test]
    fn test_map_grid_skips_blank_rows() {
        let grid = grid(vec![
            vec!["주문번호", "구매자", "주문일", "수취인이름", "등록상품명"],
            vec!["", "", "", "", ""],
            vec!["23000111111111", "박철수", "2025-07-19", "박영희", "도마"],
        ]);
        let records = CoupangParser::map_grid(&grid);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].receiver_name, "박영희");
    }

    #[test]
    fn test_validate_reports_missing_fields() {
        let records = CoupangParser::map_grid(&grid(vec![
            vec!["주문번호", "구매자", "주문일", "수취인이름", "등록상품명", "구매수(수량)", "결제액"],
            vec!["", "김철수", "2025-07-21", "김영희", "텀블러", "1", "9000"],
        ]));
        let report = CoupangParser.validate(&records);
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["1행: 주문번호가 누락되었습니다.".to_string()]);
    }
}

// ==========================================
// 플랫폼 주문 통합 시스템 - 카카오 파서
// ==========================================
// 입력: 카카오톡 스토어/선물하기 주문 엑셀
// ==========================================

use std::path::Path;

use crate::domain::{Platform, PlatformOrder, ValidationReport};
use crate::error::{ImportError, ImportResult};
use crate::normalize;
use crate::parsers::{find_header_row, is_blank_row, validate_common, HeaderIndex, OrderParser};
use crate::reader::{self, SheetGrid};

const REQUIRED_HEADERS: [&str; 5] = ["주문번호", "구매자명", "주문일", "수령인명", "상품명"];

pub struct KakaoParser;

impl KakaoParser {
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
                order_name: cell("구매자명").to_display_string(),
                order_date: normalize::parse_date(&cell("주문일").to_display_string()),
                receiver_name: cell("수령인명").to_display_string(),
                receiver_phone: normalize::format_phone(cell("수령인연락처")),
                receiver_post: normalize::pad_zip(cell("우편번호")),
                receiver_address: cell("배송지주소").to_display_string(),
                product_name: cell("상품명").to_display_string(),
                option_name: cell("옵션").to_display_string(),
                quantity: normalize::parse_quantity(cell("수량")),
                final_price: normalize::parse_price(cell("결제금액")),
                platform: Platform::Kakao.label().to_string(),
                order_phone: normalize::format_phone(cell("구매자연락처")),
            });
        }
        records
    }
}

impl OrderParser for KakaoParser {
    fn platforms(&self) -> &'static [Platform] {
        &[Platform::Kakao]
    }

    fn parse(&self, path: &Path) -> ImportResult<Vec<PlatformOrder>> {
        let grid = reader::load_grid(path).map_err(|e| ImportError::parse_failed("카카오", e))?;
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

    #[test]
    fn test_map_grid() {
        let records = KakaoParser::map_grid(&grid(vec![
            vec![
                "주문번호",
                "구매자명",
                "주문일",
                "수령인명",
                "수령인연락처",
                "우편번호",
                "배송지주소",
                "상품명",
                "옵션",
                "수량",
                "결제금액",
                "구매자연락처",
            ],
            vec![
                "K2025072100991",
                "김철수",
                "2025-07-21",
                "김영희",
                "010-4455-6677",
                "10326",
                "고양시 일산동구",
                "아로마 캔들",
                "라벤더",
                "2",
                "24,000",
                "010-8899-0011",
            ],
        ]));

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.order_number, "K2025072100991");
        assert_eq!(record.order_date, "2025-07-21");
        assert_eq!(record.receiver_name, "김영희");
        assert_eq!(record.receiver_phone, "01044556677");
        assert_eq!(record.final_price, 24000);
        assert_eq!(record.platform, "카카오");
    }
}

// ==========================================
// 플랫폼 주문 통합 시스템 - 11번가 파서
// ==========================================
// 입력: 11번가 주문조회 엑셀
// ==========================================

use std::path::Path;

use crate::domain::{Platform, PlatformOrder, ValidationReport};
use crate::error::{ImportError, ImportResult};
use crate::normalize;
use crate::parsers::{find_header_row, is_blank_row, validate_common, HeaderIndex, OrderParser};
use crate::reader::{self, SheetGrid};

const REQUIRED_HEADERS: [&str; 5] = ["주문번호", "구매자", "주문일시", "수취인", "상품명"];

pub struct ElevenstParser;

impl ElevenstParser {
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
                order_name: cell("구매자").to_display_string(),
                order_date: normalize::parse_date(&cell("주문일시").to_display_string()),
                receiver_name: cell("수취인").to_display_string(),
                receiver_phone: normalize::format_phone(cell("수취인휴대폰")),
                receiver_post: normalize::pad_zip(cell("우편번호")),
                receiver_address: cell("주소").to_display_string(),
                product_name: cell("상품명").to_display_string(),
                option_name: cell("옵션").to_display_string(),
                quantity: normalize::parse_quantity(cell("수량")),
                final_price: normalize::parse_price(cell("결제금액")),
                platform: Platform::Elevenst.label().to_string(),
                order_phone: normalize::format_phone(cell("구매자휴대폰")),
            });
        }
        records
    }
}

impl OrderParser for ElevenstParser {
    fn platforms(&self) -> &'static [Platform] {
        &[Platform::Elevenst]
    }

    fn parse(&self, path: &Path) -> ImportResult<Vec<PlatformOrder>> {
        let grid = reader::load_grid(path).map_err(|e| ImportError::parse_failed("11번가", e))?;
        Ok(Self::map_grid(&grid))
    }

    fn validate(&self, records: &[PlatformOrder]) -> ValidationReport {
        ValidationReport::from_errors(validate_common(records, "주문번호", "수취인명"))
    }
}

// ==========================================
// 플랫폼 주문 통합 시스템 - 토스 파서
// ==========================================
// 입력: 토스쇼핑 주문내역 엑셀 (상품준비중/배송중 탭 수출본)
// ==========================================

use std::path::Path;

use crate::domain::{Platform, PlatformOrder, ValidationReport};
use crate::error::{ImportError, ImportResult};
use crate::normalize;
use crate::parsers::{find_header_row, is_blank_row, validate_common, HeaderIndex, OrderParser};
use crate::reader::{self, SheetGrid};

const REQUIRED_HEADERS: [&str; 5] = ["주문번호", "주문자명", "주문일자", "받는분", "상품명"];

pub struct TossParser;

impl TossParser {
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
                order_name: cell("주문자명").to_display_string(),
                order_date: normalize::parse_toss_date(&cell("주문일자").to_display_string()),
                receiver_name: cell("받는분").to_display_string(),
                receiver_phone: normalize::format_phone(cell("받는분 전화번호")),
                receiver_post: normalize::pad_zip(cell("우편번호")),
                receiver_address: cell("받는분 주소").to_display_string(),
                product_name: cell("상품명").to_display_string(),
                option_name: cell("옵션").to_display_string(),
                quantity: normalize::parse_quantity(cell("수량")),
                final_price: normalize::parse_price(cell("결제금액")),
                platform: Platform::Toss.label().to_string(),
                order_phone: normalize::format_phone(cell("주문자 전화번호")),
            });
        }
        records
    }
}

impl OrderParser for TossParser {
    fn platforms(&self) -> &'static [Platform] {
        &[Platform::Toss]
    }

    fn parse(&self, path: &Path) -> ImportResult<Vec<PlatformOrder>> {
        let grid = reader::load_grid(path).map_err(|e| ImportError::parse_failed("토스", e))?;
        Ok(Self::map_grid(&grid))
    }

    fn validate(&self, records: &[PlatformOrder]) -> ValidationReport {
        ValidationReport::from_errors(validate_common(records, "주문번호", "수취인명"))
    }
}

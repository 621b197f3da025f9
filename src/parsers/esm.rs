// ==========================================
// 플랫폼 주문 통합 시스템 - ESM 파서
// ==========================================
// 입력: ESM 통합 발송관리 엑셀 (G마켓 + 옥션 합본)
// 특징: A열 접두어로 행 단위 마켓 구분 (옥션/지마켓/ESM)
// ==========================================

use std::path::Path;

use tracing::debug;

use crate::domain::{Platform, PlatformOrder, ValidationReport};
use crate::error::{ImportError, ImportResult};
use crate::normalize;
use crate::parsers::{find_header_row, is_blank_row, validate_common, HeaderIndex, OrderParser};
use crate::reader::{self, SheetGrid};

const REQUIRED_HEADERS: [&str; 5] = ["주문번호", "구매자명", "주문일", "수령인명", "상품명"];

pub struct EsmParser;

impl EsmParser {
    fn map_grid(grid: &SheetGrid) -> Vec<PlatformOrder> {
        let header_row = find_header_row(grid, &REQUIRED_HEADERS);
        let headers = HeaderIndex::from_row(grid.row(header_row));

        let mut records = Vec::new();
        for row_index in (header_row + 1)..grid.row_count() {
            if is_blank_row(grid.row(row_index)) {
                continue;
            }
            let label = Self::storefront_label(grid, row_index);
            let cell = |name: &str| headers.cell(grid, row_index, name);
            records.push(PlatformOrder {
                order_number: cell("주문번호").to_display_string(),
                order_name: cell("상품명").to_display_string(),
                order_date: normalize::parse_esm_date(cell("주문일(결제확인전)")),
                receiver_name: cell("수령인명").to_display_string(),
                receiver_phone: normalize::format_phone(cell("수령인 휴대폰")),
                receiver_post: normalize::pad_zip(cell("우편번호")),
                receiver_address: cell("주소").to_display_string(),
                product_name: cell("상품명").to_display_string(),
                option_name: cell("옵션").to_display_string(),
                quantity: normalize::parse_quantity(cell("수량")),
                final_price: normalize::parse_price(cell("판매금액")),
                platform: label,
                order_phone: normalize::format_phone(cell("구매자 휴대폰")),
            });
        }
        records
    }

    /// 해당 데이터 행의 A열 접두어로 옥션/지마켓 구분 (둘 다 아니면 ESM)
    fn storefront_label(grid: &SheetGrid, row_index: usize) -> String {
        let value = grid.cell(row_index, 0).to_display_string();
        let value = value.trim();
        if value.starts_with("옥션") {
            "옥션".to_string()
        } else if value.starts_with("지마켓") {
            "지마켓".to_string()
        } else {
            "ESM".to_string()
        }
    }
}

impl OrderParser for EsmParser {
    fn platforms(&self) -> &'static [Platform] {
        &[Platform::Esm]
    }

    fn parse(&self, path: &Path) -> ImportResult<Vec<PlatformOrder>> {
        let grid = reader::load_grid(path).map_err(|e| ImportError::parse_failed("ESM", e))?;
        Ok(Self::map_grid(&grid))
    }

    fn validate(&self, records: &[PlatformOrder]) -> ValidationReport {
        let errors = validate_common(records, "주문번호", "수령인명");

        // 마켓 구분 통계 (운영자 확인용)
        let auction = records.iter().filter(|r| r.platform == "옥션").count();
        let gmarket = records.iter().filter(|r| r.platform == "지마켓").count();
        debug!(
            auction_rows = auction,
            gmarket_rows = gmarket,
            total_rows = records.len(),
            "ESM 마켓 구분 결과"
        );

        ValidationReport::from_errors(errors)
    }
}

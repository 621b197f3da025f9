// ==========================================
// 플랫폼 주문 통합 시스템 - 오늘의집 파서
// ==========================================
// 입력: 오늘의집 주문배송 내역 엑셀
// 특징: 주문자 연락처 컬럼이 없어 수취인 연락처를 겸용
// ==========================================

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{Platform, PlatformOrder, ValidationReport};
use crate::error::{ImportError, ImportResult};
use crate::normalize;
use crate::parsers::{find_header_row, is_blank_row, validate_common, HeaderIndex, OrderParser};
use crate::reader::{self, Cell, SheetGrid};

const REQUIRED_HEADERS: [&str; 5] = [
    "주문상품번호",
    "주문자명",
    "주문결제완료일",
    "수취인명",
    "상품명",
];

// 결제완료일 형식: "2025.7.18  12:42:43 PM" 또는 "2025.7.18"
static RE_DOTTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})\.(\d{1,2})\.(\d{1,2})").unwrap());

pub struct OhouseParser;

impl OhouseParser {
    fn map_grid(grid: &SheetGrid) -> Vec<PlatformOrder> {
        let header_row = find_header_row(grid, &REQUIRED_HEADERS);
        let headers = HeaderIndex::from_row(grid.row(header_row));

        let mut records = Vec::new();
        for row_index in (header_row + 1)..grid.row_count() {
            if is_blank_row(grid.row(row_index)) {
                continue;
            }
            let cell = |name: &str| headers.cell(grid, row_index, name);
            let receiver_phone = normalize::format_phone(cell("수취인 연락처"));
            records.push(PlatformOrder {
                order_number: cell("주문상품번호").to_display_string(),
                order_name: cell("상품명").to_display_string(),
                order_date: Self::parse_order_date(cell("주문결제완료일")),
                receiver_name: cell("수취인명").to_display_string(),
                receiver_phone: receiver_phone.clone(),
                receiver_post: normalize::pad_zip(cell("수취인 우편번호")),
                receiver_address: cell("수취인 주소").to_display_string(),
                product_name: cell("상품명").to_display_string(),
                option_name: cell("옵션명").to_display_string(),
                quantity: normalize::parse_quantity(cell("수량")),
                final_price: normalize::parse_price(cell("판매가*수량 + 조립비 + 배송비")),
                platform: Platform::Ohouse.label().to_string(),
                order_phone: receiver_phone,
            });
        }
        records
    }

    /// 점 구분 날짜를 먼저 시도하고, 실패하면 공통 파싱으로 넘김
    fn parse_order_date(value: &Cell) -> String {
        let text = value.to_display_string();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        if let Some(caps) = RE_DOTTED.captures(trimmed) {
            return format!("{}-{:0>2}-{:0>2}", &caps[1], &caps[2], &caps[3]);
        }

        normalize::parse_date(trimmed)
    }
}

impl OrderParser for OhouseParser {
    fn platforms(&self) -> &'static [Platform] {
        &[Platform::Ohouse]
    }

    fn parse(&self, path: &Path) -> ImportResult<Vec<PlatformOrder>> {
        let grid = reader::load_grid(path).map_err(|e| ImportError::parse_failed("오늘의집", e))?;
        Ok(Self::map_grid(&grid))
    }

    fn validate(&self, records: &[PlatformOrder]) -> ValidationReport {
        ValidationReport::from_errors(validate_common(records, "주문상품번호", "수취인명"))
    }
}

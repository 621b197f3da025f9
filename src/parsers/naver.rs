// ==========================================
// 플랫폼 주문 통합 시스템 - 네이버 스마트스토어 파서
// ==========================================
// 입력: 스마트스토어 발주(주문)확인 엑셀
// 특징: 원웨이/휘게 두 스토어가 같은 양식을 쓰므로
//       시트 내용으로 스토어를 판별해 라벨만 달리 붙임
// ==========================================

use std::path::Path;

use tracing::debug;

use crate::detect::FileDetector;
use crate::domain::{Platform, PlatformOrder, ValidationReport};
use crate::error::{ImportError, ImportResult};
use crate::normalize;
use crate::parsers::{find_header_row, is_blank_row, validate_common, HeaderIndex, OrderParser};
use crate::reader::{self, SheetGrid};

const REQUIRED_HEADERS: [&str; 5] = ["상품주문번호", "구매자명", "결제일", "수취인명", "상품명"];

pub struct NaverParser;

impl NaverParser {
    fn map_grid(grid: &SheetGrid, store_label: &str) -> Vec<PlatformOrder> {
        let header_row = find_header_row(grid, &REQUIRED_HEADERS);
        let headers = HeaderIndex::from_row(grid.row(header_row));

        let mut records = Vec::new();
        for row_index in (header_row + 1)..grid.row_count() {
            if is_blank_row(grid.row(row_index)) {
                continue;
            }
            let cell = |name: &str| headers.cell(grid, row_index, name);
            records.push(PlatformOrder {
                order_number: cell("상품주문번호").to_display_string(),
                order_name: cell("구매자명").to_display_string(),
                order_date: normalize::parse_naver_date(cell("결제일")),
                receiver_name: cell("수취인명").to_display_string(),
                receiver_phone: normalize::format_phone(cell("수취인연락처1")),
                receiver_post: normalize::pad_zip(cell("우편번호")),
                receiver_address: cell("배송지").to_display_string(),
                product_name: cell("상품명").to_display_string(),
                option_name: cell("옵션정보").to_display_string(),
                quantity: normalize::parse_quantity(cell("수량")),
                final_price: normalize::parse_price(cell("상품별 총 주문금액")),
                platform: store_label.to_string(),
                order_phone: normalize::format_phone(cell("구매자연락처")),
            });
        }
        records
    }
}

impl OrderParser for NaverParser {
    fn platforms(&self) -> &'static [Platform] {
        &[Platform::NaverOneway, Platform::NaverHygge]
    }

    fn parse(&self, path: &Path) -> ImportResult<Vec<PlatformOrder>> {
        let grid = reader::load_grid(path).map_err(|e| ImportError::parse_failed("네이버", e))?;
        let store = FileDetector::detect_naver_store(&grid);
        let label = store.platform().label();
        debug!(store = label, "네이버 스토어 판별 완료");
        Ok(Self::map_grid(&grid, label))
    }

    fn validate(&self, records: &[PlatformOrder]) -> ValidationReport {
        ValidationReport::from_errors(validate_common(records, "주문번호", "수취인명"))
    }
}

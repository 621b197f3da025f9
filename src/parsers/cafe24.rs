// ==========================================
// 플랫폼 주문 통합 시스템 - 자사몰(Cafe24) 파서
// ==========================================
// 입력: 자사몰 주문 CSV 또는 엑셀
// 특징: 주문일 컬럼이 없어 주문번호 앞 8자리(YYYYMMDD)에서 날짜 유도
// ==========================================

use std::path::Path;

use crate::domain::{Platform, PlatformOrder, ValidationReport};
use crate::error::{ImportError, ImportResult};
use crate::normalize;
use crate::parsers::{find_header_row, is_blank_row, validate_common, HeaderIndex, OrderParser};
use crate::reader::{self, SheetGrid};

const REQUIRED_HEADERS: [&str; 5] = ["주문번호", "주문자명", "수령인", "주문상품명", "수량"];

pub struct Cafe24Parser;

impl Cafe24Parser {
    fn map_grid(grid: &SheetGrid) -> Vec<PlatformOrder> {
        let header_row = find_header_row(grid, &REQUIRED_HEADERS);
        let headers = HeaderIndex::from_row(grid.row(header_row));

        let mut records = Vec::new();
        for row_index in (header_row + 1)..grid.row_count() {
            if is_blank_row(grid.row(row_index)) {
                continue;
            }
            let cell = |name: &str| headers.cell(grid, row_index, name);
            let order_number = cell("주문번호").to_display_string();
            let order_date = normalize::parse_cafe24_date(&order_number);
            records.push(PlatformOrder {
                order_number,
                order_name: cell("주문자명").to_display_string(),
                order_date,
                receiver_name: cell("수령인").to_display_string(),
                receiver_phone: normalize::format_phone(cell("수령인 휴대전화")),
                receiver_post: normalize::pad_zip(cell("수령인 우편번호")),
                receiver_address: cell("수령인 주소").to_display_string(),
                product_name: cell("주문상품명").to_display_string(),
                option_name: cell("상품옵션").to_display_string(),
                quantity: normalize::parse_quantity(cell("수량")),
                final_price: normalize::parse_price(cell("총 주문금액")),
                platform: Platform::Cafe24.label().to_string(),
                order_phone: normalize::format_phone(cell("주문자 휴대전화")),
            });
        }
        records
    }
}

impl OrderParser for Cafe24Parser {
    fn platforms(&self) -> &'static [Platform] {
        &[Platform::Cafe24]
    }

    fn parse(&self, path: &Path) -> ImportResult<Vec<PlatformOrder>> {
        let grid = reader::load_grid(path).map_err(|e| ImportError::parse_failed("자사몰", e))?;
        Ok(Self::map_grid(&grid))
    }

    // 자사몰은 주문자명과 주문번호 형식(날짜 유도 가능 여부)까지 본다
    fn validate(&self, records: &[PlatformOrder]) -> ValidationReport {
        let mut errors = validate_common(records, "주문번호", "수취인명");

        for (index, record) in records.iter().enumerate() {
            let row = index + 1;
            if record.order_name.trim().is_empty() {
                errors.push(format!("{}행: 주문자명이 누락되었습니다.", row));
            }
            if record.order_date.is_empty() && !record.order_number.trim().is_empty() {
                errors.push(format!(
                    "{}행: 주문번호 형식이 올바르지 않습니다. (주문번호: {})",
                    row, record.order_number
                ));
            }
        }

        ValidationReport::from_errors(errors)
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
                "주문자명",
                "수령인",
                "수령인 휴대전화",
                "수령인 우편번호",
                "수령인 주소",
                "주문상품명",
                "상품옵션",
                "수량",
                "총 주문금액",
                "주문자 휴대전화",
            ],
            vec![
                "20250121-0000001",
                "김철수",
                "김영희",
                "010-1212-3434",
                "6234",
                "부산시 해운대구",
                "드립 커피 세트",
                "다크 로스트",
                "1",
                "38,000원",
                "010-5656-7878",
            ],
        ])
    }

    #[test]
    fn test_map_grid_derives_date_from_order_number() {
        let records = Cafe24Parser::map_grid(&sample_grid());
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.order_number, "20250121-0000001");
        assert_eq!(record.order_date, "2025-01-21");
        assert_eq!(record.order_name, "김철수");
        assert_eq!(record.receiver_post, "06234");
        assert_eq!(record.final_price, 38000);
        assert_eq!(record.platform, "자사몰");
    }

    #[test]
    fn test_validate_flags_underivable_order_date() {
        let record = PlatformOrder {
            order_number: "ABC-123".to_string(),
            order_name: "김철수".to_string(),
            product_name: "커피 세트".to_string(),
            receiver_name: "김영희".to_string(),
            quantity: 1,
            final_price: 38000,
            ..PlatformOrder::default()
        };
        let report = Cafe24Parser.validate(&[record]);
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec!["1행: 주문번호 형식이 올바르지 않습니다. (주문번호: ABC-123)".to_string()]
        );
    }

    #[test]
    fn test_validate_requires_orderer_name() {
        let record = PlatformOrder {
            order_number: "20250121-0000002".to_string(),
            order_date: "2025-01-21".to_string(),
            product_name: "커피 세트".to_string(),
            receiver_name: "김영희".to_string(),
            quantity: 1,
            final_price: 38000,
            ..PlatformOrder::default()
        };
        let report = Cafe24Parser.validate(&[record]);
        assert_eq!(report.errors, vec!["1행: 주문자명이 누락되었습니다.".to_string()]);
    }
}

// ==========================================
// 플랫폼 주문 통합 시스템 - 리뷰 파일 파서
// ==========================================
// 입력: 배송 완료 주문(deliverylist*), 반품(returndelivery*),
//       교환(exchange*) 엑셀/CSV 파일
// ==========================================

use std::path::Path;

use tracing::debug;

use crate::domain::{ReturnExchangeEntry, ReviewFileKind, ReviewOrder};
use crate::error::{ImportError, ImportResult};
use crate::normalize;
use crate::reader::{self, SheetGrid};

/// 파일명 접두사로 리뷰 파일 종류 판별 (대소문자 무시)
pub fn detect_review_file_kind(file_name: &str) -> ReviewFileKind {
    let lowered = file_name.to_lowercase();

    if lowered.starts_with("deliverylist") {
        ReviewFileKind::Orders
    } else if lowered.starts_with("returndelivery") {
        ReviewFileKind::Returns
    } else if lowered.starts_with("exchange") {
        ReviewFileKind::Exchanges
    } else {
        ReviewFileKind::Unknown
    }
}

/// 배송 완료 주문 파일 파싱
///
/// 헤더는 0행 고정, 컬럼은 헤더명 부분 일치로 찾는다.
/// 주문번호/수취인명/전화번호가 모두 있는 행만 대상에 올림
pub fn parse_orders_file(path: &Path) -> ImportResult<Vec<ReviewOrder>> {
    let grid = load_review_grid(path)?;
    let headers = header_row(&grid);

    let order_number_col = find_column(&headers, &["주문번호"]);
    let product_name_col = find_column(&headers, &["등록상품명", "상품명"]);
    let receiver_name_col = find_column(&headers, &["수취인이름", "수취인명"]);
    let receiver_phone_col = find_column(&headers, &["수취인전화번호", "전화번호"]);

    let mut missing = Vec::new();
    if order_number_col.is_none() {
        missing.push("주문번호");
    }
    if product_name_col.is_none() {
        missing.push("등록상품명");
    }
    if receiver_name_col.is_none() {
        missing.push("수취인이름");
    }
    if receiver_phone_col.is_none() {
        missing.push("수취인전화번호");
    }
    if !missing.is_empty() {
        return Err(ImportError::MissingColumns(missing.join(", ")));
    }

    let order_number_col = order_number_col.unwrap_or_default();
    let product_name_col = product_name_col.unwrap_or_default();
    let receiver_name_col = receiver_name_col.unwrap_or_default();
    let receiver_phone_col = receiver_phone_col.unwrap_or_default();

    let mut orders = Vec::new();
    for row_index in 1..grid.row_count() {
        let order_number = grid.cell(row_index, order_number_col).to_display_string();
        let order_number = order_number.trim();
        let receiver_name = grid.cell(row_index, receiver_name_col).to_display_string();
        let receiver_name = receiver_name.trim();
        let phone_cell = grid.cell(row_index, receiver_phone_col);
        let raw_phone = phone_cell.to_display_string();

        if order_number.is_empty() || receiver_name.is_empty() || raw_phone.trim().is_empty() {
            continue;
        }

        orders.push(ReviewOrder {
            order_number: order_number.to_string(),
            product_name: grid
                .cell(row_index, product_name_col)
                .to_display_string()
                .trim()
                .to_string(),
            receiver_name: receiver_name.to_string(),
            receiver_phone: normalize::format_phone(phone_cell),
        });
    }

    debug!(row_count = orders.len(), "배송 완료 주문 파싱 완료");
    Ok(orders)
}

/// 반품/교환 명단 파일 파싱 (주문번호 + 수취인명만 사용)
pub fn parse_return_exchange_file(path: &Path) -> ImportResult<Vec<ReturnExchangeEntry>> {
    let grid = load_review_grid(path)?;
    let headers = header_row(&grid);

    let order_number_col = find_column(&headers, &["주문번호"]);
    let receiver_name_col = find_column(&headers, &["수취인", "수취인이름", "수취인명", "고객명"]);

    let mut missing = Vec::new();
    if order_number_col.is_none() {
        missing.push("주문번호");
    }
    if receiver_name_col.is_none() {
        missing.push("수취인");
    }
    if !missing.is_empty() {
        return Err(ImportError::MissingColumns(missing.join(", ")));
    }

    let order_number_col = order_number_col.unwrap_or_default();
    let receiver_name_col = receiver_name_col.unwrap_or_default();

    let mut entries = Vec::new();
    for row_index in 1..grid.row_count() {
        let order_number = grid.cell(row_index, order_number_col).to_display_string();
        let order_number = order_number.trim();
        let receiver_name = grid.cell(row_index, receiver_name_col).to_display_string();
        let receiver_name = receiver_name.trim();

        if order_number.is_empty() || receiver_name.is_empty() {
            continue;
        }

        entries.push(ReturnExchangeEntry {
            order_number: order_number.to_string(),
            receiver_name: receiver_name.to_string(),
        });
    }

    debug!(row_count = entries.len(), "반품/교환 명단 파싱 완료");
    Ok(entries)
}

// 헤더 행 + 데이터 행이 갖춰졌는지까지만 확인
fn load_review_grid(path: &Path) -> ImportResult<SheetGrid> {
    let grid = reader::load_grid(path)?;
    if grid.row_count() < 2 {
        return Err(ImportError::EmptyFile(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        ));
    }
    Ok(grid)
}

fn header_row(grid: &SheetGrid) -> Vec<String> {
    grid.row(0)
        .iter()
        .map(|cell| cell.to_display_string().trim().to_string())
        .collect()
}

// 헤더명 부분 일치로 첫 번째 열 인덱스 탐색
fn find_column(headers: &[String], needles: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|header| needles.iter().any(|needle| header.contains(needle)))
}

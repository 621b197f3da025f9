// ==========================================
// 플랫폼 주문 통합 시스템 - 리뷰 대상 필터링
// ==========================================
// 규칙: 반품/교환은 주문번호#수취인명 복합 키로,
//       CS 건은 주문번호 단독으로 대조해 제외
// ==========================================

use std::collections::HashSet;

use tracing::info;

use crate::domain::{CsSheetEntry, FilterReport, ReturnExchangeEntry, ReviewOrder};
use crate::error::{ImportError, ImportResult};

/// 주문 목록에서 반품/교환/CS 건을 제외한 최종 발송 대상 산출
pub fn filter_candidates(
    orders: &[ReviewOrder],
    returns: &[ReturnExchangeEntry],
    exchanges: &[ReturnExchangeEntry],
    cs_entries: &[CsSheetEntry],
) -> FilterReport {
    let original_count = orders.len();

    let return_keys: HashSet<String> = returns.iter().map(composite_key_of).collect();
    let exchange_keys: HashSet<String> = exchanges.iter().map(composite_key_of).collect();
    let cs_numbers: HashSet<&str> = cs_entries
        .iter()
        .map(|entry| entry.order_number.as_str())
        .collect();

    let mut candidates = Vec::new();
    let mut removed_returns = Vec::new();
    let mut removed_exchanges = Vec::new();
    let mut removed_cs = Vec::new();

    for order in orders {
        let key = format!("{}#{}", order.order_number, order.receiver_name);

        if return_keys.contains(&key) {
            removed_returns.push(order.clone());
        } else if exchange_keys.contains(&key) {
            removed_exchanges.push(order.clone());
        } else if cs_numbers.contains(order.order_number.as_str()) {
            removed_cs.push(order.clone());
        } else {
            candidates.push(order.clone());
        }
    }

    let final_count = candidates.len();
    let removed_count = original_count - final_count;

    info!(
        original_rows = original_count,
        final_rows = final_count,
        removed_rows = removed_count,
        removed_returns = removed_returns.len(),
        removed_exchanges = removed_exchanges.len(),
        removed_cs = removed_cs.len(),
        "리뷰 대상 필터링 완료"
    );

    FilterReport {
        original_count,
        final_count,
        removed_count,
        candidates,
        removed_returns,
        removed_exchanges,
        removed_cs,
        cs_error: None,
    }
}

fn composite_key_of(entry: &ReturnExchangeEntry) -> String {
    format!("{}#{}", entry.order_number, entry.receiver_name)
}

/// 최종 발송 대상 → CSV 문자열 (모든 필드 따옴표, 빈 목록은 빈 문자열)
pub fn candidates_to_csv(candidates: &[ReviewOrder]) -> ImportResult<String> {
    if candidates.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(["주문번호", "상품명", "수취인명", "수취인전화번호"])?;
    for candidate in candidates {
        writer.write_record([
            candidate.order_number.as_str(),
            candidate.product_name.as_str(),
            candidate.receiver_name.as_str(),
            candidate.receiver_phone.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ImportError::CsvParseError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ImportError::CsvParseError(e.to_string()))
}

// ==========================================
// 플랫폼 주문 통합 시스템 - CS 시트 연동 경계
// ==========================================
// 역할: CS 접수 스프레드시트(CSV 수출본)를 가져오는 인터페이스.
//       네트워크 구현은 호출 측 몫이고, 여기서는 계약과 파싱만 둔다
// ==========================================

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::{CsSheetEntry, FilterReport, ReturnExchangeEntry, ReviewOrder};
use crate::review::filter;

// ==========================================
// CsSheetFeed Trait
// ==========================================
// 용도: CS 시트 CSV 본문 조회
// 구현자: 호출 측 (HTTP 클라이언트, 테스트 스텁 등)
#[async_trait]
pub trait CsSheetFeed: Send + Sync {
    /// CS 시트의 CSV 본문을 가져온다
    async fn fetch_csv(&self) -> anyhow::Result<String>;
}

/// CS 시트 CSV 본문 → 주문번호 목록 (헤더 행 제외, A열만 사용)
pub fn parse_cs_sheet_csv(text: &str) -> Vec<CsSheetEntry> {
    let body = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut entries = Vec::new();
    for record in reader.records().flatten() {
        let order_number = record.get(0).unwrap_or("").trim();
        if !order_number.is_empty() {
            entries.push(CsSheetEntry {
                order_number: order_number.to_string(),
            });
        }
    }
    entries
}

/// CS 시트까지 반영한 최종 발송 대상 산출
///
/// CS 시트 조회가 실패해도 발송 목록 생성은 계속한다.
/// 이 경우 CS 제외 없이 필터링하고 결과에 실패 사유를 남김
pub async fn build_candidates_with_feed(
    orders: &[ReviewOrder],
    returns: &[ReturnExchangeEntry],
    exchanges: &[ReturnExchangeEntry],
    feed: &dyn CsSheetFeed,
) -> FilterReport {
    match feed.fetch_csv().await {
        Ok(text) => {
            let cs_entries = parse_cs_sheet_csv(&text);
            info!(cs_rows = cs_entries.len(), "CS 시트 주문번호 조회 완료");
            filter::filter_candidates(orders, returns, exchanges, &cs_entries)
        }
        Err(e) => {
            warn!(error = %e, "CS 시트 조회 실패, CS 제외 없이 진행");
            let mut report = filter::filter_candidates(orders, returns, exchanges, &[]);
            report.cs_error = Some(format!("구글 스프레드시트 연동 실패: {}", e));
            report
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct StubFeed {
        body: Option<&'static str>,
    }

    #[async_trait]
    impl CsSheetFeed for StubFeed {
        async fn fetch_csv(&self) -> anyhow::Result<String> {
            match self.body {
                Some(body) => Ok(body.to_string()),
                None => Err(anyhow!("HTTP 오류: 403")),
            }
        }
    }

    fn order(number: &str) -> ReviewOrder {
        ReviewOrder {
            order_number: number.to_string(),
            product_name: "텀블러".to_string(),
            receiver_name: "김영희".to_string(),
            receiver_phone: "01012345678".to_string(),
        }
    }

    #[test]
    fn test_parse_cs_sheet_csv_skips_header_and_blanks() {
        let text = "\u{feff}주문번호,접수일\nA-1,2025-07-21\n\n\"A-2\",2025-07-22\n,비고만\n";
        let entries = parse_cs_sheet_csv(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].order_number, "A-1");
        assert_eq!(entries[1].order_number, "A-2");
    }

    #[tokio::test]
    async fn test_build_candidates_with_feed_applies_cs() {
        let orders = vec![order("A-1"), order("A-2")];
        let feed = StubFeed {
            body: Some("주문번호\nA-1\n"),
        };

        let report = build_candidates_with_feed(&orders, &[], &[], &feed).await;
        assert_eq!(report.final_count, 1);
        assert_eq!(report.candidates[0].order_number, "A-2");
        assert_eq!(report.removed_cs.len(), 1);
        assert!(report.cs_error.is_none());
    }

    #[tokio::test]
    async fn test_build_candidates_with_feed_continues_on_error() {
        let orders = vec![order("A-1"), order("A-2")];
        let feed = StubFeed { body: None };

        let report = build_candidates_with_feed(&orders, &[], &[], &feed).await;
        // CS 제외 없이 전체가 대상에 남고 실패 사유만 남는다
        assert_eq!(report.final_count, 2);
        assert!(report
            .cs_error
            .as_deref()
            .unwrap()
            .contains("구글 스프레드시트 연동 실패"));
    }
}

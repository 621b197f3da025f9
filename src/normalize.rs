// ==========================================
// 플랫폼 주문 통합 시스템 - 필드 정규화기
// ==========================================
// 역할: 전화번호/우편번호/금액/날짜 셀 값을 표준 형태로 변환
// 원칙: 셀 값 하나에 대한 순수 함수, 실패는 빈 문자열/0 으로 수렴
// ==========================================

use chrono::{Duration, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::reader::Cell;

// ===== 날짜 패턴 =====
static RE_ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static RE_DATETIME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})[T ]\d{2}:\d{2}").unwrap());
static RE_DATETIME_FULL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2}) \d{2}:\d{2}:\d{2}$").unwrap());
static RE_DOTTED_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})\.(\d{1,2})\.(\d{1,2})").unwrap());
static RE_BARE_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());
static RE_YYYYMMDD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{8}$").unwrap());

// ==========================================
// 전화번호 / 우편번호 / 금액 / 수량
// ==========================================

/// 전화번호 정규화: 숫자 이외 문자 제거
pub fn format_phone(value: &Cell) -> String {
    value
        .to_display_string()
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect()
}

/// 우편번호 정규화: 5자리 미만이면 앞을 0 으로 채움
pub fn pad_zip(value: &Cell) -> String {
    let zip = value.to_display_string().trim().to_string();
    if zip.is_empty() {
        return zip;
    }
    format!("{:0>5}", zip)
}

/// 금액 정규화: 숫자 이외 문자 제거 후 정수 파싱, 실패 시 0
pub fn parse_price(value: &Cell) -> i64 {
    let digits: String = value
        .to_display_string()
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<i64>().unwrap_or(0)
}

/// 수량 정규화: 숫자 셀은 그대로, 텍스트는 정수/실수 파싱, 실패 시 0
pub fn parse_quantity(value: &Cell) -> i64 {
    match value {
        Cell::Empty => 0,
        Cell::Number(n) => *n as i64,
        Cell::Text(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .or_else(|_| trimmed.parse::<f64>().map(|f| f as i64))
                .unwrap_or(0)
        }
    }
}

// ==========================================
// 날짜 정규화 (공통)
// ==========================================

/// 범용 날짜 정규화: YYYY-MM-DD 통과, 날짜시각은 날짜부만 절단,
/// 그 외는 대체 형식 체인 시도, 실패 시 빈 문자열
pub fn parse_date(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if RE_ISO_DATE.is_match(trimmed) {
        return trimmed.to_string();
    }

    if let Some(caps) = RE_DATETIME_PREFIX.captures(trimmed) {
        return caps[1].to_string();
    }

    fallback_date(trimmed).unwrap_or_default()
}

// 대체 형식 체인 (원본 시스템의 범용 Date 파싱을 명시적 형식 목록으로 치환)
fn fallback_date(value: &str) -> Option<String> {
    let formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
    for format in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date().format("%Y-%m-%d").to_string());
        }
    }

    let date_formats = ["%Y/%m/%d", "%Y-%m-%d"];
    for format in date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }

    None
}

// Excel 시리얼(1900 체계) → 날짜, 유닉스 epoch 일수 환산
fn excel_serial_to_date(serial: f64) -> Option<String> {
    let days = serial.trunc() as i64 - 25569;
    let date = NaiveDate::from_ymd_opt(1970, 1, 1)?.checked_add_signed(Duration::days(days))?;
    Some(date.format("%Y-%m-%d").to_string())
}

// 문자열 시리얼 경로: 1900-01-01 기준 + (n - 2)일 (1900 윤년 버그 보정)
// 정수 시리얼에서는 epoch 환산과 같은 달력 날짜가 된다
fn serial_1900_to_date(days: i64) -> Option<String> {
    let date =
        NaiveDate::from_ymd_opt(1900, 1, 1)?.checked_add_signed(Duration::days(days - 2))?;
    Some(date.format("%Y-%m-%d").to_string())
}

// YYYY.M.D 패턴 (월/일 제로 패딩 없음, 뒤따르는 시각 텍스트 무시)
fn dotted_date(value: &str) -> Option<String> {
    let caps = RE_DOTTED_DATE.captures(value)?;
    let year = &caps[1];
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    Some(format!("{}-{:02}-{:02}", year, month, day))
}

// ==========================================
// 날짜 정규화 (플랫폼별)
// ==========================================

/// 네이버: 숫자 셀은 Excel 시리얼, 텍스트는 YYYY.M.D → 범용 순
pub fn parse_naver_date(value: &Cell) -> String {
    if let Cell::Number(serial) = value {
        return excel_serial_to_date(*serial).unwrap_or_default();
    }

    let raw = value.to_display_string();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if let Some(date) = dotted_date(trimmed) {
        return date;
    }
    parse_date(trimmed)
}

/// 쿠팡: YYYY-MM-DD HH:MM:SS 절단, 시리얼 추정 범위(25000~50000)의
/// 정수 문자열은 1900 기준 환산, 그 외는 범용 파싱
pub fn parse_coupang_date(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if let Some(caps) = RE_DATETIME_FULL.captures(trimmed) {
        return caps[1].to_string();
    }

    if RE_BARE_INT.is_match(trimmed) {
        if let Ok(days) = trimmed.parse::<i64>() {
            if days > 25000 && days < 50000 {
                return serial_1900_to_date(days).unwrap_or_default();
            }
        }
    }

    parse_date(trimmed)
}

/// 토스: 이미 YYYY-MM-DD 로 내려오므로 통과, 예외만 범용 파싱
pub fn parse_toss_date(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if RE_ISO_DATE.is_match(trimmed) {
        return trimmed.to_string();
    }
    parse_date(trimmed)
}

/// ESM: 시리얼 숫자 + YYYY.M.D + 날짜시각 절단 + 문자열 시리얼 모두 허용
pub fn parse_esm_date(value: &Cell) -> String {
    if let Cell::Number(serial) = value {
        return excel_serial_to_date(*serial).unwrap_or_default();
    }

    let raw = value.to_display_string();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if RE_ISO_DATE.is_match(trimmed) {
        return trimmed.to_string();
    }
    if let Some(date) = dotted_date(trimmed) {
        return date;
    }
    if let Some(caps) = RE_DATETIME_PREFIX.captures(trimmed) {
        return caps[1].to_string();
    }
    if RE_BARE_INT.is_match(trimmed) {
        if let Ok(days) = trimmed.parse::<i64>() {
            if days > 25000 && days < 50000 {
                return serial_1900_to_date(days).unwrap_or_default();
            }
        }
    }

    parse_date(trimmed)
}

/// 자사몰: 날짜 셀이 아니라 주문번호 앞 8자리(YYYYMMDD)에서 유도
pub fn parse_cafe24_date(order_number: &str) -> String {
    let trimmed = order_number.trim();

    let head = match trimmed.get(0..8) {
        Some(head) => head,
        None => {
            warn!(order_number = %trimmed, "주문번호에서 날짜 추출 실패");
            return String::new();
        }
    };

    if !RE_YYYYMMDD.is_match(head) {
        warn!(order_number = %trimmed, "주문번호에서 날짜 추출 실패");
        return String::new();
    }

    format!("{}-{}-{}", &head[0..4], &head[4..6], &head[6..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone(&text("010-1234-5678")), "01012345678");
        assert_eq!(format_phone(&text("")), "");
        assert_eq!(format_phone(&text("+82 10 1234 5678")), "821012345678");
        assert_eq!(format_phone(&Cell::Number(1012345678.0)), "1012345678");
    }

    #[test]
    fn test_pad_zip() {
        assert_eq!(pad_zip(&text("123")), "00123");
        assert_eq!(pad_zip(&Cell::Number(12345.0)), "12345");
        assert_eq!(pad_zip(&text("")), "");
        assert_eq!(pad_zip(&text(" 06230 ")), "06230");
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(&text("63,000원")), 63000);
        assert_eq!(parse_price(&text("")), 0);
        assert_eq!(parse_price(&text("무료")), 0);
        assert_eq!(parse_price(&Cell::Number(63000.0)), 63000);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(&text("3")), 3);
        assert_eq!(parse_quantity(&Cell::Number(2.0)), 2);
        assert_eq!(parse_quantity(&text("두개")), 0);
        assert_eq!(parse_quantity(&Cell::Empty), 0);
    }

    #[test]
    fn test_parse_date_generic() {
        assert_eq!(parse_date("2025-07-21"), "2025-07-21");
        assert_eq!(parse_date("2025-07-21 14:30"), "2025-07-21");
        assert_eq!(parse_date("2025-07-21T05:00:00.000Z"), "2025-07-21");
        assert_eq!(parse_date("2025/7/21"), "2025-07-21");
        assert_eq!(parse_date("날짜아님"), "");
        assert_eq!(parse_date(""), "");
    }

    #[test]
    fn test_parse_naver_date_serial() {
        // 시리얼 45678 = 2025-01-21 ((45678 - 25569)일 후)
        assert_eq!(parse_naver_date(&Cell::Number(45678.0)), "2025-01-21");
    }

    #[test]
    fn test_parse_naver_date_dotted() {
        assert_eq!(parse_naver_date(&text("2025.7.21 12:42 PM")), "2025-07-21");
        assert_eq!(parse_naver_date(&text("2025.12.3")), "2025-12-03");
    }

    #[test]
    fn test_parse_coupang_date() {
        assert_eq!(parse_coupang_date("2025-07-18 09:12:00"), "2025-07-18");
        // 문자열 시리얼은 1900 기준 보정 공식으로 같은 날짜가 나와야 함
        assert_eq!(parse_coupang_date("45678"), "2025-01-21");
        assert_eq!(parse_coupang_date("123"), "");
        assert_eq!(parse_coupang_date(""), "");
    }

    #[test]
    fn test_parse_toss_date() {
        assert_eq!(parse_toss_date("2025-07-18"), "2025-07-18");
        assert_eq!(parse_toss_date("2025-07-18 10:00"), "2025-07-18");
    }

    #[test]
    fn test_parse_esm_date() {
        assert_eq!(parse_esm_date(&Cell::Number(45678.0)), "2025-01-21");
        assert_eq!(parse_esm_date(&text("2025-07-18")), "2025-07-18");
        assert_eq!(parse_esm_date(&text("2025.7.18")), "2025-07-18");
        assert_eq!(parse_esm_date(&text("2025-07-18 09:12:00")), "2025-07-18");
        assert_eq!(parse_esm_date(&text("2025-07-18T09:12:00")), "2025-07-18");
        assert_eq!(parse_esm_date(&text("45678")), "2025-01-21");
    }

    #[test]
    fn test_parse_cafe24_date() {
        assert_eq!(parse_cafe24_date("20250121-0000001"), "2025-01-21");
        assert_eq!(parse_cafe24_date("abc"), "");
        assert_eq!(parse_cafe24_date("2025012-0000001"), "");
        assert_eq!(parse_cafe24_date(""), "");
    }
}

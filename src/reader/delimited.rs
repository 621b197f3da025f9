// ==========================================
// 플랫폼 주문 통합 시스템 - 구분자 텍스트 리더
// ==========================================
// 대상: 자사몰(Cafe24) 주문 CSV
// 규칙: 따옴표 안 쉼표 유지, "" 는 " 로 복원,
//       따옴표 없는 숫자 필드만 숫자로 강제 변환
// ==========================================

use crate::reader::sheet::{Cell, SheetGrid};

/// 구분자 텍스트 → 그리드
///
/// 선두 BOM 은 제거하고 빈 줄은 건너뛴다. csv 크레이트 리더는
/// 필드의 따옴표 여부를 노출하지 않아 이 경로만 수동 분할을 유지한다.
pub fn parse_text(content: &str) -> SheetGrid {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut rows = Vec::new();
    for line in content.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        rows.push(split_line(line));
    }

    SheetGrid::new(rows)
}

// 한 줄을 필드 단위로 분할 (따옴표 상태 추적)
fn split_line(line: &str) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut was_quoted = false;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // 이스케이프된 따옴표
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                    was_quoted = true;
                }
            }
            ',' if !in_quotes => {
                cells.push(finish_field(&field, was_quoted));
                field.clear();
                was_quoted = false;
            }
            _ => field.push(ch),
        }
    }
    cells.push(finish_field(&field, was_quoted));

    cells
}

fn finish_field(raw: &str, was_quoted: bool) -> Cell {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Cell::Empty;
    }

    if !was_quoted {
        if let Ok(n) = trimmed.parse::<f64>() {
            if n.is_finite() {
                return Cell::Number(n);
            }
        }
    }

    Cell::Text(trimmed.to_string())
}

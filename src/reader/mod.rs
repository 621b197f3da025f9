// ==========================================
// 플랫폼 주문 통합 시스템 - 파일 리더 계층
// ==========================================
// 지원: Excel (.xlsx/.xls) / CSV (.csv)
// 출력: 헤더 해석 없는 2차원 셀 그리드
// ==========================================

pub mod delimited;
pub mod sheet;

pub use sheet::{Cell, SheetGrid};

use std::path::Path;

use crate::error::{ImportError, ImportResult};

// ==========================================
// 통합 그리드 로더 (확장자로 리더 자동 선택)
// ==========================================
pub fn load_grid(path: &Path) -> ImportResult<SheetGrid> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => {
            let content = std::fs::read_to_string(path)?;
            Ok(delimited::parse_text(&content))
        }
        "xlsx" | "xls" => sheet::read_workbook(path),
        _ => Err(ImportError::UnsupportedFormat(ext)),
    }
}

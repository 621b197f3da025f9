// ==========================================
// 플랫폼 주문 통합 시스템 - 스프레드시트 리더
// ==========================================
// 도구: calamine (워크북 형식 자동 감지)
// 출력: 첫 번째 워크시트의 2차원 셀 그리드
// ==========================================

use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use crate::error::{ImportError, ImportResult};

// ==========================================
// 셀 (Cell)
// ==========================================
// 매핑 단계에서만 쓰이는 문자열|숫자 태그 유니언.
// 날짜 서식 셀은 Excel 시리얼 숫자로 유지하고 변환은 정규화기가 담당
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    /// 원본 시스템의 문자열 강제 변환과 동일한 표시 문자열
    /// (정수값 숫자는 소수점 없이 출력)
    pub fn to_display_string(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
        }
    }

    /// 숫자 값 (숫자 셀 또는 숫자로 파싱되는 텍스트 셀)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Empty => None,
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// 공백 제거 후 내용이 없는 셀인지 (숫자 셀은 항상 내용 있음)
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }
}

static EMPTY_CELL: Cell = Cell::Empty;

// ==========================================
// 시트 그리드 (SheetGrid)
// ==========================================
// 행 순서 보존, 범위 밖 접근은 빈 셀 반환
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    rows: Vec<Vec<Cell>>,
}

impl SheetGrid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        SheetGrid { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// 행 슬라이스 (범위 밖은 빈 슬라이스)
    pub fn row(&self, index: usize) -> &[Cell] {
        self.rows.get(index).map(|r| r.as_slice()).unwrap_or(&[])
    }

    /// (행, 열) 셀 접근 (범위 밖은 빈 셀)
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }
}

// ==========================================
// 워크북 → 그리드
// ==========================================
pub fn read_workbook(path: &Path) -> ImportResult<SheetGrid> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;

    let sheet_names = workbook.sheet_names();
    if sheet_names.is_empty() {
        return Err(ImportError::ExcelParseError(
            "워크시트가 없습니다".to_string(),
        ));
    }

    let sheet_name = sheet_names[0].clone();
    let range = workbook.worksheet_range(&sheet_name)?;

    // 사용 범위 시작 오프셋을 빈 셀로 채워 절대 열/행 인덱스를 보존
    // (열 T = 19, 열 A = 0 같은 고정 인덱스 휴리스틱이 이 정렬에 의존)
    let (row_offset, col_offset) = match range.start() {
        Some((r, c)) => (r as usize, c as usize),
        None => return Ok(SheetGrid::default()),
    };

    let mut rows = Vec::with_capacity(row_offset + range.height());
    for _ in 0..row_offset {
        rows.push(Vec::new());
    }
    for data_row in range.rows() {
        let mut cells = vec![Cell::Empty; col_offset];
        cells.extend(data_row.iter().map(convert_cell));
        rows.push(cells);
    }

    Ok(SheetGrid::new(rows))
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) => Cell::Text(s.clone()),
        Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(format!("{:?}", e)),
    }
}

// ==========================================
// 플랫폼 주문 통합 시스템 - 플랫폼 파서 계층
// ==========================================
// 역할: 파서 공통 계약, 플랫폼 → 파서 레지스트리,
//       헤더 행 탐지와 헤더명 기반 셀 조회 공통 도구
// ==========================================

pub mod always;
pub mod cafe24;
pub mod coupang;
pub mod elevenst;
pub mod esm;
pub mod kakao;
pub mod naver;
pub mod ohouse;
pub mod toss;

pub use always::AlwaysParser;
pub use cafe24::Cafe24Parser;
pub use coupang::CoupangParser;
pub use elevenst::ElevenstParser;
pub use esm::EsmParser;
pub use kakao::KakaoParser;
pub use naver::NaverParser;
pub use ohouse::OhouseParser;
pub use toss::TossParser;

use std::collections::HashMap;
use std::path::Path;

use crate::domain::{Platform, PlatformOrder, ValidationReport};
use crate::error::ImportResult;
use crate::reader::{Cell, SheetGrid};

// ==========================================
// 파서 공통 계약 (OrderParser)
// ==========================================
pub trait OrderParser: Send + Sync {
    /// 이 파서가 담당하는 플랫폼 태그 목록
    fn platforms(&self) -> &'static [Platform];

    /// 파일 → 표준 주문 레코드 목록
    ///
    /// 매핑은 헤더명 조회만 수행하고, 비어 있는 컬럼은 빈 값으로
    /// 내려보낸다. 필수 값 검사는 validate 가 담당한다.
    fn parse(&self, path: &Path) -> ImportResult<Vec<PlatformOrder>>;

    /// 매핑 결과 검증. 위반은 행 단위 메시지로 전부 누적
    fn validate(&self, records: &[PlatformOrder]) -> ValidationReport;
}

// ==========================================
// 레지스트리 (닫힌 열거형 → 파서)
// ==========================================
// 네이버 두 스토어는 같은 파서가 담당
pub fn parser_for(platform: Platform) -> &'static dyn OrderParser {
    match platform {
        Platform::NaverOneway | Platform::NaverHygge => &NaverParser,
        Platform::Coupang => &CoupangParser,
        Platform::Toss => &TossParser,
        Platform::Ohouse => &OhouseParser,
        Platform::Esm => &EsmParser,
        Platform::Elevenst => &ElevenstParser,
        Platform::Always => &AlwaysParser,
        Platform::Cafe24 => &Cafe24Parser,
        Platform::Kakao => &KakaoParser,
    }
}

// ==========================================
// 헤더 행 탐지
// ==========================================

/// 0행, 1행 순서로 필수 헤더 부분 문자열과 대조해 헤더 행을 찾는다.
/// 앞 20개 열에서 3개 이상 일치하는 첫 행이 헤더, 없으면 0행
/// (수출 회차에 따라 제목 행이 헤더 위에 끼는 경우 대비)
pub fn find_header_row(grid: &SheetGrid, required_headers: &[&str]) -> usize {
    let candidate_rows = grid.row_count().min(2);
    for row_index in 0..candidate_rows {
        let mut found = 0;
        for cell in grid.row(row_index).iter().take(20) {
            let value = cell.to_display_string();
            let value = value.trim();
            if !value.is_empty() && required_headers.iter().any(|h| value.contains(h)) {
                found += 1;
            }
        }
        if found >= 3 {
            return row_index;
        }
    }
    0
}

// ==========================================
// 헤더명 → 열 인덱스 조회
// ==========================================

static MISSING_CELL: Cell = Cell::Empty;

pub struct HeaderIndex {
    columns: HashMap<String, usize>,
}

impl HeaderIndex {
    /// 헤더 행에서 조회 테이블 구성 (중복 헤더는 먼저 나온 열 우선)
    pub fn from_row(row: &[Cell]) -> Self {
        let mut columns = HashMap::new();
        for (index, cell) in row.iter().enumerate() {
            let name = cell.to_display_string().trim().to_string();
            if name.is_empty() {
                continue;
            }
            columns.entry(name).or_insert(index);
        }
        HeaderIndex { columns }
    }

    /// 헤더명으로 셀 조회. 없는 헤더는 빈 셀 (오류 아님)
    pub fn cell<'g>(&self, grid: &'g SheetGrid, row: usize, header: &str) -> &'g Cell {
        match self.columns.get(header) {
            Some(&col) => grid.cell(row, col),
            None => &MISSING_CELL,
        }
    }
}

/// 모든 셀이 비어 있는 행 여부 (데이터 행 순회 시 건너뜀)
pub fn is_blank_row(row: &[Cell]) -> bool {
    row.iter().all(|cell| cell.is_blank())
}

// ==========================================
// 공통 검증 규칙
// ==========================================

// 라벨은 조사와 맞물리므로 번호 계열(…번호)과 이름 계열(…명)만 사용
pub(crate) fn validate_common(
    records: &[PlatformOrder],
    number_label: &str,
    receiver_label: &str,
) -> Vec<String> {
    let mut errors = Vec::new();

    if records.is_empty() {
        errors.push("데이터가 없습니다.".to_string());
        return errors;
    }

    for (index, record) in records.iter().enumerate() {
        let row = index + 1;
        if record.order_number.trim().is_empty() {
            errors.push(format!("{}행: {}가 누락되었습니다.", row, number_label));
        }
        if record.product_name.trim().is_empty() {
            errors.push(format!("{}행: 상품명이 누락되었습니다.", row));
        }
        if record.receiver_name.trim().is_empty() {
            errors.push(format!("{}행: {}이 누락되었습니다.", row, receiver_label));
        }
        if record.quantity <= 0 {
            errors.push(format!("{}행: 수량이 올바르지 않습니다.", row));
        }
        if record.final_price <= 0 {
            errors.push(format!("{}행: 총 금액이 올바르지 않습니다.", row));
        }
    }

    errors
}

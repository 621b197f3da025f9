// ==========================================
// 플랫폼 주문 통합 시스템 - 오류 타입
// ==========================================
// 도구: thiserror 파생 매크로
// 방침: 파일 단위 실패는 결과 구조체로 반환하고,
//       이 타입은 파서/리더 내부 오류 전파에만 사용
// ==========================================

use thiserror::Error;

/// 주문 파일 처리 오류 타입
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 파일 관련 오류 =====
    #[error("파일이 존재하지 않습니다: {0}")]
    FileNotFound(String),

    #[error("지원하지 않는 파일 형식: {0} (.xlsx/.xls/.csv 만 지원)")]
    UnsupportedFormat(String),

    #[error("파일 읽기 실패: {0}")]
    FileReadError(String),

    #[error("Excel 파싱 실패: {0}")]
    ExcelParseError(String),

    #[error("CSV 파싱 실패: {0}")]
    CsvParseError(String),

    // ===== 데이터 관련 오류 =====
    #[error("파일에 데이터가 없습니다: {0}")]
    EmptyFile(String),

    #[error("필수 컬럼이 누락되었습니다: {0}")]
    MissingColumns(String),

    // ===== 플랫폼 파서 오류 =====
    #[error("{platform} 파일 파싱 실패: {message}")]
    ParseFailed { platform: String, message: String },

    // ===== 공통 오류 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImportError {
    /// 리더 오류를 플랫폼 파서 오류로 감싼다 (플랫폼 라벨 부착)
    pub fn parse_failed(platform: &str, cause: impl std::fmt::Display) -> Self {
        ImportError::ParseFailed {
            platform: platform.to_string(),
            message: cause.to_string(),
        }
    }
}

// From<std::io::Error> 구현
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// From<csv::Error> 구현
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// From<calamine::Error> 구현
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 타입 별칭
pub type ImportResult<T> = Result<T, ImportError>;

// ==========================================
// 플랫폼 주문 통합 시스템 - 애플리케이션 설정
// ==========================================
// 저장 위치: {config_dir}/platform-orders/config.json
// 설정 파일이 없으면 기본값으로 동작
// ==========================================

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// CS 접수 시트 기본값 (운영 시트)
const DEFAULT_CS_SPREADSHEET_ID: &str = "19QL4S7C_6KmIEkiwyg30AKKZ5WTJG3vNl-z5PNSs5p0";
const DEFAULT_CS_SHEET_GID: &str = "1124062259";
const DEFAULT_EXPORT_PREFIX: &str = "integrated_orders";

/// 전체 애플리케이션 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// CS 접수 스프레드시트 연동 설정
    #[serde(default)]
    pub cs_sheet: CsSheetConfig,

    /// 통합 CSV 내보내기 설정
    #[serde(default)]
    pub export: ExportConfig,
}

/// CS 접수 스프레드시트 위치
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsSheetConfig {
    pub spreadsheet_id: String,
    pub gid: String,
}

/// 통합 CSV 내보내기 옵션
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// 저장 디렉터리 (없으면 호출 측이 정함)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// 저장 파일명 접두사
    #[serde(default = "default_export_prefix")]
    pub file_prefix: String,
}

fn default_export_prefix() -> String {
    DEFAULT_EXPORT_PREFIX.to_string()
}

impl Default for CsSheetConfig {
    fn default() -> Self {
        CsSheetConfig {
            spreadsheet_id: DEFAULT_CS_SPREADSHEET_ID.to_string(),
            gid: DEFAULT_CS_SHEET_GID.to_string(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            output_dir: None,
            file_prefix: default_export_prefix(),
        }
    }
}

impl AppConfig {
    /// 설정 파일 경로 ({config_dir}/platform-orders/config.json)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("platform-orders").join("config.json"))
    }

    /// 설정 파일을 읽고, 없거나 깨져 있으면 기본값을 쓴다
    pub fn load_or_default() -> AppConfig {
        let Some(path) = Self::config_path() else {
            return AppConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(config) => {
                    debug!(path = %path.display(), "설정 파일 로드 완료");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "설정 파일 파싱 실패, 기본값 사용");
                    AppConfig::default()
                }
            },
            Err(_) => AppConfig::default(),
        }
    }
}

impl CsSheetConfig {
    /// CS 시트 CSV 수출 URL
    pub fn export_csv_url(&self) -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{}/export?format=csv&gid={}",
            self.spreadsheet_id, self.gid
        )
    }
}

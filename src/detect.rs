// ==========================================
// 플랫폼 주문 통합 시스템 - 플랫폼 감지기
// ==========================================
// 역할: 파일명(+ 필요 시 내용 샘플)으로 출처 플랫폼 판별
// 원칙: 파일명 규칙 우선, 내용 검사는 네이버 스토어 구분에만 사용
// ==========================================

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::{debug, warn};
use unicode_normalization::UnicodeNormalization;

use crate::domain::{DetectionResult, Platform};
use crate::reader::{self, SheetGrid};

// 쿠팡 발송 파일명에 포함되는 (YYYY-MM-DD)_(n) 꼬리표
static RE_COUPANG_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\d{4}-\d{2}-\d{2}\)_\(\d+\)").unwrap());

/// 네이버 발주 파일에서 스토어 키워드를 찾는 고정 열 (열 T)
const NAVER_STORE_COLUMN: usize = 19;

// ==========================================
// 네이버 스토어 (storefront)
// ==========================================
// 원웨이/휘게가 같은 발주 파일 형식을 공유하므로 내용으로 구분
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaverStore {
    Oneway,
    Hygge,
}

impl NaverStore {
    pub fn platform(&self) -> Platform {
        match self {
            NaverStore::Oneway => Platform::NaverOneway,
            NaverStore::Hygge => Platform::NaverHygge,
        }
    }
}

// 파일명 규칙 매칭 결과 (네이버는 스토어 확정 전 중간 상태)
enum FilenameRule {
    Naver,
    Known(Platform),
}

// ==========================================
// 파일 감지기 (FileDetector)
// ==========================================
pub struct FileDetector;

impl FileDetector {
    /// 파일 1건의 출처 플랫폼 감지. 어떤 규칙에도 해당하지 않으면 None
    pub fn detect_platform(path: &Path) -> Option<DetectionResult> {
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

        // 1단계: CSV 확장자는 내용 검사 없이 자사몰로 확정
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext == "csv" {
            return Some(DetectionResult {
                platform: Platform::Cafe24,
                confidence: 0.9,
                reason: "CSV 파일 형식".to_string(),
            });
        }

        // 2단계: 파일명 규칙 매칭
        match Self::match_filename(file_name)? {
            FilenameRule::Naver => {
                // 3단계: 열 T 내용으로 스토어 확정 (읽기 실패 시 기본 스토어)
                let store = match reader::load_grid(path) {
                    Ok(grid) => Self::detect_naver_store(&grid),
                    Err(e) => {
                        warn!(file = %file_name, error = %e, "스토어 확인용 파일 읽기 실패, 기본 스토어 적용");
                        NaverStore::Oneway
                    }
                };
                debug!(file = %file_name, store = ?store, "네이버 스토어 확정");
                Some(DetectionResult {
                    platform: store.platform(),
                    confidence: 0.9,
                    reason: "파일명과 내용 분석".to_string(),
                })
            }
            FilenameRule::Known(platform) => Some(DetectionResult {
                platform,
                confidence: 0.8,
                reason: "파일명 패턴 매칭".to_string(),
            }),
        }
    }

    // 파일명 규칙 (순서 = 우선순위). 한글 비교를 위해 NFC 로 정규화
    fn match_filename(raw_name: &str) -> Option<FilenameRule> {
        let file_name: String = raw_name.nfc().collect();
        let lower = file_name.to_lowercase();

        if file_name.contains("스마트스토어") || file_name.starts_with("스마트") {
            return Some(FilenameRule::Naver);
        }
        if lower.starts_with("deliverylist") && RE_COUPANG_SUFFIX.is_match(&file_name) {
            return Some(FilenameRule::Known(Platform::Coupang));
        }
        if file_name.contains("주문배송 내역")
            || lower.contains("ohouse")
            || file_name.contains("오늘의집")
        {
            return Some(FilenameRule::Known(Platform::Ohouse));
        }
        if (file_name.contains("주문내역")
            && (file_name.contains("상품준비중") || file_name.contains("배송중")))
            || lower.contains("toss")
            || file_name.contains("토스")
        {
            return Some(FilenameRule::Known(Platform::Toss));
        }
        if lower.contains("11st") || file_name.contains("11번가") {
            return Some(FilenameRule::Known(Platform::Elevenst));
        }
        if lower.contains("always") || file_name.contains("올웨이즈") {
            return Some(FilenameRule::Known(Platform::Always));
        }
        if lower.contains("cafe24") || file_name.contains("자사몰") {
            return Some(FilenameRule::Known(Platform::Cafe24));
        }
        if lower.contains("kakao") || file_name.contains("카카오") {
            return Some(FilenameRule::Known(Platform::Kakao));
        }
        if file_name.contains("발송관리") || lower.contains("esm") {
            return Some(FilenameRule::Known(Platform::Esm));
        }

        None
    }

    /// 열 T 를 전체 행에서 훑어 스토어 키워드를 찾는다.
    /// 첫 매칭 셀이 결정하며, 키워드가 없으면 원웨이
    pub fn detect_naver_store(grid: &SheetGrid) -> NaverStore {
        for row_index in 0..grid.row_count() {
            let cell = grid.cell(row_index, NAVER_STORE_COLUMN);
            if cell.is_blank() {
                continue;
            }
            let value = cell.to_display_string().to_lowercase();
            if value.contains("휘게") || value.contains("hygge") {
                return NaverStore::Hygge;
            }
            if value.contains("원웨이") || value.contains("oneway") {
                return NaverStore::Oneway;
            }
        }
        NaverStore::Oneway
    }
}

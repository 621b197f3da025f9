// ==========================================
// 플랫폼 주문 통합 시스템 - 파일 처리 오케스트레이터
// ==========================================
// 흐름: 수신 → 감지 → 파싱 → 검증 → {성공 | 실패}
// 원칙: 재시도 없음, 실패 격리는 파일 단위
// ==========================================

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::detect::FileDetector;
use crate::domain::{Platform, PlatformOrder, ProcessingResult};
use crate::error::{ImportError, ImportResult};
use crate::parsers;

pub struct FileProcessor;

impl FileProcessor {
    /// 단일 파일 처리 (자동 감지 + 파싱 + 검증)
    #[instrument(skip_all, fields(file = %path.display()))]
    pub fn process_single_file(path: &Path) -> ProcessingResult {
        let file_name = file_name_of(path);

        debug!("단계 1: 플랫폼 감지");
        let detection = match FileDetector::detect_platform(path) {
            Some(detection) => detection,
            None => {
                warn!("플랫폼 감지 실패");
                return ProcessingResult::failure(
                    vec!["플랫폼을 감지할 수 없습니다.".to_string()],
                    Some(file_name),
                );
            }
        };
        info!(
            platform = %detection.platform,
            confidence = detection.confidence,
            reason = %detection.reason,
            "플랫폼 감지 완료"
        );

        Self::run_parser(path, detection.platform, &file_name)
    }

    /// 플랫폼을 수동 지정한 파일 처리 (감지 생략)
    #[instrument(skip_all, fields(file = %path.display(), platform = %platform_id))]
    pub fn process_with_platform(path: &Path, platform_id: &str) -> ProcessingResult {
        let file_name = file_name_of(path);

        let platform = match Platform::from_id(platform_id) {
            Some(platform) => platform,
            None => {
                warn!("미등록 플랫폼 식별자");
                return ProcessingResult::failure(
                    vec![format!("{} 플랫폼 파서를 찾을 수 없습니다.", platform_id)],
                    Some(file_name),
                )
                .with_platform(platform_id);
            }
        };

        Self::run_parser(path, platform, &file_name)
    }

    /// 여러 파일 순차 처리 (한 파일이 끝나야 다음 파일 시작)
    pub fn process_files(paths: &[PathBuf]) -> Vec<ProcessingResult> {
        info!(file_count = paths.len(), "파일 일괄 처리 시작");
        let results: Vec<ProcessingResult> = paths
            .iter()
            .map(|path| Self::process_single_file(path))
            .collect();
        let succeeded = results.iter().filter(|r| r.success).count();
        info!(
            file_count = results.len(),
            succeeded = succeeded,
            "파일 일괄 처리 완료"
        );
        results
    }

    /// 여러 파일의 성공 레코드를 입력 순서대로 이어붙여 통합 CSV 생성
    pub fn integrate_files(results: &[ProcessingResult]) -> ProcessingResult {
        let successful: Vec<&ProcessingResult> = results.iter().filter(|r| r.success).collect();

        if successful.is_empty() {
            return ProcessingResult::failure(
                vec!["처리 성공한 파일이 없습니다.".to_string()],
                None,
            );
        }

        let mut all_records: Vec<PlatformOrder> = Vec::new();
        for result in &successful {
            all_records.extend(result.data.iter().cloned());
        }

        match to_csv(&all_records) {
            Ok(csv_content) => {
                info!(
                    file_count = successful.len(),
                    row_count = all_records.len(),
                    "통합 처리 완료"
                );
                ProcessingResult {
                    success: true,
                    data: all_records,
                    errors: Vec::new(),
                    platform: Some("integrated".to_string()),
                    file_name: None,
                    csv_content: Some(csv_content),
                }
            }
            Err(e) => ProcessingResult::failure(
                vec![format!("통합 처리 중 오류 발생: {}", e)],
                None,
            ),
        }
    }

    // 감지/지정이 끝난 뒤의 공통 구간: 파싱 → 검증
    fn run_parser(path: &Path, platform: Platform, file_name: &str) -> ProcessingResult {
        let parser = parsers::parser_for(platform);

        debug!("단계 2: 파일 파싱");
        let records = match parser.parse(path) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "파일 파싱 실패");
                return ProcessingResult::failure(
                    vec![format!("파일 처리 중 오류 발생: {}", e)],
                    Some(file_name.to_string()),
                )
                .with_platform(platform.id());
            }
        };
        info!(row_count = records.len(), "파일 파싱 완료");

        debug!("단계 3: 데이터 검증");
        let report = parser.validate(&records);
        if !report.is_valid {
            warn!(error_count = report.errors.len(), "데이터 검증 실패");
            return ProcessingResult::failure(report.errors, Some(file_name.to_string()))
                .with_platform(platform.id());
        }

        info!(row_count = records.len(), "파일 처리 성공");
        ProcessingResult::success(records, platform.id(), file_name)
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

// ==========================================
// 통합 CSV 직렬화
// ==========================================

/// 표준 레코드 목록 → CSV 문자열 (모든 필드 따옴표, LF 줄바꿈)
/// 컬럼 순서는 PlatformOrder 필드 선언 순서를 그대로 따른다
pub fn to_csv(records: &[PlatformOrder]) -> ImportResult<String> {
    if records.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    for record in records {
        writer.serialize(record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ImportError::CsvParseError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ImportError::CsvParseError(e.to_string()))
}

/// Excel 한글 호환용 BOM 부착 (다운로드/저장 직전에만 적용)
pub fn with_bom(csv_content: &str) -> String {
    format!("\u{feff}{}", csv_content)
}

// ==========================================
// 플랫폼 주문 통합 시스템 - 저장 싱크
// ==========================================
// 역할: 통합 결과를 내보내는 경계 (파일, 외부 저장소 등)
// 구현체: CsvFileSink (타임스탬프 파일명으로 로컬 저장)
// ==========================================

use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use chrono::Local;
use tracing::info;

use crate::domain::PlatformOrder;
use crate::process;

// ==========================================
// OrderSink Trait
// ==========================================
// 용도: 통합 주문 레코드 저장 인터페이스
// 구현자: CsvFileSink (추가 구현체는 외부 저장소 연동 시)
#[async_trait]
pub trait OrderSink: Send + Sync {
    /// 통합 주문 레코드를 저장한다
    ///
    /// # 반환
    /// - Ok(()): 저장 완료
    /// - Err: 직렬화 오류, 쓰기 오류 등
    async fn save(&self, records: &[PlatformOrder]) -> anyhow::Result<()>;
}

// ==========================================
// CsvFileSink
// ==========================================
/// 통합 CSV를 로컬 디렉터리에 저장하는 싱크.
/// 파일명은 `{prefix}_{YYYYMMDDTHHMMSS}.csv` 형식으로 찍는다
pub struct CsvFileSink {
    output_dir: PathBuf,
    file_prefix: String,
}

impl CsvFileSink {
    pub fn new(output_dir: impl Into<PathBuf>, file_prefix: impl Into<String>) -> Self {
        CsvFileSink {
            output_dir: output_dir.into(),
            file_prefix: file_prefix.into(),
        }
    }

    /// 통합 레코드를 BOM 포함 CSV 파일로 쓰고 저장 경로를 돌려준다
    pub async fn write_integrated(&self, records: &[PlatformOrder]) -> anyhow::Result<PathBuf> {
        let csv_content = process::to_csv(records).context("통합 CSV 직렬화 실패")?;
        let bytes = process::with_bom(&csv_content).into_bytes();

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .with_context(|| format!("출력 디렉터리 생성 실패: {}", self.output_dir.display()))?;

        let file_name = format!(
            "{}_{}.csv",
            self.file_prefix,
            Local::now().format("%Y%m%dT%H%M%S")
        );
        let path = self.output_dir.join(&file_name);

        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("CSV 파일 쓰기 실패: {}", path.display()))?;

        info!(path = %path.display(), row_count = records.len(), "통합 CSV 저장 완료");
        Ok(path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[async_trait]
impl OrderSink for CsvFileSink {
    async fn save(&self, records: &[PlatformOrder]) -> anyhow::Result<()> {
        self.write_integrated(records).await?;
        Ok(())
    }
}

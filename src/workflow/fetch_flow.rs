//! 抓取流程 - 流程层
//!
//! 流程顺序：
//! 1. URL → slug
//! 2. 请求题面
//! 3. 保存题面
//! 4. 提取样例 → 写入 test_cases/

use crate::clients::ProblemProvider;
use crate::error::{AppError, AppResult};
use crate::models::Problem;
use crate::services::{extract_slug, extract_test_cases, CaseWriter};
use crate::utils::truncate_text;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// 抓取结果
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub slug: String,
    pub problem_dir: PathBuf,
    pub case_dir: PathBuf,
    pub case_count: usize,
}

/// 抓取流程
///
/// 不做回滚：后面的步骤失败时，前面写入的文件保留在磁盘上
pub struct FetchFlow<P> {
    provider: P,
    writer: CaseWriter,
}

impl<P: ProblemProvider> FetchFlow<P> {
    pub fn new(provider: P, workspace: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            writer: CaseWriter::new(workspace),
        }
    }

    pub async fn run(&self, url: &str) -> AppResult<FetchOutcome> {
        let slug = extract_slug(url)?;
        info!("🔍 正在获取题目: {}", slug);

        let statement = self.provider.fetch_statement(&slug).await?;
        debug!("题面: {}", truncate_text(&statement, 120));

        let mut problem = Problem::new(slug.clone(), statement);
        problem.test_cases = extract_test_cases(&problem.statement);

        // 即使没有样例也先保存题面，方便用户手动补充
        let problem_dir = self
            .writer
            .write_statement(&problem.slug, &problem.statement)
            .await?;

        if problem.test_cases.is_empty() {
            warn!("⚠️ 题面中没有找到样例: {}", slug);
            return Err(AppError::ExtractionEmpty { slug });
        }

        let case_dir = self.writer.write_test_cases(&problem).await?;
        info!(
            "✓ 已保存 {} 组样例到 {}",
            problem.test_cases.len(),
            case_dir.display()
        );

        Ok(FetchOutcome {
            slug,
            problem_dir,
            case_dir,
            case_count: problem.test_cases.len(),
        })
    }
}

//! 用例写入服务 - 业务能力层
//!
//! 只负责把题面和样例写进工作区，不关心它们从哪里来

use crate::error::{AppError, AppResult};
use crate::models::loaders::case_loader::{
    input_file_name, output_file_name, parse_case_index, TEST_CASE_DIR,
};
use crate::models::Problem;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// 题面文件名
pub const STATEMENT_FILE: &str = "problem_statement.txt";

/// 用例写入服务
///
/// 目录布局：
/// ```text
/// <workspace>/<slug>/problem_statement.txt
/// <workspace>/<slug>/test_cases/input_<n>.txt
/// <workspace>/<slug>/test_cases/output_<n>.txt
/// ```
///
/// 不保证原子性：中途失败时已经写入的文件会留在磁盘上
pub struct CaseWriter {
    workspace: PathBuf,
}

impl CaseWriter {
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
        }
    }

    pub fn problem_dir(&self, slug: &str) -> PathBuf {
        self.workspace.join(slug)
    }

    /// 创建题目目录并写入题面（已存在则覆盖）
    pub async fn write_statement(&self, slug: &str, statement: &str) -> AppResult<PathBuf> {
        let problem_dir = self.problem_dir(slug);
        fs::create_dir_all(&problem_dir)
            .await
            .map_err(|e| AppError::io(&problem_dir, e))?;

        let statement_path = problem_dir.join(STATEMENT_FILE);
        write_file(&statement_path, statement).await?;
        debug!("题面已写入: {}", statement_path.display());

        Ok(problem_dir)
    }

    /// 写入样例，返回用例目录
    ///
    /// 上一次抓取留下的、编号超出本次范围的用例文件会被删除
    pub async fn write_test_cases(&self, problem: &Problem) -> AppResult<PathBuf> {
        let case_dir = self.problem_dir(&problem.slug).join(TEST_CASE_DIR);
        fs::create_dir_all(&case_dir)
            .await
            .map_err(|e| AppError::io(&case_dir, e))?;

        for case in &problem.test_cases {
            write_file(&case_dir.join(input_file_name(case.index)), &case.input).await?;
            write_file(&case_dir.join(output_file_name(case.index)), &case.expected).await?;
        }

        let removed = remove_stale_cases(&case_dir, problem.test_cases.len()).await?;
        if removed > 0 {
            debug!("删除了 {} 个过期的用例文件", removed);
        }

        Ok(case_dir)
    }

}

async fn write_file(path: &Path, content: &str) -> AppResult<()> {
    fs::write(path, content)
        .await
        .map_err(|e| AppError::io(path, e))
}

async fn remove_stale_cases(case_dir: &Path, keep: usize) -> AppResult<usize> {
    let mut entries = fs::read_dir(case_dir)
        .await
        .map_err(|e| AppError::io(case_dir, e))?;

    let mut removed = 0;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::io(case_dir, e))?
    {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        let index = parse_case_index(name, "input_").or_else(|| parse_case_index(name, "output_"));
        if matches!(index, Some(i) if i > keep) {
            let path = entry.path();
            fs::remove_file(&path)
                .await
                .map_err(|e| AppError::io(&path, e))?;
            removed += 1;
        }
    }
    Ok(removed)
}

//! 运行流程 - 流程层
//!
//! 核心职责：对解答文件旁边 test_cases/ 中的每个用例执行一次解答并比较输出
//!
//! 流程顺序：
//! 1. 扫描用例（没有用例时直接返回，不启动任何进程）
//! 2. 确定语言
//! 3. 逐个用例执行，单个用例的失败只记录在该用例的结果里

use crate::error::{AppError, AppResult};
use crate::infrastructure::CaseExecutor;
use crate::models::loaders::{load_case_files, read_case_text, CaseFiles, TEST_CASE_DIR};
use crate::models::{CaseOutcome, ExecutionResult, LanguageRegistry, LanguageSpec, RunSummary};
use crate::utils::logging::{log_run_start, print_run_stats};
use crate::utils::truncate_text;
use crate::workflow::case_ctx::CaseCtx;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// 一次运行的完整结果
#[derive(Debug, Clone)]
pub struct RunReport {
    pub language: String,
    pub results: Vec<ExecutionResult>,
    pub summary: RunSummary,
}

/// 运行流程
///
/// 用例严格按编号顺序逐个执行
pub struct RunFlow<E> {
    executor: E,
    registry: LanguageRegistry,
}

impl<E: CaseExecutor> RunFlow<E> {
    pub fn new(executor: E, registry: LanguageRegistry) -> Self {
        Self { executor, registry }
    }

    /// 用例目录：解答文件所在目录下的 test_cases/
    pub fn case_dir_for(solution_path: &Path) -> PathBuf {
        match solution_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(TEST_CASE_DIR),
            _ => PathBuf::from(TEST_CASE_DIR),
        }
    }

    pub async fn run(&self, solution_path: &Path, lang: Option<&str>) -> AppResult<RunReport> {
        let cases = load_case_files(&Self::case_dir_for(solution_path)).await?;
        let language = self.registry.resolve(solution_path, lang)?;

        let source = tokio::fs::read_to_string(solution_path)
            .await
            .map_err(|e| AppError::io(solution_path, e))?;

        log_run_start(
            &solution_path.display().to_string(),
            &language.name,
            cases.len(),
        );

        let started = Instant::now();
        let mut results = Vec::with_capacity(cases.len());
        for files in &cases {
            let ctx = CaseCtx::new(files.index, cases.len());
            results.push(self.run_case(&ctx, language, &source, files).await);
        }

        let summary = RunSummary::from_results(&results, started.elapsed());
        print_run_stats(&summary);

        Ok(RunReport {
            language: language.name.clone(),
            results,
            summary,
        })
    }

    /// 执行单个用例，任何错误都转成该用例的结果
    async fn run_case(
        &self,
        ctx: &CaseCtx,
        language: &LanguageSpec,
        source: &str,
        files: &CaseFiles,
    ) -> ExecutionResult {
        let input = match read_case_text(&files.input_path).await {
            Ok(input) => input,
            Err(e) => {
                warn!("{} ⚠️ 无法读取输入: {}", ctx, e);
                return ExecutionResult::errored(
                    ctx.index,
                    String::new(),
                    String::new(),
                    CaseOutcome::Failed(e.to_string()),
                );
            }
        };

        let expected = match read_case_text(&files.output_path).await {
            Ok(expected) => expected,
            Err(e) => {
                warn!("{} ⚠️ 缺少期望输出: {}", ctx, e);
                return ExecutionResult::errored(
                    ctx.index,
                    input,
                    String::new(),
                    CaseOutcome::MissingExpected,
                );
            }
        };

        info!("{} ▶ 输入: {}", ctx, truncate_text(&input, 80));

        match self
            .executor
            .execute(language, source, &files.input_path)
            .await
        {
            Ok(actual) => {
                let result = ExecutionResult::compared(ctx.index, input, expected, actual);
                if result.matched {
                    info!("{} ✓ 通过", ctx);
                } else {
                    info!("{} ✗ 输出不一致", ctx);
                }
                result
            }
            Err(AppError::ExecutionTimeout { timeout }) => {
                warn!("{} ⏱ 超时 ({}ms)", ctx, timeout.as_millis());
                ExecutionResult::errored(ctx.index, input, expected, CaseOutcome::TimedOut(timeout))
            }
            Err(AppError::ExecutionFailure { stderr }) => {
                warn!("{} ❌ 执行失败: {}", ctx, truncate_text(&stderr, 200));
                ExecutionResult::errored(ctx.index, input, expected, CaseOutcome::Failed(stderr))
            }
            Err(other) => {
                warn!("{} ❌ {}", ctx, other);
                ExecutionResult::errored(
                    ctx.index,
                    input,
                    expected,
                    CaseOutcome::Failed(other.to_string()),
                )
            }
        }
    }
}

//! 命令入口 - 编排层
//!
//! ## 职责
//!
//! 1. **组装**：根据配置创建客户端、执行器、语言表
//! 2. **兜底**：每个命令的所有错误都在这里被捕获，转换成一行用户可见的提示
//! 3. **输出**：把运行结果交给 `ResultSink`
//!
//! 不做任何重试，也不会让单个命令的失败影响进程本身。

use crate::clients::{ProblemClient, ProblemProvider};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::{CaseExecutor, ProcessExecutor, ResultSink, UserPrompt};
use crate::models::LanguageRegistry;
use crate::services::ReportWriter;
use crate::workflow::{FetchFlow, RunFlow};
use std::path::Path;
use tracing::{error, info};

/// 命令执行状态，对应进程退出码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Succeeded,
    Failed,
}

impl CommandStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            CommandStatus::Succeeded => 0,
            CommandStatus::Failed => 1,
        }
    }
}

/// 应用主结构
pub struct App {
    config: Config,
    registry: LanguageRegistry,
}

impl App {
    pub fn new(config: Config) -> Self {
        let registry = LanguageRegistry::builtin().with_overrides(&config.languages);
        Self { config, registry }
    }

    /// `fetchTestCases`：没有给出 URL 时通过 `prompt` 询问
    pub async fn fetch_test_cases(
        &self,
        url: Option<String>,
        prompt: &dyn UserPrompt,
        sink: &dyn ResultSink,
    ) -> CommandStatus {
        let client = match ProblemClient::new(&self.config) {
            Ok(client) => client,
            Err(e) => return report_failure(sink, &e),
        };
        self.fetch_with(client, url, prompt, sink).await
    }

    /// 使用指定的题面提供者执行抓取
    pub async fn fetch_with<P: ProblemProvider>(
        &self,
        provider: P,
        url: Option<String>,
        prompt: &dyn UserPrompt,
        sink: &dyn ResultSink,
    ) -> CommandStatus {
        let url = match resolve_url(url, prompt) {
            Ok(url) => url,
            Err(e) => return report_failure(sink, &e),
        };

        let flow = FetchFlow::new(provider, &self.config.workspace_dir);
        match flow.run(&url).await {
            Ok(outcome) => {
                info!("✓ 题目 {} 抓取完成", outcome.slug);
                sink.append_line(&format!(
                    "Test cases and problem statement fetched successfully! ({} cases in {})",
                    outcome.case_count,
                    outcome.problem_dir.display()
                ));
                CommandStatus::Succeeded
            }
            Err(e) => report_failure(sink, &e),
        }
    }

    /// `runTestCases`：对解答文件运行所有用例
    pub async fn run_test_cases(
        &self,
        solution: &Path,
        lang: Option<&str>,
        sink: &dyn ResultSink,
    ) -> CommandStatus {
        self.run_with(ProcessExecutor::new(&self.config), solution, lang, sink)
            .await
    }

    /// 使用指定的执行器运行
    pub async fn run_with<E: CaseExecutor>(
        &self,
        executor: E,
        solution: &Path,
        lang: Option<&str>,
        sink: &dyn ResultSink,
    ) -> CommandStatus {
        let flow = RunFlow::new(executor, self.registry.clone());
        match flow.run(solution, lang).await {
            Ok(report) => {
                ReportWriter::new(sink).write_all(&report.results, &report.summary);
                if report.summary.all_passed() {
                    CommandStatus::Succeeded
                } else {
                    CommandStatus::Failed
                }
            }
            Err(e) => report_failure(sink, &e),
        }
    }
}

fn resolve_url(url: Option<String>, prompt: &dyn UserPrompt) -> AppResult<String> {
    let url = match url {
        Some(url) => Some(url),
        None => prompt.prompt("Enter LeetCode problem URL")?,
    };
    url.filter(|u| !u.trim().is_empty())
        .ok_or_else(|| AppError::MissingInput {
            what: "LeetCode URL".to_string(),
        })
}

fn report_failure(sink: &dyn ResultSink, err: &AppError) -> CommandStatus {
    error!("❌ {}", err);
    sink.append_line(&err.to_string());
    CommandStatus::Failed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemorySink;

    struct NoAnswer;

    impl UserPrompt for NoAnswer {
        fn prompt(&self, _message: &str) -> AppResult<Option<String>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_fetch_without_url_reports_message() {
        let tmp = tempfile::tempdir().unwrap();
        let app = App::new(Config {
            workspace_dir: tmp.path().to_path_buf(),
            ..Config::default()
        });
        let sink = MemorySink::new();

        let status = app.fetch_test_cases(None, &NoAnswer, &sink).await;
        assert_eq!(status, CommandStatus::Failed);
        assert_eq!(sink.lines(), vec!["LeetCode URL is required"]);
    }

    #[tokio::test]
    async fn test_run_without_cases_reports_message() {
        let tmp = tempfile::tempdir().unwrap();
        let solution = tmp.path().join("main.cpp");
        std::fs::write(&solution, "int main() {}").unwrap();
        let app = App::new(Config::default());
        let sink = MemorySink::new();

        let status = app.run_test_cases(&solution, None, &sink).await;
        assert_eq!(status.exit_code(), 1);
        assert!(sink.contents().starts_with("Test case files not found"));
    }
}

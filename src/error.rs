use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// 应用程序错误类型
///
/// 每一种错误都会在各自流程的顶层（`orchestrator::App`）被捕获，
/// 转换成一行面向用户的提示信息。
#[derive(Debug, Error)]
pub enum AppError {
    /// URL 不符合题目地址格式
    #[error("Invalid LeetCode problem URL: {url}")]
    InvalidUrl { url: String },

    /// 远端获取题面失败（网络错误、非 2xx 响应、缺少 question 字段）
    #[error("Failed to fetch problem '{slug}': {reason}")]
    FetchFailure { slug: String, reason: String },

    /// 题面中没有解析出任何 Input/Output 样例
    #[error("No valid inputs or outputs found in the statement of '{slug}'")]
    ExtractionEmpty { slug: String },

    /// 解答文件旁边没有测试用例目录
    #[error("Test case files not found in {}. Please fetch test cases first.", .dir.display())]
    NoTestCases { dir: PathBuf },

    /// 编译失败或程序以非零状态退出
    #[error("Error executing solution: {stderr}")]
    ExecutionFailure { stderr: String },

    /// 进程执行超时
    #[error("Execution timed out after {}ms", .timeout.as_millis())]
    ExecutionTimeout { timeout: Duration },

    /// 无法确定解答文件的语言
    #[error("Unsupported language for {}: {hint}", .path.display())]
    UnsupportedLanguage { path: PathBuf, hint: String },

    /// 用户没有提供必要的输入
    #[error("{what} is required")]
    MissingInput { what: String },

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// 文件操作错误
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建 URL 格式错误
    pub fn invalid_url(url: impl Into<String>) -> Self {
        AppError::InvalidUrl { url: url.into() }
    }

    /// 创建远端获取失败错误
    pub fn fetch_failed(slug: impl Into<String>, reason: impl ToString) -> Self {
        AppError::FetchFailure {
            slug: slug.into(),
            reason: reason.to_string(),
        }
    }

    /// 创建文件操作错误
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// 创建执行失败错误
    pub fn execution_failed(stderr: impl Into<String>) -> Self {
        AppError::ExecutionFailure {
            stderr: stderr.into(),
        }
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

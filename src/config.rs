use crate::error::{AppError, AppResult};
use crate::models::LanguageSpec;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 程序配置
///
/// 加载顺序：默认值 → TOML 配置文件 → 环境变量 → 命令行参数
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题目 API 地址
    pub api_base_url: String,
    /// 题目目录所在的工作区
    pub workspace_dir: PathBuf,
    /// 单个用例运行超时（毫秒）
    pub run_timeout_ms: u64,
    /// 编译超时（毫秒）
    pub compile_timeout_ms: u64,
    /// HTTP 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 追加或覆盖内置语言
    pub languages: Vec<LanguageSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://alfa-leetcode-api.onrender.com".to_string(),
            workspace_dir: PathBuf::from("."),
            run_timeout_ms: 5_000,
            compile_timeout_ms: 30_000,
            request_timeout_secs: 30,
            verbose_logging: false,
            languages: Vec::new(),
        }
    }
}

impl Config {
    /// 读取配置文件（可选）并应用环境变量
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let config = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env())
    }

    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 用环境变量覆盖当前值
    pub fn with_env(self) -> Self {
        Self {
            api_base_url: std::env::var("CPH_API_BASE_URL").unwrap_or(self.api_base_url),
            workspace_dir: std::env::var("CPH_WORKSPACE").map(PathBuf::from).unwrap_or(self.workspace_dir),
            run_timeout_ms: std::env::var("CPH_RUN_TIMEOUT_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.run_timeout_ms),
            compile_timeout_ms: std::env::var("CPH_COMPILE_TIMEOUT_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.compile_timeout_ms),
            request_timeout_secs: std::env::var("CPH_REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.request_timeout_secs),
            verbose_logging: std::env::var("CPH_VERBOSE").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
            languages: self.languages,
        }
    }

    pub fn run_timeout(&self) -> Duration {
        Duration::from_millis(self.run_timeout_ms)
    }

    pub fn compile_timeout(&self) -> Duration {
        Duration::from_millis(self.compile_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

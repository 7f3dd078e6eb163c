//! # cph
//!
//! 抓取 LeetCode 题目样例，并用样例检验本地解答的命令行工具
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure / Clients）
//! - `clients/` - 题目 API 客户端（reqwest）
//! - `infrastructure/` - 进程执行器、宿主能力（`UserPrompt` / `ResultSink`）
//!
//! ### ② 业务能力层（Services）
//! - `slug` - 从 URL 提取 slug
//! - `statement_extractor` - 从题面提取样例
//! - `case_writer` - 写入题面与样例
//! - `report_writer` - 渲染执行结果
//!
//! ### ③ 流程层（Workflow）
//! - `FetchFlow` - URL → 题面 → 样例文件
//! - `RunFlow` - 解答 × 样例 → 执行结果
//!
//! ### ④ 编排层（Orchestration）
//! - `App` - 命令入口，捕获所有错误并转成用户提示

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{ConsoleSink, MemorySink, ResultSink, StdinPrompt, UserPrompt};
pub use models::{ExecutionResult, LanguageRegistry, LanguageSpec, Problem, TestCase};
pub use orchestrator::{App, CommandStatus};
pub use workflow::{FetchFlow, RunFlow};

//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (命令入口，错误兜底)
//!     ↓
//! workflow::{FetchFlow, RunFlow} (单次命令的完整流程)
//!     ↓
//! services (能力层：slug / 样例提取 / 写入 / 输出)
//!     ↓
//! clients + infrastructure (HTTP、进程、宿主能力)
//! ```

pub mod app;

pub use app::{App, CommandStatus};

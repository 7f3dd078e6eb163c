//! 基础设施层：持有进程、标准输入输出等资源，只暴露能力

pub mod host;
pub mod process_executor;

pub use host::{ConsoleSink, MemorySink, ResultSink, StdinPrompt, UserPrompt};
pub use process_executor::{CaseExecutor, ProcessExecutor};

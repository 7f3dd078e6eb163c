//! 宿主能力 - 基础设施层
//!
//! 编辑器宿主只向核心流程暴露两种能力：向用户要一个字符串、追加一行输出。
//! 命令行下分别由 stdin / stdout 提供。

use crate::error::{AppError, AppResult};
use std::io::{BufRead, Write};
use std::sync::Mutex;

/// 向用户请求一段文本，用户放弃时返回 `None`
pub trait UserPrompt: Send + Sync {
    fn prompt(&self, message: &str) -> AppResult<Option<String>>;
}

/// 结果输出面板
pub trait ResultSink: Send + Sync {
    fn append_line(&self, line: &str);
}

/// 从标准输入读取一行
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl UserPrompt for StdinPrompt {
    fn prompt(&self, message: &str) -> AppResult<Option<String>> {
        let mut stderr = std::io::stderr();
        // 提示写到 stderr，stdout 只放结果
        let _ = write!(stderr, "{}: ", message);
        let _ = stderr.flush();

        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| AppError::io("<stdin>", e))?;

        let answer = line.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }
}

/// 输出到标准输出
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ResultSink for ConsoleSink {
    fn append_line(&self, line: &str) {
        println!("{}", line);
    }
}

/// 收集到内存中，供测试或嵌入方读取
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    pub fn contents(&self) -> String {
        self.lines().join("\n")
    }
}

impl ResultSink for MemorySink {
    fn append_line(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_keeps_order() {
        let sink = MemorySink::new();
        sink.append_line("Input: 1");
        sink.append_line("---");
        assert_eq!(sink.lines(), vec!["Input: 1", "---"]);
        assert_eq!(sink.contents(), "Input: 1\n---");
    }
}

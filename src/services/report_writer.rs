//! 结果输出服务 - 业务能力层
//!
//! 只负责把执行结果渲染成文本行，写到哪里由 `ResultSink` 决定

use crate::infrastructure::ResultSink;
use crate::models::{ExecutionResult, RunSummary};

pub struct ReportWriter<'a> {
    sink: &'a dyn ResultSink,
}

impl<'a> ReportWriter<'a> {
    pub fn new(sink: &'a dyn ResultSink) -> Self {
        Self { sink }
    }

    /// 按用例顺序输出
    pub fn write_result(&self, result: &ExecutionResult) {
        self.sink
            .append_line(&format!("Test case #{}", result.index));
        self.sink.append_line(&format!("Input: {}", result.input));
        self.sink
            .append_line(&format!("Expected Output: {}", result.expected));
        self.sink
            .append_line(&format!("Actual Output: {}", result.actual));
        self.sink
            .append_line(&format!("Result: {}", result.outcome));
        self.sink.append_line("---");
    }

    pub fn write_summary(&self, summary: &RunSummary) {
        self.sink
            .append_line(&format!("Passed {}/{}", summary.passed, summary.total));
    }

    pub fn write_all(&self, results: &[ExecutionResult], summary: &RunSummary) {
        for result in results {
            self.write_result(result);
        }
        self.write_summary(summary);
    }
}

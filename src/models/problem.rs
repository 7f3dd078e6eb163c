use std::fmt;
use std::time::Duration;

/// 题目
///
/// 由 slug 标识，持有原始题面和按顺序排列的样例
#[derive(Debug, Clone)]
pub struct Problem {
    pub slug: String,
    pub statement: String,
    pub test_cases: Vec<TestCase>,
}

impl Problem {
    pub fn new(slug: impl Into<String>, statement: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            statement: statement.into(),
            test_cases: Vec::new(),
        }
    }
}

/// 单个样例（输入 + 期望输出）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// 从 1 开始的编号，对应 input_<n>.txt / output_<n>.txt
    pub index: usize,
    pub input: String,
    pub expected: String,
}

/// 单个用例的执行结论
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    WrongAnswer,
    /// 编译失败或运行时错误，附带 stderr
    Failed(String),
    TimedOut(Duration),
    /// 找不到对应的 output_<n>.txt
    MissingExpected,
}

impl fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseOutcome::Passed => write!(f, "Passed"),
            CaseOutcome::WrongAnswer => write!(f, "Failed"),
            CaseOutcome::Failed(stderr) => write!(f, "Error: {}", stderr.trim()),
            CaseOutcome::TimedOut(limit) => write!(f, "Timed out after {}ms", limit.as_millis()),
            CaseOutcome::MissingExpected => write!(f, "Error: expected output file is missing"),
        }
    }
}

/// 单个用例的执行结果，只在一次运行中存在，不落盘
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub index: usize,
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub matched: bool,
    pub outcome: CaseOutcome,
}

impl ExecutionResult {
    /// 根据实际输出构造结果，比较前两边都去掉首尾空白
    pub fn compared(index: usize, input: String, expected: String, actual: String) -> Self {
        let matched = expected.trim() == actual.trim();
        Self {
            index,
            input,
            expected,
            actual,
            matched,
            outcome: if matched {
                CaseOutcome::Passed
            } else {
                CaseOutcome::WrongAnswer
            },
        }
    }

    /// 执行本身没有产出（出错、超时、缺少期望输出）
    pub fn errored(index: usize, input: String, expected: String, outcome: CaseOutcome) -> Self {
        Self {
            index,
            input,
            expected,
            actual: String::new(),
            matched: false,
            outcome,
        }
    }
}

/// 一次运行的汇总
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn from_results(results: &[ExecutionResult], elapsed: Duration) -> Self {
        Self {
            total: results.len(),
            passed: results.iter().filter(|r| r.matched).count(),
            elapsed,
        }
    }

    pub fn failed(&self) -> usize {
        self.total - self.passed
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

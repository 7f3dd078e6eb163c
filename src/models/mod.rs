pub mod language;
pub mod loaders;
pub mod problem;

pub use language::{LanguageRegistry, LanguageSpec};
pub use loaders::{load_case_files, CaseFiles, TEST_CASE_DIR};
pub use problem::{CaseOutcome, ExecutionResult, Problem, RunSummary, TestCase};

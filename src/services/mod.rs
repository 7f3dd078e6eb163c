pub mod case_writer;
pub mod report_writer;
pub mod slug;
pub mod statement_extractor;

pub use case_writer::{CaseWriter, STATEMENT_FILE};
pub use report_writer::ReportWriter;
pub use slug::extract_slug;
pub use statement_extractor::extract_test_cases;

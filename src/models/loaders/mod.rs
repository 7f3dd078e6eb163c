pub mod case_loader;

pub use case_loader::{load_case_files, read_case_text, CaseFiles, TEST_CASE_DIR};

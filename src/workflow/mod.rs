pub mod case_ctx;
pub mod fetch_flow;
pub mod run_flow;

pub use case_ctx::CaseCtx;
pub use fetch_flow::{FetchFlow, FetchOutcome};
pub use run_flow::{RunFlow, RunReport};

pub mod problem_client;

pub use problem_client::{ProblemClient, ProblemProvider};

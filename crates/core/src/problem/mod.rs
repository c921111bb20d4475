pub mod display;
pub mod id;
pub mod types;

pub use id::problem_id;
pub use types::{Category, Position, Problem, ProblemType, Severity};

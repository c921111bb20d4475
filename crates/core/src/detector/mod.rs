pub mod context;
pub mod registry;
pub mod rules;
pub mod traits;

pub use context::ScanContext;
pub use registry::DetectorRegistry;
pub use rules::{run_rules, Rule};
pub use traits::ProblemDetector;

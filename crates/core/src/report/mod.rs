pub mod types;

pub use types::{AnalysisReport, CategoryCounts, SeverityCounts};

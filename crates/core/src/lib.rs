pub mod cache;
pub mod config;
pub mod detector;
pub mod education;
pub mod problem;
pub mod report;
pub mod scan;

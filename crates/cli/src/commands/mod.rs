pub mod analyze;
pub mod explain;
pub mod init;
pub mod list;

pub mod clean;
mod command_result;
mod context;
pub mod init;
pub mod report;

pub use command_result::*;

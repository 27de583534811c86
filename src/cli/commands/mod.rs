mod command_result;
pub mod helper;
pub mod report;

pub use command_result::*;

mod report_handler;
mod workflow_handler;

pub use report_handler::*;
pub use workflow_handler::*;

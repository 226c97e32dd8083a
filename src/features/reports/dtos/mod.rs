mod assignment_dto;
mod report_dto;

pub use assignment_dto::*;
pub use report_dto::*;

mod assignment_service;
mod report_service;
mod validation_service;

pub use assignment_service::AssignmentService;
pub use report_service::ReportService;
pub use validation_service::ValidationService;

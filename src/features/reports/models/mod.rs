mod assignment;
mod report;
mod validated_items;

pub use assignment::{Assignment, AssignmentRow, Remediation, ValidationRecord};
pub use report::Report;
pub use validated_items::ValidatedItems;

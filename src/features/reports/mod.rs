//! Reports and the quality-officer assignment workflow.
//!
//! Administrative staff create reports (each examining at most one
//! complaint) and assign quality officers to them. An assigned officer then
//! validates the report by confirming which complaint items were reviewed,
//! with an examination date and optional remediation notes.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{AssignmentRepository, PgAssignmentRepository};
pub use services::{AssignmentService, ReportService, ValidationService};

//! Persistence seam for the assignment workflow.
//!
//! The assignment and validation services only talk to storage through
//! [`AssignmentRepository`]. Production uses [`PgAssignmentRepository`];
//! tests use an in-memory implementation.

mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;

use crate::core::error::Result;
use crate::features::access::Role;
use crate::features::reports::models::{Assignment, Report, ValidationRecord};

pub use postgres::PgAssignmentRepository;

#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    async fn find_report(&self, report_id: i64) -> Result<Option<Report>>;

    /// Roles of the users among `user_ids` that exist
    async fn find_user_roles(&self, user_ids: &[i64]) -> Result<HashMap<i64, Role>>;

    /// Upsert one pivot row per id inside a single transaction.
    ///
    /// Existing rows only get a new `assignment_date`; their validation state
    /// is preserved. Returns the number of rows written.
    async fn upsert_assignments(
        &self,
        report_id: i64,
        responsible_ids: &[i64],
        assignment_date: NaiveDate,
    ) -> Result<u64>;

    async fn find_assignment(
        &self,
        report_id: i64,
        responsible_id: i64,
    ) -> Result<Option<Assignment>>;

    /// Overwrite the validation state of an existing pivot row
    async fn save_validation(
        &self,
        report_id: i64,
        responsible_id: i64,
        record: &ValidationRecord,
    ) -> Result<()>;
}

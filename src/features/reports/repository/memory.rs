use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::AssignmentRepository;
use crate::core::error::{AppError, Result};
use crate::features::access::Role;
use crate::features::reports::models::{Assignment, Report, ValidationRecord};

/// In-memory stand-in for Postgres
#[derive(Default)]
pub struct InMemoryAssignmentRepository {
    reports: Mutex<HashMap<i64, Report>>,
    users: Mutex<HashMap<i64, Role>>,
    assignments: Mutex<BTreeMap<(i64, i64), Assignment>>,
    fail_writes: AtomicBool,
}

impl InMemoryAssignmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(self, id: i64, complaint_id: Option<i64>) -> Self {
        self.reports.lock().unwrap().insert(
            id,
            Report {
                id,
                title: format!("Report {}", id),
                content: "Findings".to_string(),
                complaint_id,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
        );
        self
    }

    pub fn with_user(self, id: i64, role: Role) -> Self {
        self.users.lock().unwrap().insert(id, role);
        self
    }

    pub fn with_assignment(self, assignment: Assignment) -> Self {
        self.assignments
            .lock()
            .unwrap()
            .insert((assignment.report_id, assignment.responsible_id), assignment);
        self
    }

    /// Make every subsequent write fail like a lost database connection
    pub fn failing_writes(self) -> Self {
        self.fail_writes.store(true, Ordering::SeqCst);
        self
    }

    pub fn assignment(&self, report_id: i64, responsible_id: i64) -> Option<Assignment> {
        self.assignments
            .lock()
            .unwrap()
            .get(&(report_id, responsible_id))
            .cloned()
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl AssignmentRepository for InMemoryAssignmentRepository {
    async fn find_report(&self, report_id: i64) -> Result<Option<Report>> {
        Ok(self.reports.lock().unwrap().get(&report_id).cloned())
    }

    async fn find_user_roles(&self, user_ids: &[i64]) -> Result<HashMap<i64, Role>> {
        let users = self.users.lock().unwrap();
        Ok(user_ids
            .iter()
            .filter_map(|id| users.get(id).map(|role| (*id, *role)))
            .collect())
    }

    async fn upsert_assignments(
        &self,
        report_id: i64,
        responsible_ids: &[i64],
        assignment_date: NaiveDate,
    ) -> Result<u64> {
        self.check_writable()?;

        let mut assignments = self.assignments.lock().unwrap();
        for responsible_id in responsible_ids {
            assignments
                .entry((report_id, *responsible_id))
                .and_modify(|a| a.assignment_date = assignment_date)
                .or_insert_with(|| Assignment::new(report_id, *responsible_id, assignment_date));
        }

        Ok(responsible_ids.len() as u64)
    }

    async fn find_assignment(
        &self,
        report_id: i64,
        responsible_id: i64,
    ) -> Result<Option<Assignment>> {
        Ok(self.assignment(report_id, responsible_id))
    }

    async fn save_validation(
        &self,
        report_id: i64,
        responsible_id: i64,
        record: &ValidationRecord,
    ) -> Result<()> {
        self.check_writable()?;

        let mut assignments = self.assignments.lock().unwrap();
        let assignment = assignments
            .get_mut(&(report_id, responsible_id))
            .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;
        assignment.apply(record);
        Ok(())
    }
}

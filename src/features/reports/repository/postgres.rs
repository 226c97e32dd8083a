use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::collections::HashMap;

use super::AssignmentRepository;
use crate::core::error::{AppError, Result};
use crate::features::access::Role;
use crate::features::reports::models::{Assignment, AssignmentRow, Report, ValidationRecord};

const ASSIGNMENT_COLUMNS: &str = r#"
    report_id, responsible_id, assignment_date, validated, examination_date,
    validated_items, remediation_replacement, remediation_awareness,
    remediation_assistance, remediation_other
"#;

pub struct PgAssignmentRepository {
    pool: PgPool,
}

impl PgAssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentRepository for PgAssignmentRepository {
    async fn find_report(&self, report_id: i64) -> Result<Option<Report>> {
        let report = sqlx::query_as::<_, Report>(
            r#"
            SELECT id, title, content, complaint_id, created_at, updated_at
            FROM reports
            WHERE id = $1
            "#,
        )
        .bind(report_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(report)
    }

    async fn find_user_roles(&self, user_ids: &[i64]) -> Result<HashMap<i64, Role>> {
        let rows = sqlx::query_as::<_, (i64, Role)>("SELECT id, role FROM users WHERE id = ANY($1)")
            .bind(user_ids)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().collect())
    }

    async fn upsert_assignments(
        &self,
        report_id: i64,
        responsible_ids: &[i64],
        assignment_date: NaiveDate,
    ) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let mut written = 0;

        for responsible_id in responsible_ids {
            let result = sqlx::query(
                r#"
                INSERT INTO report_assignments (report_id, responsible_id, assignment_date)
                VALUES ($1, $2, $3)
                ON CONFLICT (report_id, responsible_id)
                DO UPDATE SET assignment_date = EXCLUDED.assignment_date, updated_at = NOW()
                "#,
            )
            .bind(report_id)
            .bind(responsible_id)
            .bind(assignment_date)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to upsert assignment report={} responsible={}: {:?}",
                    report_id,
                    responsible_id,
                    e
                );
                AppError::Database(e)
            })?;

            written += result.rows_affected();
        }

        tx.commit().await?;

        Ok(written)
    }

    async fn find_assignment(
        &self,
        report_id: i64,
        responsible_id: i64,
    ) -> Result<Option<Assignment>> {
        let row = sqlx::query_as::<_, AssignmentRow>(&format!(
            "SELECT {} FROM report_assignments WHERE report_id = $1 AND responsible_id = $2",
            ASSIGNMENT_COLUMNS
        ))
        .bind(report_id)
        .bind(responsible_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Assignment::from))
    }

    async fn save_validation(
        &self,
        report_id: i64,
        responsible_id: i64,
        record: &ValidationRecord,
    ) -> Result<()> {
        let remediation = record.remediation();

        let result = sqlx::query(
            r#"
            UPDATE report_assignments
            SET validated = TRUE,
                examination_date = $3,
                validated_items = $4,
                remediation_replacement = $5,
                remediation_awareness = $6,
                remediation_assistance = $7,
                remediation_other = $8,
                updated_at = NOW()
            WHERE report_id = $1 AND responsible_id = $2
            "#,
        )
        .bind(report_id)
        .bind(responsible_id)
        .bind(record.examination_date())
        .bind(record.items().to_json())
        .bind(&remediation.replacement)
        .bind(&remediation.awareness)
        .bind(&remediation.assistance)
        .bind(&remediation.other)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to save validation report={} responsible={}: {:?}",
                report_id,
                responsible_id,
                e
            );
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Assignment not found".to_string()));
        }

        Ok(())
    }
}

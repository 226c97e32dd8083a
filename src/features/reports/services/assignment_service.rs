use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::access::{Capability, Role};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reports::dtos::{AssignReportDto, AssignmentOutcomeDto};
use crate::features::reports::repository::AssignmentRepository;
use crate::shared::dates::require_date;

/// Assigns quality officers to reports
pub struct AssignmentService {
    repository: Arc<dyn AssignmentRepository>,
}

impl AssignmentService {
    pub fn new(repository: Arc<dyn AssignmentRepository>) -> Self {
        Self { repository }
    }

    /// Assign every officer in `dto.responsible_ids` to the report.
    ///
    /// All checks run before the first write, so a rejected call leaves no
    /// pivot row behind. Officers already assigned only get the new date.
    pub async fn assign(
        &self,
        actor: &AuthenticatedUser,
        report_id: i64,
        dto: AssignReportDto,
    ) -> Result<AssignmentOutcomeDto> {
        actor.authorize(Capability::AssignReports)?;

        self.repository
            .find_report(report_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", report_id)))?;

        let assignment_date =
            require_date(dto.assignment_date.as_deref(), "Assignment date is required")?;

        let responsible_ids = dedup_in_order(&dto.responsible_ids);
        if responsible_ids.is_empty() {
            return Err(AppError::Validation("No responsible selected".to_string()));
        }

        let roles = self.repository.find_user_roles(&responsible_ids).await?;
        if let Some(invalid) = responsible_ids
            .iter()
            .find(|id| roles.get(*id) != Some(&Role::QualityOfficer))
        {
            return Err(AppError::Validation(format!(
                "Invalid responsible: {}",
                invalid
            )));
        }

        let assigned = self
            .repository
            .upsert_assignments(report_id, &responsible_ids, assignment_date)
            .await?;

        tracing::info!(
            "Report {} assigned to {:?} on {} by user {}",
            report_id,
            responsible_ids,
            assignment_date,
            actor.user_id
        );

        Ok(AssignmentOutcomeDto {
            report_id,
            assigned,
        })
    }
}

fn dedup_in_order(ids: &[i64]) -> Vec<i64> {
    let mut seen = std::collections::HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::{Assignment, Remediation, ValidationRecord};
    use crate::features::reports::repository::memory::InMemoryAssignmentRepository;
    use crate::shared::test_helpers::{admin, administrative, commercial, quality_officer};
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn repository() -> InMemoryAssignmentRepository {
        InMemoryAssignmentRepository::new()
            .with_report(7, Some(42))
            .with_user(3, Role::QualityOfficer)
            .with_user(4, Role::QualityOfficer)
            .with_user(8, Role::Commercial)
    }

    fn dto(ids: &[i64], date: Option<&str>) -> AssignReportDto {
        AssignReportDto {
            responsible_ids: ids.to_vec(),
            assignment_date: date.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_assign_creates_one_row_per_distinct_officer() {
        let repo = Arc::new(repository());
        let service = AssignmentService::new(repo.clone());

        let outcome = service
            .assign(&administrative(), 7, dto(&[3, 4, 3], Some("2025-02-01")))
            .await
            .unwrap();

        assert_eq!(outcome.assigned, 2);
        for officer in [3, 4] {
            let row = repo.assignment(7, officer).unwrap();
            assert_eq!(row.assignment_date, date(2, 1));
            assert!(!row.validated);
        }
    }

    #[tokio::test]
    async fn test_admin_may_assign() {
        let service = AssignmentService::new(Arc::new(repository()));
        let result = service
            .assign(&admin(), 7, dto(&[3], Some("2025-02-01")))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_reassign_only_moves_the_date() {
        let mut validated = Assignment::new(7, 3, date(1, 1));
        validated.apply(
            &ValidationRecord::new(
                [42].into_iter().collect(),
                date(1, 10),
                Remediation {
                    replacement: Some("swap part".to_string()),
                    ..Default::default()
                },
            )
            .unwrap(),
        );
        let repo = Arc::new(repository().with_assignment(validated));
        let service = AssignmentService::new(repo.clone());

        service
            .assign(&administrative(), 7, dto(&[3], Some("2025-03-05")))
            .await
            .unwrap();

        let row = repo.assignment(7, 3).unwrap();
        assert_eq!(row.assignment_date, date(3, 5));
        assert!(row.validated);
        assert_eq!(row.examination_date, Some(date(1, 10)));
        assert_eq!(row.validated_items.to_vec(), vec![42]);
        assert_eq!(row.remediation.replacement.as_deref(), Some("swap part"));
    }

    #[tokio::test]
    async fn test_invalid_officer_rejects_the_whole_call() {
        let repo = Arc::new(repository());
        let service = AssignmentService::new(repo.clone());

        let err = service
            .assign(&administrative(), 7, dto(&[3, 8], Some("2025-02-01")))
            .await
            .unwrap_err();

        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Invalid responsible: 8"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(repo.assignment(7, 3).is_none());
    }

    #[tokio::test]
    async fn test_first_invalid_id_in_request_order_is_reported() {
        let service = AssignmentService::new(Arc::new(repository()));

        let err = service
            .assign(&administrative(), 7, dto(&[99, 8], Some("2025-02-01")))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(msg) if msg == "Invalid responsible: 99"));
    }

    #[tokio::test]
    async fn test_checks_run_in_order() {
        let service = AssignmentService::new(Arc::new(repository()));

        let err = service
            .assign(&commercial(), 404, dto(&[], None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        let err = service
            .assign(&administrative(), 404, dto(&[], None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = service
            .assign(&administrative(), 7, dto(&[], None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Assignment date is required"));

        let err = service
            .assign(&administrative(), 7, dto(&[], Some("01/02/2025")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Invalid date format"));

        let err = service
            .assign(&administrative(), 7, dto(&[], Some("2025-02-01")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "No responsible selected"));
    }

    #[tokio::test]
    async fn test_quality_officer_cannot_assign() {
        let service = AssignmentService::new(Arc::new(repository()));
        let err = service
            .assign(&quality_officer(3), 7, dto(&[3], Some("2025-02-01")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_persistence_failure_propagates() {
        let service = AssignmentService::new(Arc::new(repository().failing_writes()));
        let err = service
            .assign(&administrative(), 7, dto(&[3], Some("2025-02-01")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}

use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::access::Capability;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reports::dtos::{AssignmentResponseDto, ValidateItemsDto};
use crate::features::reports::models::{ValidatedItems, ValidationRecord};
use crate::features::reports::repository::AssignmentRepository;
use crate::shared::dates::require_date;

/// Records a quality officer's validation of an assigned report
pub struct ValidationService {
    repository: Arc<dyn AssignmentRepository>,
}

impl ValidationService {
    pub fn new(repository: Arc<dyn AssignmentRepository>) -> Self {
        Self { repository }
    }

    /// Store the officer's validation, replacing any earlier one.
    ///
    /// Only complaint ids linked to the report are kept.
    pub async fn validate_items(
        &self,
        actor: &AuthenticatedUser,
        report_id: i64,
        dto: ValidateItemsDto,
    ) -> Result<AssignmentResponseDto> {
        actor.authorize(Capability::ValidateReports)?;

        let report = self
            .repository
            .find_report(report_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", report_id)))?;

        let mut assignment = self
            .repository
            .find_assignment(report_id, actor.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Forbidden("This report is not assigned to you".to_string())
            })?;

        if dto.items.is_empty() {
            return Err(AppError::Validation("No complaint selected".to_string()));
        }

        let items = ValidatedItems::intersect(&dto.items, report.complaint_id);
        if items.is_empty() {
            return Err(AppError::Validation("No valid item selected".to_string()));
        }

        let examination_date = require_date(
            dto.examination_date.as_deref(),
            "Examination date is required",
        )?;

        let record = ValidationRecord::new(items, examination_date, dto.remediation())?;
        self.repository
            .save_validation(report_id, actor.user_id, &record)
            .await?;
        assignment.apply(&record);

        tracing::info!(
            "Report {} validated by user {} with items {:?}",
            report_id,
            actor.user_id,
            record.items().to_vec()
        );

        Ok(assignment.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::access::Role;
    use crate::features::reports::models::Assignment;
    use crate::features::reports::repository::memory::InMemoryAssignmentRepository;
    use crate::shared::test_helpers::{administrative, quality_officer};
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn repository() -> InMemoryAssignmentRepository {
        InMemoryAssignmentRepository::new()
            .with_report(7, Some(42))
            .with_report(9, None)
            .with_user(3, Role::QualityOfficer)
            .with_assignment(Assignment::new(7, 3, date(1, 1)))
            .with_assignment(Assignment::new(9, 3, date(1, 1)))
    }

    fn dto(items: &[i64], examination_date: Option<&str>) -> ValidateItemsDto {
        ValidateItemsDto {
            items: items.to_vec(),
            examination_date: examination_date.map(str::to_string),
            replacement: None,
            awareness: None,
            assistance: None,
            other: None,
        }
    }

    #[tokio::test]
    async fn test_validation_keeps_only_linked_complaint() {
        let repo = Arc::new(repository());
        let service = ValidationService::new(repo.clone());

        let request = ValidateItemsDto {
            replacement: Some("swap part".to_string()),
            ..dto(&[42, 99], Some("2025-01-10"))
        };
        let response = service
            .validate_items(&quality_officer(3), 7, request)
            .await
            .unwrap();

        assert!(response.validated);
        assert_eq!(response.validated_items, vec![42]);

        let stored = repo.assignment(7, 3).unwrap();
        assert!(stored.validated);
        assert_eq!(stored.examination_date, Some(date(1, 10)));
        assert_eq!(stored.validated_items.to_vec(), vec![42]);
        assert_eq!(stored.remediation.replacement.as_deref(), Some("swap part"));
        assert_eq!(stored.remediation.other.as_deref(), Some(""));
        assert_eq!(
            ValidatedItems::from_json(Some(&stored.validated_items.to_json())),
            stored.validated_items
        );
    }

    #[tokio::test]
    async fn test_unassigned_officer_is_forbidden() {
        let service = ValidationService::new(Arc::new(repository()));
        let err = service
            .validate_items(&quality_officer(5), 7, dto(&[42], Some("2025-01-10")))
            .await
            .unwrap_err();
        assert!(
            matches!(err, AppError::Forbidden(msg) if msg == "This report is not assigned to you")
        );
    }

    #[tokio::test]
    async fn test_non_officer_is_forbidden_before_lookup() {
        let service = ValidationService::new(Arc::new(repository()));
        let err = service
            .validate_items(&administrative(), 404, dto(&[42], Some("2025-01-10")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_missing_report_is_not_found() {
        let service = ValidationService::new(Arc::new(repository()));
        let err = service
            .validate_items(&quality_officer(3), 404, dto(&[42], Some("2025-01-10")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_item_checks() {
        let repo = Arc::new(repository());
        let service = ValidationService::new(repo.clone());
        let officer = quality_officer(3);

        let err = service
            .validate_items(&officer, 7, dto(&[], Some("2025-01-10")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "No complaint selected"));

        let err = service
            .validate_items(&officer, 7, dto(&[99], Some("2025-01-10")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "No valid item selected"));

        let err = service
            .validate_items(&officer, 9, dto(&[42], Some("2025-01-10")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "No valid item selected"));

        assert!(!repo.assignment(7, 3).unwrap().validated);
    }

    #[tokio::test]
    async fn test_date_checks() {
        let service = ValidationService::new(Arc::new(repository()));
        let officer = quality_officer(3);

        let err = service
            .validate_items(&officer, 7, dto(&[42], None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Examination date is required"));

        let err = service
            .validate_items(&officer, 7, dto(&[42], Some("tomorrow")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Invalid date format"));
    }

    #[tokio::test]
    async fn test_second_validation_overwrites_first() {
        let repo = Arc::new(repository());
        let service = ValidationService::new(repo.clone());
        let officer = quality_officer(3);

        let first = ValidateItemsDto {
            awareness: Some("briefing".to_string()),
            ..dto(&[42], Some("2025-01-10"))
        };
        service.validate_items(&officer, 7, first).await.unwrap();
        service
            .validate_items(&officer, 7, dto(&[42], Some("2025-01-12")))
            .await
            .unwrap();

        let stored = repo.assignment(7, 3).unwrap();
        assert_eq!(stored.examination_date, Some(date(1, 12)));
        assert_eq!(stored.remediation.awareness.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_persistence_failure_propagates() {
        let service = ValidationService::new(Arc::new(repository().failing_writes()));
        let err = service
            .validate_items(&quality_officer(3), 7, dto(&[42], Some("2025-01-10")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}

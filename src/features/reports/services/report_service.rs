use sqlx::{PgPool, Postgres, Transaction};
use std::collections::HashMap;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{
    AssignmentResponseDto, ComplaintSummaryDto, CreateReportDto, OfficerReportDto,
    PhotoSummaryDto, ReportDetailResponseDto, ReportListItemDto, ReportResponseDto,
    UpdateReportDto,
};
use crate::features::reports::models::{Assignment, AssignmentRow, Report};

/// Assignment row joined with the officer's name
#[derive(sqlx::FromRow)]
struct NamedAssignmentRow {
    #[sqlx(flatten)]
    assignment: AssignmentRow,
    responsible_name: String,
}

/// Photo row tagged with the report it is attached to
#[derive(sqlx::FromRow)]
struct ReportPhotoRow {
    report_id: i64,
    #[sqlx(flatten)]
    photo: PhotoSummaryDto,
}

/// Complaint link after applying `requested` to `current`.
///
/// Validated items are drawn from the linked complaint, so the link is frozen
/// once any officer has validated the report.
fn resolve_complaint_change(
    current: Option<i64>,
    requested: Option<Option<i64>>,
    has_validated_assignment: bool,
) -> Result<Option<i64>> {
    let next = requested.unwrap_or(current);
    if next != current && has_validated_assignment {
        return Err(AppError::BadRequest(
            "The complaint of a report cannot be changed after it has been validated".to_string(),
        ));
    }
    Ok(next)
}

/// Pair each report with its complaint summary and attached photos
fn list_items(
    reports: Vec<Report>,
    complaints: &HashMap<i64, ComplaintSummaryDto>,
    photo_rows: Vec<ReportPhotoRow>,
) -> Vec<ReportListItemDto> {
    let mut photos: HashMap<i64, Vec<PhotoSummaryDto>> = HashMap::new();
    for row in photo_rows {
        photos.entry(row.report_id).or_default().push(row.photo);
    }

    reports
        .into_iter()
        .map(|report| ReportListItemDto {
            complaint: report
                .complaint_id
                .and_then(|id| complaints.get(&id).cloned()),
            photos: photos.remove(&report.id).unwrap_or_default(),
            report: report.into(),
        })
        .collect()
}

/// Service for report CRUD and read models
pub struct ReportService {
    pool: PgPool,
}

impl ReportService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List reports, newest first, with their complaint and photos
    pub async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<ReportListItemDto>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reports")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count reports: {:?}", e);
                AppError::Database(e)
            })?;

        let reports = sqlx::query_as::<_, Report>(
            r#"
            SELECT id, title, content, complaint_id, created_at, updated_at
            FROM reports
            ORDER BY created_at DESC, id DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reports: {:?}", e);
            AppError::Database(e)
        })?;

        let report_ids: Vec<i64> = reports.iter().map(|r| r.id).collect();
        let complaint_ids: Vec<i64> = reports.iter().filter_map(|r| r.complaint_id).collect();

        let complaints: HashMap<i64, ComplaintSummaryDto> =
            sqlx::query_as::<_, ComplaintSummaryDto>(
                "SELECT id, title, client_id FROM complaints WHERE id = ANY($1)",
            )
            .bind(&complaint_ids)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let photos = sqlx::query_as::<_, ReportPhotoRow>(
            r#"
            SELECT rp.report_id, p.id, p.url
            FROM photos p
            JOIN report_photos rp ON rp.photo_id = p.id
            WHERE rp.report_id = ANY($1)
            ORDER BY p.id
            "#,
        )
        .bind(&report_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok((list_items(reports, &complaints, photos), total))
    }

    pub async fn create(&self, dto: CreateReportDto) -> Result<ReportResponseDto> {
        if let Some(complaint_id) = dto.complaint_id {
            self.ensure_complaint_exists(complaint_id).await?;
        }

        let mut tx = self.pool.begin().await?;

        let report = sqlx::query_as::<_, Report>(
            r#"
            INSERT INTO reports (title, content, complaint_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, complaint_id, created_at, updated_at
            "#,
        )
        .bind(&dto.title)
        .bind(&dto.content)
        .bind(dto.complaint_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create report: {:?}", e);
            AppError::Database(e)
        })?;

        attach_photos(&mut tx, report.id, &dto.photo_ids).await?;
        tx.commit().await?;

        tracing::info!("Report {} created", report.id);
        Ok(report.into())
    }

    pub async fn get_detail(&self, id: i64) -> Result<ReportDetailResponseDto> {
        let report = self.find(id).await?;

        let complaint = match report.complaint_id {
            Some(complaint_id) => sqlx::query_as::<_, ComplaintSummaryDto>(
                "SELECT id, title, client_id FROM complaints WHERE id = $1",
            )
            .bind(complaint_id)
            .fetch_optional(&self.pool)
            .await?,
            None => None,
        };

        let photos = sqlx::query_as::<_, PhotoSummaryDto>(
            r#"
            SELECT p.id, p.url
            FROM photos p
            JOIN report_photos rp ON rp.photo_id = p.id
            WHERE rp.report_id = $1
            ORDER BY p.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let assignments = sqlx::query_as::<_, NamedAssignmentRow>(
            r#"
            SELECT ra.report_id, ra.responsible_id, ra.assignment_date, ra.validated,
                   ra.examination_date, ra.validated_items, ra.remediation_replacement,
                   ra.remediation_awareness, ra.remediation_assistance, ra.remediation_other,
                   u.name AS responsible_name
            FROM report_assignments ra
            JOIN users u ON u.id = ra.responsible_id
            WHERE ra.report_id = $1
            ORDER BY ra.assignment_date, ra.responsible_id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load assignments for report {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .into_iter()
        .map(|row| {
            AssignmentResponseDto::from(Assignment::from(row.assignment))
                .with_name(Some(row.responsible_name))
        })
        .collect();

        Ok(ReportDetailResponseDto {
            report: report.into(),
            complaint,
            photos,
            assignments,
        })
    }

    /// Partial update. `photo_ids`, when present, replaces the attached set.
    /// The complaint link is frozen once an officer has validated the report.
    pub async fn update(&self, id: i64, dto: UpdateReportDto) -> Result<ReportResponseDto> {
        let existing = self.find(id).await?;

        if let Some(Some(complaint_id)) = dto.complaint_id {
            self.ensure_complaint_exists(complaint_id).await?;
        }

        let mut tx = self.pool.begin().await?;

        let has_validated_assignment = match dto.complaint_id {
            Some(requested) if requested != existing.complaint_id => {
                sqlx::query_scalar::<_, bool>(
                    r#"
                    SELECT EXISTS(
                        SELECT 1 FROM report_assignments
                        WHERE report_id = $1 AND validated
                    )
                    "#,
                )
                .bind(id)
                .fetch_one(&mut *tx)
                .await?
            }
            _ => false,
        };
        let complaint_id = resolve_complaint_change(
            existing.complaint_id,
            dto.complaint_id,
            has_validated_assignment,
        )?;

        let report = sqlx::query_as::<_, Report>(
            r#"
            UPDATE reports
            SET title = $2, content = $3, complaint_id = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, content, complaint_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(dto.title.unwrap_or(existing.title))
        .bind(dto.content.unwrap_or(existing.content))
        .bind(complaint_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update report {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        if let Some(photo_ids) = dto.photo_ids {
            sqlx::query("DELETE FROM report_photos WHERE report_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            attach_photos(&mut tx, id, &photo_ids).await?;
        }

        tx.commit().await?;

        tracing::info!("Report {} updated", id);
        Ok(report.into())
    }

    /// Delete a report; assignments and photo links cascade
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete report {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Report {} not found", id)));
        }

        tracing::info!("Report {} deleted", id);
        Ok(())
    }

    /// Reports assigned to `responsible_id`, each with that officer's assignment
    pub async fn list_for_officer(&self, responsible_id: i64) -> Result<Vec<OfficerReportDto>> {
        let reports = sqlx::query_as::<_, Report>(
            r#"
            SELECT r.id, r.title, r.content, r.complaint_id, r.created_at, r.updated_at
            FROM reports r
            JOIN report_assignments ra ON ra.report_id = r.id
            WHERE ra.responsible_id = $1
            ORDER BY ra.assignment_date DESC, r.id DESC
            "#,
        )
        .bind(responsible_id)
        .fetch_all(&self.pool)
        .await?;

        let mut assignments: HashMap<i64, Assignment> = sqlx::query_as::<_, AssignmentRow>(
            r#"
            SELECT report_id, responsible_id, assignment_date, validated, examination_date,
                   validated_items, remediation_replacement, remediation_awareness,
                   remediation_assistance, remediation_other
            FROM report_assignments
            WHERE responsible_id = $1
            "#,
        )
        .bind(responsible_id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|row| (row.report_id, Assignment::from(row)))
        .collect();

        Ok(reports
            .into_iter()
            .filter_map(|report| {
                let assignment = assignments.remove(&report.id)?;
                Some(OfficerReportDto {
                    report: report.into(),
                    assignment: assignment.into(),
                })
            })
            .collect())
    }

    async fn find(&self, id: i64) -> Result<Report> {
        sqlx::query_as::<_, Report>(
            r#"
            SELECT id, title, content, complaint_id, created_at, updated_at
            FROM reports
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    async fn ensure_complaint_exists(&self, complaint_id: i64) -> Result<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM complaints WHERE id = $1)",
        )
        .bind(complaint_id)
        .fetch_one(&self.pool)
        .await?;

        if !exists {
            return Err(AppError::NotFound(format!(
                "Complaint {} not found",
                complaint_id
            )));
        }
        Ok(())
    }
}

async fn attach_photos(
    tx: &mut Transaction<'_, Postgres>,
    report_id: i64,
    photo_ids: &[i64],
) -> Result<()> {
    if photo_ids.is_empty() {
        return Ok(());
    }

    let found = sqlx::query_scalar::<_, i64>("SELECT id FROM photos WHERE id = ANY($1)")
        .bind(photo_ids)
        .fetch_all(&mut **tx)
        .await?;

    if let Some(missing) = photo_ids.iter().find(|id| !found.contains(*id)) {
        return Err(AppError::NotFound(format!("Photo {} not found", missing)));
    }

    sqlx::query(
        r#"
        INSERT INTO report_photos (report_id, photo_id)
        SELECT $1, UNNEST($2::BIGINT[])
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(report_id)
    .bind(photo_ids)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

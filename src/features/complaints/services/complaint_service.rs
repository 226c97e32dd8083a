use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::clients::models::Client;
use crate::features::complaints::dtos::{
    normalize_form_data, ClientSummaryDto, ComplaintDetailResponseDto, ComplaintResponseDto,
    CreateComplaintDto, UpdateComplaintDto,
};
use crate::features::complaints::models::Complaint;
use crate::features::photos::models::Photo;

/// Complaint row joined with its client's name
#[derive(sqlx::FromRow)]
struct ComplaintWithClientRow {
    #[sqlx(flatten)]
    complaint: Complaint,
    client_name: String,
}

impl From<ComplaintWithClientRow> for ComplaintResponseDto {
    fn from(row: ComplaintWithClientRow) -> Self {
        let client = ClientSummaryDto {
            id: row.complaint.client_id,
            name: row.client_name,
        };
        let mut dto = ComplaintResponseDto::from(row.complaint);
        dto.client = Some(client);
        dto
    }
}

const SELECT_WITH_CLIENT: &str = r#"
    SELECT c.id, c.title, c.form_data, c.client_id, c.created_at, c.updated_at,
           cl.name AS client_name
    FROM complaints c
    JOIN clients cl ON cl.id = c.client_id
"#;

/// Service for complaint operations
pub struct ComplaintService {
    pool: PgPool,
}

impl ComplaintService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<ComplaintResponseDto>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM complaints")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count complaints: {:?}", e);
                AppError::Database(e)
            })?;

        let rows = sqlx::query_as::<_, ComplaintWithClientRow>(&format!(
            "{} ORDER BY c.created_at DESC, c.id DESC OFFSET $1 LIMIT $2",
            SELECT_WITH_CLIENT
        ))
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list complaints: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((rows.into_iter().map(|r| r.into()).collect(), total))
    }

    pub async fn get(&self, id: i64) -> Result<ComplaintResponseDto> {
        sqlx::query_as::<_, ComplaintWithClientRow>(&format!(
            "{} WHERE c.id = $1",
            SELECT_WITH_CLIENT
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(|r| r.into())
        .ok_or_else(|| AppError::NotFound(format!("Complaint {} not found", id)))
    }

    /// Complaint with its full client record and photos
    pub async fn get_details(&self, id: i64) -> Result<ComplaintDetailResponseDto> {
        let complaint = self.find(id).await?;

        let client = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, name, email, phone, address, created_at, updated_at
            FROM clients
            WHERE id = $1
            "#,
        )
        .bind(complaint.client_id)
        .fetch_one(&self.pool)
        .await?;

        let photos = sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, url, storage_key, complaint_id, created_at, updated_at
            FROM photos
            WHERE complaint_id = $1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ComplaintDetailResponseDto {
            id: complaint.id,
            title: complaint.title,
            form_data: complaint.form_data,
            client: client.into(),
            photos: photos.into_iter().map(|p| p.into()).collect(),
            created_at: complaint.created_at,
            updated_at: complaint.updated_at,
        })
    }

    pub async fn create(&self, dto: CreateComplaintDto) -> Result<ComplaintResponseDto> {
        self.ensure_client_exists(dto.client_id).await?;

        let complaint = sqlx::query_as::<_, Complaint>(
            r#"
            INSERT INTO complaints (title, form_data, client_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, form_data, client_id, created_at, updated_at
            "#,
        )
        .bind(&dto.title)
        .bind(dto.form_data.map(normalize_form_data))
        .bind(dto.client_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create complaint: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Complaint {} created for client {}",
            complaint.id,
            complaint.client_id
        );
        self.get(complaint.id).await
    }

    pub async fn update(&self, id: i64, dto: UpdateComplaintDto) -> Result<ComplaintResponseDto> {
        let existing = self.find(id).await?;

        if let Some(client_id) = dto.client_id {
            self.ensure_client_exists(client_id).await?;
        }

        sqlx::query(
            r#"
            UPDATE complaints
            SET title = $2, form_data = $3, client_id = $4, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(dto.title.unwrap_or(existing.title))
        .bind(dto.form_data.map(normalize_form_data).or(existing.form_data))
        .bind(dto.client_id.unwrap_or(existing.client_id))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update complaint {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        self.get(id).await
    }

    /// Delete a complaint; photos and reports cascade
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM complaints WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete complaint {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Complaint {} not found", id)));
        }

        tracing::info!("Complaint {} deleted", id);
        Ok(())
    }

    async fn find(&self, id: i64) -> Result<Complaint> {
        sqlx::query_as::<_, Complaint>(
            r#"
            SELECT id, title, form_data, client_id, created_at, updated_at
            FROM complaints
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Complaint {} not found", id)))
    }

    async fn ensure_client_exists(&self, client_id: i64) -> Result<()> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1)")
                .bind(client_id)
                .fetch_one(&self.pool)
                .await?;

        if !exists {
            return Err(AppError::NotFound(format!("Client {} not found", client_id)));
        }
        Ok(())
    }
}

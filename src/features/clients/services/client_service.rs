use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::clients::dtos::{ClientResponseDto, CreateClientDto, UpdateClientDto};
use crate::features::clients::models::Client;

/// Service for client operations
pub struct ClientService {
    pool: PgPool,
}

impl ClientService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<ClientResponseDto>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clients")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count clients: {:?}", e);
                AppError::Database(e)
            })?;

        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, name, email, phone, address, created_at, updated_at
            FROM clients
            ORDER BY name, id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list clients: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((clients.into_iter().map(|c| c.into()).collect(), total))
    }

    pub async fn get(&self, id: i64) -> Result<ClientResponseDto> {
        self.find(id).await.map(|c| c.into())
    }

    pub async fn create(&self, dto: CreateClientDto) -> Result<ClientResponseDto> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (name, email, phone, address)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, phone, address, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(&dto.address)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create client: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Client {} created", client.id);
        Ok(client.into())
    }

    pub async fn update(&self, id: i64, dto: UpdateClientDto) -> Result<ClientResponseDto> {
        let existing = self.find(id).await?;

        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET name = $2, email = $3, phone = $4, address = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, phone, address, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(dto.name.unwrap_or(existing.name))
        .bind(dto.email.or(existing.email))
        .bind(dto.phone.or(existing.phone))
        .bind(dto.address.or(existing.address))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update client {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(client.into())
    }

    /// Delete a client together with its complaints
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete client {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Client {} not found", id)));
        }

        tracing::info!("Client {} deleted", id);
        Ok(())
    }

    async fn find(&self, id: i64) -> Result<Client> {
        sqlx::query_as::<_, Client>(
            r#"
            SELECT id, name, email, phone, address, created_at, updated_at
            FROM clients
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Client {} not found", id)))
    }
}

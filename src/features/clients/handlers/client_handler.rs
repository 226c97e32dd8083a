use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::clients::dtos::{ClientResponseDto, CreateClientDto, UpdateClientDto};
use crate::features::clients::services::ClientService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List clients (paginated)
#[utoipa::path(
    get,
    path = "/api/clients",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of clients", body = ApiResponse<Vec<ClientResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "clients",
    security(("bearer_auth" = []))
)]
pub async fn list_clients(
    _user: AuthenticatedUser,
    State(service): State<Arc<ClientService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ClientResponseDto>>>> {
    let (clients, total) = service.list(params.offset(), params.limit()).await?;
    Ok(Json(ApiResponse::success(
        Some(clients),
        None,
        Some(Meta { total }),
    )))
}

#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    params(
        ("id" = i64, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client found", body = ApiResponse<ClientResponseDto>),
        (status = 404, description = "Client not found")
    ),
    tag = "clients",
    security(("bearer_auth" = []))
)]
pub async fn get_client(
    _user: AuthenticatedUser,
    State(service): State<Arc<ClientService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<ClientResponseDto>>> {
    let client = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(client), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/clients",
    request_body = CreateClientDto,
    responses(
        (status = 201, description = "Client created", body = ApiResponse<ClientResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "clients",
    security(("bearer_auth" = []))
)]
pub async fn create_client(
    _user: AuthenticatedUser,
    State(service): State<Arc<ClientService>>,
    AppJson(dto): AppJson<CreateClientDto>,
) -> Result<(StatusCode, Json<ApiResponse<ClientResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let client = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(client),
            Some("Client created successfully".to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    params(
        ("id" = i64, Path, description = "Client ID")
    ),
    request_body = UpdateClientDto,
    responses(
        (status = 200, description = "Client updated", body = ApiResponse<ClientResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Client not found")
    ),
    tag = "clients",
    security(("bearer_auth" = []))
)]
pub async fn update_client(
    _user: AuthenticatedUser,
    State(service): State<Arc<ClientService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateClientDto>,
) -> Result<Json<ApiResponse<ClientResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let client = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(client),
        Some("Client updated successfully".to_string()),
        None,
    )))
}

/// Delete a client and its complaints
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    params(
        ("id" = i64, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client deleted"),
        (status = 404, description = "Client not found")
    ),
    tag = "clients",
    security(("bearer_auth" = []))
)]
pub async fn delete_client(
    _user: AuthenticatedUser,
    State(service): State<Arc<ClientService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Client deleted successfully".to_string()),
        None,
    )))
}

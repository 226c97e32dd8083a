//! Capability guards for handlers.
//!
//! Each guard extracts the authenticated user and checks it against one entry
//! of the capability table in [`crate::features::access`]:
//!
//! - `RequireIntakeStaff`: commercial or administrative (complaints, photos)
//! - `RequireReportManager`: administrative (report CRUD)
//! - `RequireNotifier`: administrative (notifications)
//! - `RequireQualityOfficer`: quality officer (own report list)
//!
//! Assignment and validation check their capability inside the services
//! because the check is part of those operations' contracts.

use crate::core::error::AppError;
use crate::features::access::Capability;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

fn authenticated(parts: &Parts) -> Result<AuthenticatedUser, AppError> {
    parts
        .extensions
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))
}

fn require(parts: &Parts, capability: Capability) -> Result<AuthenticatedUser, AppError> {
    let user = authenticated(parts)?;
    user.authorize(capability)?;
    Ok(user)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        authenticated(parts)
    }
}

/// Guard for complaint and photo intake.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireIntakeStaff(user): RequireIntakeStaff) { ... }
/// ```
pub struct RequireIntakeStaff(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireIntakeStaff
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        require(parts, Capability::RecordIntake).map(RequireIntakeStaff)
    }
}

/// Guard for report creation, update and deletion.
pub struct RequireReportManager(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireReportManager
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        require(parts, Capability::ManageReports).map(RequireReportManager)
    }
}

/// Guard for sending notifications.
pub struct RequireNotifier(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireNotifier
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        require(parts, Capability::SendNotifications).map(RequireNotifier)
    }
}

/// Guard for quality officer views.
pub struct RequireQualityOfficer(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireQualityOfficer
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        require(parts, Capability::ValidateReports).map(RequireQualityOfficer)
    }
}

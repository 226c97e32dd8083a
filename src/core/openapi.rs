use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::access::Role;
use crate::features::auth;
use crate::features::clients::{dtos as clients_dtos, handlers as clients_handlers};
use crate::features::complaints::{dtos as complaints_dtos, handlers as complaints_handlers};
use crate::features::notifications::{
    dtos as notifications_dtos, handlers as notifications_handlers,
};
use crate::features::photos::{dtos as photos_dtos, handlers as photos_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handler::get_me,
        // Users
        users_handlers::list_quality_officers,
        users_handlers::update_push_token,
        // Clients
        clients_handlers::list_clients,
        clients_handlers::get_client,
        clients_handlers::create_client,
        clients_handlers::update_client,
        clients_handlers::delete_client,
        // Complaints
        complaints_handlers::list_complaints,
        complaints_handlers::get_complaint,
        complaints_handlers::get_complaint_details,
        complaints_handlers::create_complaint,
        complaints_handlers::update_complaint,
        complaints_handlers::delete_complaint,
        // Photos
        photos_handlers::upload_photo,
        photos_handlers::list_photos,
        photos_handlers::get_photo,
        photos_handlers::delete_photo,
        // Reports
        reports_handlers::list_reports,
        reports_handlers::create_report,
        reports_handlers::get_report,
        reports_handlers::update_report,
        reports_handlers::delete_report,
        reports_handlers::list_my_reports,
        reports_handlers::assign_report,
        reports_handlers::validate_items,
        // Notifications
        notifications_handlers::list_notifications,
        notifications_handlers::get_notification,
        notifications_handlers::create_notification,
        notifications_handlers::update_notification,
        notifications_handlers::delete_notification,
    ),
    components(
        schemas(
            // Shared
            Meta,
            Role,
            // Auth
            auth::dto::MeResponseDto,
            auth::model::AuthenticatedUser,
            ApiResponse<auth::dto::MeResponseDto>,
            // Users
            users_dtos::UserResponseDto,
            users_dtos::UpdatePushTokenDto,
            ApiResponse<Vec<users_dtos::UserResponseDto>>,
            ApiResponse<users_dtos::UserResponseDto>,
            // Clients
            clients_dtos::ClientResponseDto,
            clients_dtos::CreateClientDto,
            clients_dtos::UpdateClientDto,
            ApiResponse<Vec<clients_dtos::ClientResponseDto>>,
            ApiResponse<clients_dtos::ClientResponseDto>,
            // Complaints
            complaints_dtos::ClientSummaryDto,
            complaints_dtos::ComplaintResponseDto,
            complaints_dtos::ComplaintDetailResponseDto,
            complaints_dtos::CreateComplaintDto,
            complaints_dtos::UpdateComplaintDto,
            ApiResponse<Vec<complaints_dtos::ComplaintResponseDto>>,
            ApiResponse<complaints_dtos::ComplaintResponseDto>,
            ApiResponse<complaints_dtos::ComplaintDetailResponseDto>,
            // Photos
            photos_dtos::UploadPhotoDto,
            photos_dtos::PhotoResponseDto,
            ApiResponse<Vec<photos_dtos::PhotoResponseDto>>,
            ApiResponse<photos_dtos::PhotoResponseDto>,
            // Reports
            reports_models::Remediation,
            reports_dtos::ReportResponseDto,
            reports_dtos::CreateReportDto,
            reports_dtos::UpdateReportDto,
            reports_dtos::ComplaintSummaryDto,
            reports_dtos::PhotoSummaryDto,
            reports_dtos::ReportListItemDto,
            reports_dtos::ReportDetailResponseDto,
            reports_dtos::OfficerReportDto,
            reports_dtos::AssignReportDto,
            reports_dtos::ValidateItemsDto,
            reports_dtos::AssignmentOutcomeDto,
            reports_dtos::AssignmentResponseDto,
            ApiResponse<Vec<reports_dtos::ReportListItemDto>>,
            ApiResponse<reports_dtos::ReportResponseDto>,
            ApiResponse<reports_dtos::ReportDetailResponseDto>,
            ApiResponse<Vec<reports_dtos::OfficerReportDto>>,
            ApiResponse<reports_dtos::AssignmentOutcomeDto>,
            ApiResponse<reports_dtos::AssignmentResponseDto>,
            // Notifications
            notifications_dtos::NotificationResponseDto,
            notifications_dtos::CreateNotificationDto,
            notifications_dtos::UpdateNotificationDto,
            ApiResponse<Vec<notifications_dtos::NotificationResponseDto>>,
            ApiResponse<notifications_dtos::NotificationResponseDto>,
        )
    ),
    tags(
        (name = "auth", description = "Current principal"),
        (name = "users", description = "Quality officer directory and device registration"),
        (name = "clients", description = "Workshop clients"),
        (name = "complaints", description = "Client complaints"),
        (name = "photos", description = "Complaint photos"),
        (name = "reports", description = "Reports, assignment and item validation"),
        (name = "notifications", description = "Notifications to quality officers"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Atelier Reclamation API",
        version = "0.1.0",
        description = "API documentation for the reclamation service",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_paths_are_documented() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/reports/{id}/assign"));
        assert!(doc.paths.paths.contains_key("/api/reports/{id}/validate-items"));
        assert!(doc.paths.paths.contains_key("/api/notifications"));
        assert!(doc.paths.paths["/api/notifications/{id}"].put.is_some());
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "Docs".to_string(),
        }
        .modify(&mut doc);
        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
    }
}

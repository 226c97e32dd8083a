use crate::core::error::{AppError, Result};

use super::Role;

/// An operation class gated by role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Assign a report to quality officers
    AssignReports,
    /// Validate complaint items of an assigned report
    ValidateReports,
    /// Create or change complaints and complaint photos
    RecordIntake,
    /// Create, update and delete reports
    ManageReports,
    /// Send notifications to quality officers
    SendNotifications,
}

impl Capability {
    /// Roles granted this capability
    pub const fn allowed_roles(self) -> &'static [Role] {
        match self {
            Capability::AssignReports => &[Role::Admin, Role::Administrative],
            Capability::ValidateReports => &[Role::QualityOfficer],
            Capability::RecordIntake => &[Role::Commercial, Role::Administrative],
            Capability::ManageReports => &[Role::Administrative],
            Capability::SendNotifications => &[Role::Administrative],
        }
    }

    pub fn allows(self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }
}

pub fn can_assign(role: Role) -> bool {
    Capability::AssignReports.allows(role)
}

pub fn can_validate(role: Role) -> bool {
    Capability::ValidateReports.allows(role)
}

pub fn can_create_complaint_or_photo(role: Role) -> bool {
    Capability::RecordIntake.allows(role)
}

/// Check `role` against the capability table.
///
/// Fails with `Forbidden` listing the roles that would have been accepted.
pub fn authorize(role: Role, capability: Capability) -> Result<()> {
    if capability.allows(role) {
        return Ok(());
    }

    let required = capability
        .allowed_roles()
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    Err(AppError::Forbidden(format!(
        "Access denied. Required role: {}",
        required
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_assign() {
        assert!(can_assign(Role::Admin));
        assert!(can_assign(Role::Administrative));
        assert!(!can_assign(Role::Commercial));
        assert!(!can_assign(Role::QualityOfficer));
    }

    #[test]
    fn test_can_validate() {
        assert!(can_validate(Role::QualityOfficer));
        assert!(!can_validate(Role::Admin));
        assert!(!can_validate(Role::Administrative));
        assert!(!can_validate(Role::Commercial));
    }

    #[test]
    fn test_can_create_complaint_or_photo() {
        assert!(can_create_complaint_or_photo(Role::Commercial));
        assert!(can_create_complaint_or_photo(Role::Administrative));
        assert!(!can_create_complaint_or_photo(Role::Admin));
        assert!(!can_create_complaint_or_photo(Role::QualityOfficer));
    }

    #[test]
    fn test_report_management_is_administrative_only() {
        assert!(Capability::ManageReports.allows(Role::Administrative));
        assert!(!Capability::ManageReports.allows(Role::Admin));
        assert!(Capability::SendNotifications.allows(Role::Administrative));
        assert!(!Capability::SendNotifications.allows(Role::Commercial));
    }

    #[test]
    fn test_authorize_message_lists_required_roles() {
        let err = authorize(Role::Commercial, Capability::AssignReports).unwrap_err();
        match err {
            AppError::Forbidden(msg) => {
                assert!(msg.contains("admin, administrative"), "got: {}", msg)
            }
            other => panic!("expected Forbidden, got {:?}", other),
        }
        assert!(authorize(Role::Admin, Capability::AssignReports).is_ok());
    }
}

/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// PHOTOS
// =============================================================================

/// Maximum accepted photo size (2 MiB)
pub const MAX_PHOTO_SIZE: usize = 2 * 1024 * 1024;

/// Image MIME types accepted for complaint photos
pub const ALLOWED_PHOTO_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/bmp",
];

// =============================================================================
// PUSH NOTIFICATIONS
// =============================================================================

/// Title of the push message sent along with a new notification
pub const NEW_COMPLAINT_PUSH_TITLE: &str = "New complaint";

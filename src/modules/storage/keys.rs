use uuid::Uuid;

/// File extension for an accepted image MIME type
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        "image/bmp" => Some("bmp"),
        _ => None,
    }
}

/// Object key for a new photo: `{prefix}/complaints/{complaint_id}/{uuid}.{ext}`
pub fn photo_key(prefix: &str, complaint_id: i64, extension: &str) -> String {
    format!(
        "{}/complaints/{}/{}.{}",
        prefix.trim_end_matches('/'),
        complaint_id,
        Uuid::new_v4(),
        extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_for_images_only() {
        assert_eq!(extension_for("image/jpeg"), Some("jpg"));
        assert_eq!(extension_for("image/bmp"), Some("bmp"));
        assert_eq!(extension_for("application/pdf"), None);
    }

    #[test]
    fn test_photo_key_layout() {
        let key = photo_key("photos/", 42, "png");
        assert!(key.starts_with("photos/complaints/42/"));
        assert!(key.ends_with(".png"));
        assert_ne!(key, photo_key("photos", 42, "png"));
    }
}

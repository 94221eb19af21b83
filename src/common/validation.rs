// Client-side upload validation
use crate::common::error::ValidationError;
use crate::common::models::DeclaredFile;
use image::ImageFormat;
use std::path::Path;

pub const MAX_UPLOAD_MB: u64 = 16;
pub const MAX_UPLOAD_BYTES: u64 = MAX_UPLOAD_MB * 1024 * 1024;

pub const ALLOWED_MEDIA_TYPES: [&str; 7] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/bmp",
    "image/tiff",
];

/// Extensions offered by the file dialog.
pub const ALLOWED_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff"];

/// Declared media type of a file, based on its extension.
pub fn media_type_for_path(path: &Path) -> Option<String> {
    let format = ImageFormat::from_path(path).ok()?;
    let media_type = match format {
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Png => "image/png",
        ImageFormat::Gif => "image/gif",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Bmp => "image/bmp",
        ImageFormat::Tiff => "image/tiff",
        ImageFormat::Ico => "image/x-icon",
        ImageFormat::Avif => "image/avif",
        _ => return None,
    };
    Some(media_type.to_string())
}

pub fn is_allowed_media_type(media_type: &str) -> bool {
    ALLOWED_MEDIA_TYPES.contains(&media_type.to_ascii_lowercase().as_str())
}

/// Checks media type first, then size.
pub fn validate(file: &DeclaredFile) -> Result<(), ValidationError> {
    match file.media_type.as_deref() {
        Some(mt) if is_allowed_media_type(mt) => {}
        other => return Err(ValidationError::UnsupportedMediaType(other.map(str::to_string))),
    }
    if file.size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge { size: file.size });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn declared(name: &str, size: u64) -> DeclaredFile {
        let path = PathBuf::from(name);
        DeclaredFile {
            media_type: media_type_for_path(&path),
            file_name: name.to_string(),
            path,
            size,
        }
    }

    #[test]
    fn accepts_every_allowed_extension() {
        for name in ["a.jpg", "a.JPEG", "a.png", "a.gif", "a.webp", "a.bmp", "a.tif", "a.tiff"] {
            assert_eq!(validate(&declared(name, 1024)), Ok(()), "{}", name);
        }
    }

    #[test]
    fn rejects_unknown_and_disallowed_types() {
        assert!(matches!(
            validate(&declared("notes.txt", 10)),
            Err(ValidationError::UnsupportedMediaType(None))
        ));
        assert!(matches!(
            validate(&declared("icon.ico", 10)),
            Err(ValidationError::UnsupportedMediaType(Some(_)))
        ));
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert_eq!(validate(&declared("ship.png", MAX_UPLOAD_BYTES)), Ok(()));
        assert_eq!(
            validate(&declared("ship.png", MAX_UPLOAD_BYTES + 1)),
            Err(ValidationError::TooLarge { size: MAX_UPLOAD_BYTES + 1 })
        );
    }

    #[test]
    fn jpg_alias_is_allowed() {
        assert!(is_allowed_media_type("image/jpg"));
        assert!(is_allowed_media_type("IMAGE/PNG"));
        assert!(!is_allowed_media_type("image/svg+xml"));
    }

    #[test]
    fn error_messages_match_ui_copy() {
        assert_eq!(
            ValidationError::TooLarge { size: 0 }.to_string(),
            "File size must be less than 16MB"
        );
    }
}

use crate::common::error::{ClientError, ValidationError};
use crate::common::models::{DeclaredFile, SelectedImage};
use crate::common::validation::{media_type_for_path, MAX_UPLOAD_BYTES};
use std::path::Path;

/// Reads name, media type and size without loading the file.
pub async fn inspect(path: &Path) -> Result<DeclaredFile, ClientError> {
    let metadata = tokio::fs::metadata(path).await?;
    if !metadata.is_file() {
        return Err(ClientError::Io(format!("{} is not a file", path.display())));
    }
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown_file".to_string());
    Ok(DeclaredFile {
        path: path.to_path_buf(),
        file_name,
        media_type: media_type_for_path(path),
        size: metadata.len(),
    })
}

/// Loads the bytes of an already validated file.
///
/// The size limit is checked again on the bytes read, since the file may have
/// grown after it was inspected.
pub async fn read_image(file: DeclaredFile) -> Result<SelectedImage, ClientError> {
    let bytes = tokio::fs::read(&file.path).await?;
    log::debug!("Read {} bytes from {}", bytes.len(), file.path.display());
    let size = bytes.len() as u64;
    if size > MAX_UPLOAD_BYTES {
        return Err(ClientError::Io(ValidationError::TooLarge { size }.to_string()));
    }
    let media_type = file
        .media_type
        .ok_or_else(|| ClientError::Io(format!("unknown media type for {}", file.file_name)))?;
    Ok(SelectedImage {
        file_name: file.file_name,
        media_type,
        size,
        bytes: bytes.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn inspect_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frigate.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let declared = inspect(&path).await.unwrap();
        assert_eq!(declared.file_name, "frigate.png");
        assert_eq!(declared.media_type.as_deref(), Some("image/png"));
        assert_eq!(declared.size, 4);

        let image = read_image(declared).await.unwrap();
        assert_eq!(&image.bytes[..], &[0x89, b'P', b'N', b'G']);
        assert_eq!(image.media_type, "image/png");
    }

    #[tokio::test]
    async fn file_grown_past_limit_is_rejected_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bulk.jpg");
        std::fs::write(&path, [0xFF, 0xD8]).unwrap();
        let declared = inspect(&path).await.unwrap();

        std::fs::write(&path, vec![0u8; MAX_UPLOAD_BYTES as usize + 1]).unwrap();
        let err = read_image(declared).await.unwrap_err();
        assert_eq!(err, ClientError::Io("File size must be less than 16MB".to_string()));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = inspect(&dir.path().join("gone.jpg")).await.unwrap_err();
        assert!(matches!(err, ClientError::Io(_)));
    }

    #[tokio::test]
    async fn directories_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(inspect(dir.path()).await.is_err());
    }
}

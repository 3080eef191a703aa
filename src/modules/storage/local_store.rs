//! Directory-backed blob store for uploaded images
//!
//! Uploaded files land under the configured upload directory and are
//! addressed by a relative URL of the form `/{upload_dir}/{generated_name}`.
//! Filenames combine the original stem with a random UUID so concurrent
//! uploads never collide.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use uuid::Uuid;

use crate::core::config::UploadConfig;
use crate::core::error::{AppError, Result};

pub struct LocalFileStore {
    /// On-disk directory that receives uploads (created lazily)
    root: PathBuf,
    /// URL prefix segment, equal to the configured upload directory
    url_prefix: String,
    /// Lowercased extensions with leading dot, e.g. ".jpg"
    allowed_extensions: Vec<String>,
}

impl LocalFileStore {
    pub fn new(config: &UploadConfig) -> Self {
        let allowed_extensions = config
            .allowed_extensions
            .split(',')
            .map(|ext| {
                let ext = ext.trim().to_lowercase();
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{}", ext)
                }
            })
            .filter(|ext| ext.len() > 1)
            .collect();

        Self {
            root: PathBuf::from(&config.upload_directory),
            url_prefix: config.upload_directory.clone(),
            allowed_extensions,
        }
    }

    /// On-disk directory backing the store (for static file serving)
    pub fn directory(&self) -> &Path {
        &self.root
    }

    /// URL prefix under which stored files are served back
    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// Check the file extension against the allow-list.
    ///
    /// Runs before any bytes touch the disk, so a rejected upload leaves no
    /// partial file behind.
    pub fn validate_extension(&self, filename: &str) -> Result<()> {
        let (_, extension) = split_filename(filename);
        let extension = extension.to_lowercase();

        if extension.is_empty() || !self.allowed_extensions.iter().any(|e| *e == extension) {
            return Err(AppError::UnsupportedMediaType(format!(
                "File type '{}' is not supported. Allowed extensions: {}",
                extension,
                self.allowed_extensions.join(", ")
            )));
        }

        Ok(())
    }

    /// Persist uploaded bytes and return the relative URL of the stored file
    pub async fn save(&self, original_filename: &str, data: &[u8]) -> Result<String> {
        self.validate_extension(original_filename)?;

        // Create the upload directory if absent
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            AppError::Internal(format!(
                "Failed to create upload directory '{}': {}",
                self.root.display(),
                e
            ))
        })?;

        let file_name = generate_file_name(original_filename);
        let file_path = self.root.join(&file_name);

        tokio::fs::write(&file_path, data).await.map_err(|e| {
            AppError::Internal(format!(
                "Failed to store uploaded file '{}': {}",
                file_path.display(),
                e
            ))
        })?;

        debug!("File stored at {}", file_path.display());

        let url = format!("/{}/{}", self.url_prefix, file_name);
        info!(
            "Upload stored: original={}, url={}, size={}",
            original_filename,
            url,
            data.len()
        );

        Ok(url)
    }
}

/// Split a filename into (stem, extension-with-dot); extension is empty when
/// the name carries none.
fn split_filename(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(idx) if idx > 0 => (&filename[..idx], &filename[idx..]),
        _ => (filename, ""),
    }
}

/// Build a collision-resistant name: original stem + random UUID + extension
fn generate_file_name(original_filename: &str) -> String {
    let (stem, extension) = split_filename(original_filename);
    format!("{}{}{}", stem, Uuid::new_v4(), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(allowed: &str, dir: &str) -> LocalFileStore {
        LocalFileStore::new(&UploadConfig {
            upload_directory: dir.to_string(),
            allowed_extensions: allowed.to_string(),
            max_file_size: 1024,
        })
    }

    #[test]
    fn test_validate_extension_allowed() {
        let store = store_with(".jpg,.jpeg,.png", "uploads");
        assert!(store.validate_extension("logo.jpg").is_ok());
        assert!(store.validate_extension("logo.with.dots.png").is_ok());
    }

    #[test]
    fn test_validate_extension_case_insensitive() {
        let store = store_with(".jpg,.PNG", "uploads");
        assert!(store.validate_extension("LOGO.JPG").is_ok());
        assert!(store.validate_extension("logo.png").is_ok());
    }

    #[test]
    fn test_validate_extension_rejected() {
        let store = store_with(".jpg,.png", "uploads");
        assert!(store.validate_extension("payload.exe").is_err());
        assert!(store.validate_extension("noextension").is_err());
        assert!(store.validate_extension(".gitignore").is_err());
    }

    #[test]
    fn test_allow_list_entries_without_leading_dot() {
        let store = store_with("jpg, png", "uploads");
        assert!(store.validate_extension("logo.jpg").is_ok());
        assert!(store.validate_extension("logo.gif").is_err());
    }

    #[test]
    fn test_generate_file_name_keeps_stem_and_extension() {
        let name = generate_file_name("logo.png");
        assert!(name.starts_with("logo"));
        assert!(name.ends_with(".png"));
        assert!(name.len() > "logo.png".len());
    }

    #[test]
    fn test_generate_file_name_unique_per_call() {
        assert_ne!(generate_file_name("logo.png"), generate_file_name("logo.png"));
    }

    #[tokio::test]
    async fn test_save_writes_bytes_and_returns_relative_url() {
        let dir = tempfile::tempdir().unwrap();
        let upload_dir = dir.path().join("uploads");
        let store = store_with(".png", upload_dir.to_str().unwrap());

        let url = store.save("logo.png", b"fake image bytes").await.unwrap();

        assert!(url.starts_with(&format!("/{}/logo", upload_dir.display())));
        assert!(url.ends_with(".png"));

        let stored = url.rsplit('/').next().unwrap();
        let bytes = tokio::fs::read(upload_dir.join(stored)).await.unwrap();
        assert_eq!(bytes, b"fake image bytes");
    }

    #[tokio::test]
    async fn test_save_rejected_extension_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let upload_dir = dir.path().join("uploads");
        let store = store_with(".png", upload_dir.to_str().unwrap());

        let result = store.save("payload.exe", b"nope").await;
        assert!(result.is_err());

        // Rejection happens before the directory is even created
        assert!(!upload_dir.exists());
    }
}

//! Asset storage — profile image and resume uploads.
//!
//! DESIGN
//! ======
//! Files land on local disk under a per-kind subdirectory of the uploads
//! root and are served statically at `/assets`. Re-uploading the same name
//! overwrites in place, so the public URL for a given file is stable.

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("invalid file name: {0:?}")]
    InvalidName(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct AssetStore {
    root: PathBuf,
    public_base: String,
}

impl AssetStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        let mut public_base = public_base.into();
        while public_base.ends_with('/') {
            public_base.pop();
        }
        Self { root: root.into(), public_base }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Public URL for a stored asset path like `profile/me.png`.
    #[must_use]
    pub fn public_url(&self, path: &str) -> String {
        format!("{}/assets/{}", self.public_base, path)
    }

    /// Write a file under `<root>/<dir>/<name>`, overwriting any previous
    /// version, and return its public URL. `name` must be a bare file name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` for empty names or names containing path
    /// separators or `..`, and an io error if the write fails.
    pub async fn save(&self, dir: &str, name: &str, bytes: &[u8]) -> Result<String, UploadError> {
        let name = sanitize_name(name)?;
        let target_dir = self.root.join(dir);
        tokio::fs::create_dir_all(&target_dir).await?;
        tokio::fs::write(target_dir.join(&name), bytes).await?;
        Ok(self.public_url(&format!("{dir}/{name}")))
    }
}

/// Reject anything that could escape the uploads directory.
fn sanitize_name(name: &str) -> Result<String, UploadError> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains('/')
        || trimmed.contains('\\')
        || trimmed.contains('\0')
    {
        return Err(UploadError::InvalidName(name.to_owned()));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
#[path = "uploads_test.rs"]
mod tests;

use std::path::PathBuf;

use tokio::fs;

use crate::error::{AppError, AppResult};
use crate::utils::time::current_timestamp_millis;

/// Object storage collaborator for uploaded images. Files land under the
/// configured upload root and are served read-only at the public prefix;
/// the rest of the system only ever sees the returned URL.
#[derive(Clone)]
pub struct StorageService {
    root: PathBuf,
    public_prefix: String,
}

impl StorageService {
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        StorageService {
            root: root.into(),
            public_prefix: public_prefix.into(),
        }
    }

    /// Writes the object. Any failure is an upload error; the caller must
    /// abort whatever database write depended on it.
    pub async fn save(&self, path: &str, bytes: &[u8]) -> AppResult<()> {
        let target = self.root.join(path);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::Upload(e.to_string()))?;
        }

        fs::write(&target, bytes)
            .await
            .map_err(|e| AppError::Upload(e.to_string()))?;

        Ok(())
    }

    pub fn public_url_for(&self, path: &str) -> String {
        format!("{}/{}", self.public_prefix.trim_end_matches('/'), path)
    }

    /// `{obra}/[{prefix}-]{timestamp}-{filename}`, with the file name reduced
    /// to a safe character set.
    pub fn object_path(obra_id: &str, prefix: Option<&str>, filename: &str) -> String {
        let name = sanitize_filename(filename);
        let ts = current_timestamp_millis();
        match prefix {
            Some(p) => format!("{}/{}-{}-{}", obra_id, p, ts, name),
            None => format!("{}/{}-{}", obra_id, ts, name),
        }
    }
}

fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();

    if cleaned.trim_matches('-').is_empty() {
        "imagem".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_writes_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageService::new(dir.path(), "/uploads");

        storage.save("obra-1/foto.png", b"png-bytes").await.unwrap();

        let written = std::fs::read(dir.path().join("obra-1/foto.png")).unwrap();
        assert_eq!(written, b"png-bytes");
    }

    #[test]
    fn public_url_joins_prefix() {
        let storage = StorageService::new("/tmp", "http://localhost:8080/uploads/");
        assert_eq!(
            storage.public_url_for("obra-1/foto.png"),
            "http://localhost:8080/uploads/obra-1/foto.png"
        );
    }

    #[test]
    fn object_path_sanitizes_names() {
        let path = StorageService::object_path("obra-1", None, "minha foto/..#1.png");
        let name = path.rsplit('/').next().unwrap();
        assert!(!name.contains(' '));
        assert!(!name.contains('#'));
        assert!(path.starts_with("obra-1/"));
        // exactly one slash: the obra segment
        assert_eq!(path.matches('/').count(), 1);
    }

    #[test]
    fn object_path_carries_banner_prefix() {
        let path = StorageService::object_path("obra-1", Some("3d"), "render.png");
        assert!(path.starts_with("obra-1/3d-"));
        assert!(path.ends_with("-render.png"));
    }
}

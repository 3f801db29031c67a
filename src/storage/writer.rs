// Output file writer with path confinement

use std::path::{Component, Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use super::config::StorageConfig;
use super::error::{Result, StorageError};
use super::types::{WriteOutcome, WriteRequest};

/// Writes caller-named text files beneath a fixed output root.
///
/// The root is created and canonicalized at construction; every write
/// re-verifies that its canonicalized parent stays inside it.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    root: PathBuf,
}

impl OutputWriter {
    pub fn new(config: StorageConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.output_root)?;
        let root = std::fs::canonicalize(&config.output_root)?;
        debug!(root = %root.display(), "initializing output writer");
        Ok(Self { root })
    }

    /// The canonicalized confinement root
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn write(&self, req: WriteRequest) -> Result<WriteOutcome> {
        let relative = sanitize_relative(&req.path);
        if relative.as_os_str().is_empty() {
            return Err(StorageError::InvalidPath(req.path.clone()));
        }
        let target = self.root.join(&relative);
        let file_name = target
            .file_name()
            .map(ToOwned::to_owned)
            .ok_or_else(|| StorageError::InvalidPath(req.path.clone()))?;

        let parent = target.parent().unwrap_or(&self.root).to_path_buf();
        tokio::fs::create_dir_all(&parent).await?;

        // Canonicalization is the hard check; component filtering alone
        // would miss symlinks pointing outside the root.
        let parent = tokio::fs::canonicalize(&parent).await?;
        if !parent.starts_with(&self.root) {
            return Err(StorageError::PathEscape(req.path.clone()));
        }
        let resolved = parent.join(file_name);

        if !req.overwrite && tokio::fs::try_exists(&resolved).await? {
            return Err(StorageError::AlreadyExists(req.path.clone()));
        }

        let content = normalize_newlines(&req.content);
        let bytes = content.as_bytes();
        tokio::fs::write(&resolved, bytes).await?;

        let sha256 = hex::encode(Sha256::digest(bytes));
        info!(
            path = %resolved.display(),
            bytes_written = bytes.len(),
            overwrite = req.overwrite,
            "file written"
        );

        Ok(WriteOutcome {
            path: resolved.display().to_string(),
            bytes_written: bytes.len() as u64,
            sha256,
        })
    }
}

/// Keep only the normal components of an untrusted path, dropping
/// parent-directory tokens, leading separators and drive prefixes.
fn sanitize_relative(raw: &str) -> PathBuf {
    Path::new(raw)
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect()
}

/// Normalize CRLF line endings to LF
fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_parent_tokens() {
        assert_eq!(
            sanitize_relative("../../etc/passwd"),
            PathBuf::from("etc/passwd")
        );
        assert_eq!(sanitize_relative("/abs/file.txt"), PathBuf::from("abs/file.txt"));
        assert_eq!(sanitize_relative("a/./b.txt"), PathBuf::from("a/b.txt"));
        assert_eq!(sanitize_relative("plain.txt"), PathBuf::from("plain.txt"));
    }

    #[test]
    fn sanitize_keeps_dotted_file_names() {
        assert_eq!(sanitize_relative("notes..txt"), PathBuf::from("notes..txt"));
    }

    #[test]
    fn newlines_are_normalized() {
        assert_eq!(normalize_newlines("a\r\nb\r\n"), "a\nb\n");
        assert_eq!(normalize_newlines("a\nb"), "a\nb");
    }
}

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{LintError, Result};

/// Extension of files picked up from a directory, matched case-sensitively.
pub const XML_EXTENSION: &str = "xml";

/// Shallow discovery of the files a lint run should check.
///
/// A directory root contributes its immediate `.xml` entries; subdirectories
/// are never entered. A file root is always returned as-is, whatever its
/// extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDiscovery;

impl FileDiscovery {
    pub fn new() -> Self {
        Self
    }

    /// Resolve `root` against `cwd` and list the files to validate as
    /// absolute paths, sorted by file name.
    pub async fn discover_files(&self, root: &Path, cwd: &Path) -> Result<Vec<PathBuf>> {
        let root = absolute_path(root, cwd);

        let metadata = match fs::metadata(&root).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LintError::PathNotFound { path: root });
            }
            Err(e) => return Err(LintError::io(root, e)),
        };

        if !metadata.is_dir() {
            return Ok(vec![root]);
        }

        let mut read_dir = fs::read_dir(&root)
            .await
            .map_err(|e| LintError::io(&root, e))?;

        let mut files = Vec::new();
        while let Some(entry) = read_dir.next_entry().await.map_err(|e| {
            LintError::Discovery {
                path: root.clone(),
                reason: e.to_string(),
            }
        })? {
            let entry_path = entry.path();
            if !self.should_process(&entry_path) {
                continue;
            }

            // Follows symlinks, so a link to a directory is skipped too.
            let is_dir = fs::metadata(&entry_path)
                .await
                .map(|m| m.is_dir())
                .unwrap_or(false);
            if is_dir {
                tracing::trace!(path = %entry_path.display(), "skipping directory");
                continue;
            }

            files.push(entry_path);
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    /// Check if a directory entry has the `.xml` extension.
    pub fn should_process(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == XML_EXTENSION)
    }
}

/// Join a relative path onto `cwd` and drop `.` and `..` segments lexically.
pub fn absolute_path(path: &Path, cwd: &Path) -> PathBuf {
    use std::path::Component;

    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Express `path` relative to `base`, walking up with `..` where the two
/// diverge. Both are expected to be absolute.
pub fn relative_path(path: &Path, base: &Path) -> PathBuf {
    let path_components: Vec<_> = path.components().collect();
    let base_components: Vec<_> = base.components().collect();

    let common = path_components
        .iter()
        .zip(base_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    // Different roots (e.g. other drive on Windows)
    if common == 0 {
        return path.to_path_buf();
    }

    let mut relative = PathBuf::new();
    for _ in common..base_components.len() {
        relative.push("..");
    }
    for component in &path_components[common..] {
        relative.push(component.as_os_str());
    }
    relative
}

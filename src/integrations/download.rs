// src/integrations/download.rs
//
// File-download collaborator
//
// In a browser host this triggers a save-as; desktop hosts and tests
// write straight into a directory.

use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait FileDownloader: Send + Sync {
    fn download(&self, filename: &str, mime_type: &str, content: &str) -> AppResult<()>;
}

/// Saves downloads as files inside a fixed directory
#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
    dir: PathBuf,
}

impl DirectoryDownloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The user's download directory, or the home directory when unknown
    pub fn user_downloads() -> AppResult<Self> {
        let dir = dirs::download_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| AppError::Other("Could not determine download directory".to_string()))?;
        Ok(Self::new(dir))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileDownloader for DirectoryDownloader {
    fn download(&self, filename: &str, mime_type: &str, content: &str) -> AppResult<()> {
        // Only a bare file name may be written; never escape the directory
        let is_bare_name = Path::new(filename)
            .file_name()
            .map(|name| name == filename)
            .unwrap_or(false);
        if !is_bare_name {
            return Err(AppError::Download {
                filename: filename.to_string(),
                reason: "not a plain file name".to_string(),
            });
        }

        std::fs::create_dir_all(&self.dir)?;
        let target = self.dir.join(filename);
        std::fs::write(&target, content).map_err(|e| AppError::Download {
            filename: filename.to_string(),
            reason: e.to_string(),
        })?;

        log::info!("Saved {} ({}) to {}", filename, mime_type, target.display());
        Ok(())
    }
}

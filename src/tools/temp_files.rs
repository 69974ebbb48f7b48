//! Run-scoped temporary files.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::Result;

/// Owns every temporary file created during one run.
///
/// Construct one per run and pass it to whatever needs temp files. All files
/// are removed by [`TempFileContext::cleanup`], or when the context is
/// dropped, whether or not the invocations that used them succeeded.
#[derive(Debug)]
pub struct TempFileContext {
    dir: Option<TempDir>,
    files: Vec<PathBuf>,
    counter: usize,
}

impl TempFileContext {
    /// Create a context backed by a fresh temporary directory.
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("docgraph-").tempdir()?;
        tracing::debug!("Created temp directory {}", dir.path().display());
        Ok(Self {
            dir: Some(dir),
            files: Vec::new(),
            counter: 0,
        })
    }

    /// The backing directory, until cleaned up.
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_ref().map(TempDir::path)
    }

    /// Write `contents` to a new, uniquely named file and track it.
    pub fn create(&mut self, prefix: &str, contents: &[u8]) -> Result<PathBuf> {
        let dir = match self.dir.as_ref() {
            Some(dir) => dir.path(),
            None => {
                return Err(std::io::Error::other("temp file context already cleaned up").into());
            }
        };
        self.counter += 1;
        let path = dir.join(format!("{}-{}.tmp", prefix, self.counter));
        fs::write(&path, contents)?;
        self.files.push(path.clone());
        Ok(path)
    }

    /// Files currently tracked.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Remove every tracked file and the backing directory.
    pub fn cleanup(&mut self) -> Result<()> {
        let removed = self.files.len();
        self.files.clear();
        if let Some(dir) = self.dir.take() {
            dir.close()?;
        }
        tracing::debug!("Cleaned up {} temp file(s)", removed);
        Ok(())
    }
}

impl Drop for TempFileContext {
    fn drop(&mut self) {
        if let Err(e) = self.cleanup() {
            tracing::warn!("Failed to clean up temp files: {}", e);
        }
    }
}

//! Configuration for session bootstrap.

use std::path::{Path, PathBuf};

/// Options controlling how a helper session is bootstrapped.
///
/// Historically the directory that remote URLs resolve against lived in a
/// process-wide constant derived from the environment at load time; it is an
/// explicit value here so callers decide it and tests can vary it.
#[derive(Debug, Clone)]
pub struct Options {
    /// Base directory against which the raw remote URL is resolved to form
    /// [`SessionContext::remote_url`](crate::SessionContext).
    pub remotes_root: PathBuf,
}

impl Options {
    /// Create options resolving remote URLs under `remotes_root`.
    pub fn new(remotes_root: impl Into<PathBuf>) -> Self {
        Self {
            remotes_root: remotes_root.into(),
        }
    }

    /// The base directory remote URLs are resolved against.
    pub fn remotes_root(&self) -> &Path {
        &self.remotes_root
    }
}

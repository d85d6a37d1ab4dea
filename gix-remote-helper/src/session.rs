//! Per-process session context derived from the environment Git sets up.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::{config::Options, Error, Result};

/// Immutable per-process record describing the invocation Git made.
///
/// Created once at startup and passed by reference to every handler
/// invocation; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// Absolute path of the `.git` directory of the repository invoking the
    /// helper, from the `GIT_DIR` environment variable.
    pub gitdir: PathBuf,
    /// The symbolic remote name, or the remote URL if the remote has no name.
    /// Supplied by Git as the first positional argument.
    pub remote_name: String,
    /// The remote URL resolved against [`Options::remotes_root`], with any
    /// helper-scheme prefix (`<scheme>://`) stripped beforehand.
    pub remote_url: PathBuf,
}

impl SessionContext {
    /// Create a context from already-resolved parts.
    pub fn new(gitdir: impl Into<PathBuf>, remote_name: impl Into<String>, remote_url: impl Into<PathBuf>) -> Self {
        Self {
            gitdir: gitdir.into(),
            remote_name: remote_name.into(),
            remote_url: remote_url.into(),
        }
    }

    /// Derive the context from the calling process environment: `GIT_DIR`
    /// plus the positional arguments Git passes to a remote helper.
    ///
    /// Absence of any of the three is a fatal startup error.
    pub fn from_process(options: &Options) -> Result<Self> {
        Self::from_parts(
            std::env::var_os("GIT_DIR"),
            std::env::args().skip(1),
            &std::env::current_dir()?,
            options,
        )
    }

    /// The pure core of [`from_process`](Self::from_process): `args` are the
    /// positional arguments without the program name, `cwd` is the directory
    /// relative `GIT_DIR` values are resolved against.
    pub fn from_parts(
        git_dir: Option<OsString>,
        args: impl IntoIterator<Item = String>,
        cwd: &Path,
        options: &Options,
    ) -> Result<Self> {
        let git_dir = git_dir.ok_or(Error::MissingGitDir)?;
        let mut args = args.into_iter();
        let remote_name = args.next().ok_or(Error::MissingRemoteName)?;
        let remote_url_raw = args.next().ok_or(Error::MissingRemoteUrl)?;

        let gitdir = cwd.join(git_dir);
        let remote_url = options.remotes_root.join(strip_scheme(&remote_url_raw));

        let session = Self::new(gitdir, remote_name, remote_url);
        tracing::debug!(
            gitdir = %session.gitdir.display(),
            remote_name = %session.remote_name,
            remote_url = %session.remote_url.display(),
            "session bootstrapped"
        );
        Ok(session)
    }
}

/// Strip a leading `<scheme>://` from a remote URL, if present.
///
/// Git hands helpers the URL part after `helper::`, which may still carry a
/// transport scheme; the remainder is what gets resolved against the remotes
/// root.
pub fn strip_scheme(url: &str) -> &str {
    match url.split_once("://") {
        Some((scheme, rest)) if !scheme.is_empty() && !scheme.contains(':') && !rest.is_empty() => rest,
        _ => url,
    }
}

//! Error types for the remote-helper engine.

use crate::handlers::HandlerError;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// All the ways a helper session can fail.
///
/// None of these are recovered from: a remote helper that loses protocol
/// sync or fails a handler is expected to exit non-zero and let Git report
/// the failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The `GIT_DIR` environment variable was not set by the calling Git process.
    #[error("missing GIT_DIR in the environment")]
    MissingGitDir,

    /// The remote name (first positional argument) was not supplied.
    #[error("missing remote name argument")]
    MissingRemoteName,

    /// The remote URL (second positional argument) was not supplied.
    #[error("missing remote URL argument")]
    MissingRemoteUrl,

    /// A one-line command arrived while a multi-line block was still
    /// accumulating. Continuing would desynchronize the channel.
    #[error("one-line command {line:?} arrived while a multi-line block was still accumulating")]
    Framing {
        /// The offending one-line command.
        line: String,
    },

    /// The first line of a completed block matched no known command.
    #[error("unknown command: {line:?}")]
    UnknownCommand {
        /// The unrecognized first line of the block.
        line: String,
    },

    /// A `connect` command did not name the service to connect to.
    #[error("connect command is missing its service argument")]
    MissingService,

    /// A `connect` command was dispatched but no connect handler is
    /// registered. Correct capability advertisement prevents this, but it is
    /// still checked.
    #[error("'connect' requested but no connect handler is registered")]
    NoConnectHandler,

    /// The `init` lifecycle hook failed, aborting startup.
    #[error("init hook failed")]
    Init(#[source] HandlerError),

    /// The connect handler failed. The source error is the handler's own,
    /// unmodified.
    #[error("connect handler failed")]
    Connect(#[source] HandlerError),

    /// Reading the input stream or writing the protocol stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! Engine for Git's remote-helper line protocol.
//!
//! Git talks to a remote helper over the helper's stdin/stdout using a
//! line-based request/response protocol: single-line commands like
//! `capabilities` and `option`, and multi-line command blocks terminated by a
//! blank line. This crate owns the finicky part of that exchange — splitting
//! an arbitrarily chunked byte stream into lines, assembling lines into
//! command blocks, parsing blocks into typed commands, and dispatching them
//! strictly one at a time to caller-supplied handlers — while the handlers
//! own the actual transport work (e.g. spawning `git-upload-pack` against a
//! backing store).
//!
//! # Example
//!
//! ```no_run
//! use gix_remote_helper::{Helper, HandlerSet, Options, SessionContext};
//!
//! let options = Options::new("/var/lib/remotes");
//! let session = SessionContext::from_process(&options)?;
//! let handlers = HandlerSet::default().with_connect(gix_remote_helper::connect::spawn);
//!
//! let stdin = std::io::stdin();
//! let stdout = std::io::stdout();
//! Helper::new(session, handlers).serve(stdin.lock(), stdout.lock())?;
//! # Ok::<(), gix_remote_helper::Error>(())
//! ```

#![deny(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod config;
pub mod connect;
pub mod error;
pub mod handlers;
pub mod helper;
pub mod protocol;
pub mod session;

pub use config::Options;
pub use error::{Error, Result};
pub use handlers::{ConnectParams, HandlerError, HandlerSet};
pub use helper::Helper;
pub use protocol::{capabilities::CapabilitySet, command::Command};
pub use session::SessionContext;

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

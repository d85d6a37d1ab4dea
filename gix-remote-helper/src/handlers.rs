//! The handler seam between the protocol engine and concrete transports.
//!
//! The engine never performs transport work itself; it dispatches typed
//! commands to whichever of these callbacks the caller registered. Presence
//! or absence of the optional callbacks is what shapes the capability
//! advertisement.

use std::fmt;

use crate::session::SessionContext;

/// The error type handlers report; carried through the engine unmodified.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Hook invoked once, before the first command block is dispatched.
///
/// It is run to completion (and its result checked) before any input is
/// read, so setup errors abort startup instead of corrupting a session.
pub type InitHook = dyn FnMut(&SessionContext) -> std::result::Result<(), HandlerError> + Send;

/// Handler for the `connect` command.
///
/// Returns the full response to write to the protocol stream. The protocol
/// expects a leading blank line followed by a raw bidirectional byte stream;
/// that framing is the handler's responsibility, the engine writes the
/// returned string verbatim.
pub type ConnectHandler = dyn FnMut(ConnectParams<'_>) -> std::result::Result<String, HandlerError> + Send;

/// Everything a connect handler gets to see.
#[derive(Debug, Clone, Copy)]
pub struct ConnectParams<'a> {
    /// The immutable per-process session context.
    pub session: &'a SessionContext,
    /// The git service named on the `connect` line, e.g. `git-upload-pack`.
    pub git_command: &'a str,
}

/// The set of handlers a caller registers with the engine.
#[derive(Default)]
pub struct HandlerSet {
    pub(crate) init: Option<Box<InitHook>>,
    pub(crate) connect: Option<Box<ConnectHandler>>,
}

impl HandlerSet {
    /// An empty handler set: no init hook, no connect handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the init lifecycle hook.
    pub fn with_init<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&SessionContext) -> std::result::Result<(), HandlerError> + Send + 'static,
    {
        self.init = Some(Box::new(hook));
        self
    }

    /// Register the connect handler, which also advertises the `connect`
    /// capability.
    pub fn with_connect<F>(mut self, handler: F) -> Self
    where
        F: FnMut(ConnectParams<'_>) -> std::result::Result<String, HandlerError> + Send + 'static,
    {
        self.connect = Some(Box::new(handler));
        self
    }

    /// Whether a connect handler is registered.
    pub fn has_connect(&self) -> bool {
        self.connect.is_some()
    }
}

impl fmt::Debug for HandlerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerSet")
            .field("init", &self.init.is_some())
            .field("connect", &self.connect.is_some())
            .finish()
    }
}

//! Capability advertisement, computed once per session.

use crate::handlers::HandlerSet;

/// The set of protocol capabilities this helper advertises.
///
/// `option` is always present; `connect` is present if and only if a connect
/// handler was registered. Ordering is significant and fixed: `option`
/// before `connect`. Capabilities are not re-negotiated, so the rendered
/// advertisement is computed once at startup and reused for the life of the
/// process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilitySet {
    connect: bool,
}

impl CapabilitySet {
    /// Compute the set from which optional handlers are registered.
    pub fn from_handlers(handlers: &HandlerSet) -> Self {
        Self {
            connect: handlers.has_connect(),
        }
    }

    /// Return `true` if the named capability is advertised.
    pub fn contains(&self, name: &str) -> bool {
        match name {
            "option" => true,
            "connect" => self.connect,
            _ => false,
        }
    }

    /// Render the response to a `capabilities` command: the newline-joined
    /// capability list followed by a blank line.
    pub fn advertisement(&self) -> String {
        let mut names = vec!["option"];
        if self.connect {
            names.push("connect");
        }
        let mut out = names.join("\n");
        out.push_str("\n\n");
        out
    }
}

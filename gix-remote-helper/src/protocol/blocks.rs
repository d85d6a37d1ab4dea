//! Grouping logical lines into command blocks.

use crate::{Error, Result};

/// Commands whose entire request fits on a single line and that are never
/// followed by continuation lines. Everything else is buffered until a blank
/// line terminates the block.
pub const ONE_LINE_COMMANDS: &[&str] = &["capabilities", "option"];

/// A completed command block: one or more raw lines, in arrival order.
pub type Block = Vec<String>;

/// State machine grouping lines into command blocks.
///
/// Transition table, per incoming line:
/// - blank line: terminates the pending block and emits it; a blank with
///   nothing pending is a no-op.
/// - line starting with a [one-line command](ONE_LINE_COMMANDS): emitted
///   immediately as its own block; arriving mid-assembly it is a framing
///   violation, since merging would desynchronize the channel.
/// - anything else: appended to the pending block.
///
/// Emission always drains the pending buffer, so the next line after an
/// emission starts a fresh block.
#[derive(Debug, Default)]
pub struct BlockAssembler {
    pending: Vec<String>,
}

impl BlockAssembler {
    /// An assembler with no pending lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the state machine by one line, returning a block if this line
    /// completed one.
    pub fn push(&mut self, line: &str) -> Result<Option<Block>> {
        if line.is_empty() {
            if self.pending.is_empty() {
                // A stray blank line between blocks.
                return Ok(None);
            }
            let block = std::mem::take(&mut self.pending);
            tracing::trace!(lines = block.len(), "block completed by blank line");
            return Ok(Some(block));
        }

        if ONE_LINE_COMMANDS.iter().any(|command| line.starts_with(command)) {
            if !self.pending.is_empty() {
                return Err(Error::Framing { line: line.to_owned() });
            }
            tracing::trace!(?line, "one-line command");
            return Ok(Some(vec![line.to_owned()]));
        }

        self.pending.push(line.to_owned());
        tracing::trace!(?line, pending = self.pending.len(), "buffering line");
        Ok(None)
    }
}

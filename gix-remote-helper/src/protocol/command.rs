//! Typed commands parsed from completed blocks.

use crate::{Error, Result};

use super::blocks::Block;

/// A single remote-helper command, as sent by Git.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `capabilities` — list what this helper supports.
    Capabilities,
    /// `option <key> <value>` — set a transport option.
    Option {
        /// The option name; empty if absent on the wire.
        key: String,
        /// The option value; empty if absent on the wire.
        value: String,
    },
    /// `connect <service>` — open a bidirectional channel to the named git
    /// service.
    Connect {
        /// The service to connect to, e.g. `git-upload-pack`.
        git_command: String,
    },
}

impl Command {
    /// Map a completed block onto a typed command.
    ///
    /// Only the first line selects the variant; for `option` the remaining
    /// buffered lines (if any) are not consulted. Pure, no side effects.
    pub fn parse(block: &Block) -> Result<Self> {
        let first = match block.first() {
            Some(line) if !line.is_empty() => line,
            _ => {
                return Err(Error::UnknownCommand {
                    line: block.first().cloned().unwrap_or_default(),
                })
            }
        };

        if first.starts_with("capabilities") {
            return Ok(Command::Capabilities);
        }
        if first.starts_with("option") {
            let mut tokens = first.split(' ');
            tokens.next();
            return Ok(Command::Option {
                key: tokens.next().unwrap_or_default().to_owned(),
                value: tokens.next().unwrap_or_default().to_owned(),
            });
        }
        if first.starts_with("connect") {
            return match first.split(' ').nth(1) {
                Some(service) if !service.is_empty() => Ok(Command::Connect {
                    git_command: service.to_owned(),
                }),
                _ => Err(Error::MissingService),
            };
        }

        Err(Error::UnknownCommand { line: first.clone() })
    }
}

//! The remote-helper wire protocol, stage by stage.
//!
//! Data flows strictly one way: raw bytes are split into [lines], lines are
//! assembled into command [blocks], blocks are parsed into a typed
//! [`Command`](command::Command), and the engine dispatches each command in
//! arrival order. Each stage is independent of input chunk boundaries.

pub mod blocks;
pub mod capabilities;
pub mod command;
pub mod lines;

pub use blocks::{Block, BlockAssembler, ONE_LINE_COMMANDS};
pub use capabilities::CapabilitySet;
pub use command::Command;
pub use lines::LineSplitter;

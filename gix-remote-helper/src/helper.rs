//! The engine: strictly sequential dispatch over stdin/stdout-style streams.

use std::io::{Read, Write};

use crate::{
    error::{Error, Result},
    handlers::{ConnectParams, HandlerSet},
    protocol::{blocks::BlockAssembler, capabilities::CapabilitySet, command::Command, lines::LineSplitter},
    session::SessionContext,
};

/// The remote-helper protocol engine.
///
/// Owns one session's worth of state: the immutable [`SessionContext`], the
/// caller's [`HandlerSet`], and the capability advertisement computed once at
/// construction. [`serve`](Self::serve) then runs the whole exchange as a
/// single blocking loop — Git treats the channel as a synchronous half-duplex
/// RPC pipe, so commands are dispatched one at a time, in block-completion
/// order, and each response is fully written before the next command is
/// parsed.
pub struct Helper {
    session: SessionContext,
    handlers: HandlerSet,
    capabilities: CapabilitySet,
    advertisement: String,
}

impl Helper {
    /// Create an engine for one protocol session.
    ///
    /// The capability advertisement is fixed here, from which handlers are
    /// registered; it is not re-negotiated later.
    pub fn new(session: SessionContext, handlers: HandlerSet) -> Self {
        let capabilities = CapabilitySet::from_handlers(&handlers);
        let advertisement = capabilities.advertisement();
        tracing::debug!(
            remote_name = %session.remote_name,
            remote_url = %session.remote_url.display(),
            ?capabilities,
            "helper ready"
        );
        Self {
            session,
            handlers,
            capabilities,
            advertisement,
        }
    }

    /// The session this engine was built for.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// The capabilities this engine advertises.
    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    /// Run the protocol until `input` is exhausted.
    ///
    /// The `init` hook, if registered, is run to completion before the first
    /// byte of input is read. Every error is fatal for the session; callers
    /// are expected to exit non-zero, which is how Git learns a helper
    /// misbehaved. Diagnostics never go to `output` — that stream carries
    /// only protocol responses.
    pub fn serve<R: Read, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        if let Some(init) = self.handlers.init.as_mut() {
            init(&self.session).map_err(Error::Init)?;
        }

        let mut splitter = LineSplitter::new();
        let mut assembler = BlockAssembler::new();
        let mut chunk = [0u8; 8192];
        loop {
            let read = input.read(&mut chunk)?;
            if read == 0 {
                break;
            }
            tracing::trace!(bytes = read, "input chunk");
            for line in splitter.feed(&chunk[..read]) {
                self.step(&line, &mut assembler, &mut output)?;
            }
        }

        // The fragment after the last newline. Empty when the input ended
        // with a newline, in which case it is the blank that terminates a
        // still-pending block at clean EOF.
        let tail = splitter.finish();
        self.step(&tail, &mut assembler, &mut output)?;
        Ok(())
    }

    fn step<W: Write>(&mut self, line: &str, assembler: &mut BlockAssembler, output: &mut W) -> Result<()> {
        if let Some(block) = assembler.push(line)? {
            let command = Command::parse(&block)?;
            let response = self.dispatch(command)?;
            tracing::debug!(bytes = response.len(), "writing response");
            output.write_all(response.as_bytes())?;
            output.flush()?;
        }
        Ok(())
    }

    /// Route one typed command to its response.
    ///
    /// - `capabilities`: the precomputed advertisement, verbatim.
    /// - `option`: always `unsupported` — the engine implements no
    ///   configurable options.
    /// - `connect`: the registered handler's response; requires a handler
    ///   even though correct capability advertisement makes the bare case
    ///   unreachable from a well-behaved Git.
    pub fn dispatch(&mut self, command: Command) -> Result<String> {
        match command {
            Command::Capabilities => {
                tracing::debug!(advertisement = %self.advertisement.escape_debug(), "capabilities");
                Ok(self.advertisement.clone())
            }
            Command::Option { key, value } => {
                tracing::debug!(%key, %value, "option reported unsupported");
                Ok("unsupported\n".into())
            }
            Command::Connect { git_command } => {
                let handler = self.handlers.connect.as_mut().ok_or(Error::NoConnectHandler)?;
                tracing::debug!(%git_command, "dispatching connect");
                handler(ConnectParams {
                    session: &self.session,
                    git_command: &git_command,
                })
                .map_err(Error::Connect)
            }
        }
    }
}

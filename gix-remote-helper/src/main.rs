//! `git-remote-exec`: a remote helper for `exec::<path>` URLs.
//!
//! Git invokes this binary as `git-remote-exec <remote-name> <url>` with
//! `GIT_DIR` set. The URL (helper prefix already removed by Git, any
//! remaining `<scheme>://` stripped here) is resolved under a configurable
//! remotes root, and `connect` requests are proxied to the named git service
//! binary against that path.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use gix_remote_helper::{connect, HandlerSet, Helper, Options, SessionContext};

#[derive(Debug, Parser)]
#[command(name = "git-remote-exec", version, about = "Git remote helper proxying connect to local git services")]
struct Args {
    /// Directory remote URLs are resolved under.
    #[arg(long, env = "GIT_REMOTE_HELPER_ROOT", default_value = ".")]
    remotes_root: PathBuf,

    /// The remote name, or the URL when the remote is unnamed. Supplied by git.
    remote_name: String,

    /// The remote URL without the leading helper prefix. Supplied by git.
    remote_url: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Git owns stdout as the protocol stream; all diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let options = Options::new(args.remotes_root);
    let session = SessionContext::from_parts(
        std::env::var_os("GIT_DIR"),
        [args.remote_name, args.remote_url],
        &std::env::current_dir()?,
        &options,
    )?;

    let handlers = HandlerSet::new().with_connect(connect::spawn);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Helper::new(session, handlers).serve(stdin.lock(), stdout.lock())?;
    Ok(())
}

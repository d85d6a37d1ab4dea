//! A ready-made connect handler that proxies to a local git service binary.

use std::process;

use bstr::ByteSlice;

use crate::handlers::{ConnectParams, HandlerError};

/// Run `<git_command> <remote_url>` and return its captured standard output.
///
/// This is the simplest useful connect implementation: the named service
/// (e.g. `git-upload-pack`) is spawned against the resolved remote path and
/// its output is handed back to the engine verbatim. A non-zero exit is a
/// handler failure carrying the service's stderr.
///
/// Protocol note: `connect` expects the response to open with a blank line
/// before the service's byte stream; services like `git-upload-pack` write
/// their advertisement themselves, so no framing is added here.
pub fn spawn(params: ConnectParams<'_>) -> std::result::Result<String, HandlerError> {
    tracing::debug!(
        git_command = params.git_command,
        remote_url = %params.session.remote_url.display(),
        "spawning connect service"
    );

    let output = process::Command::new(params.git_command)
        .arg(&params.session.remote_url)
        .output()?;

    if !output.status.success() {
        let stderr = output.stderr.to_str_lossy();
        return Err(format!(
            "'{}' failed with {}: {}",
            params.git_command,
            output.status,
            stderr.trim_end()
        )
        .into());
    }

    Ok(output.stdout.to_str_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionContext;

    fn session(url: &str) -> SessionContext {
        SessionContext::new("/tmp/.git", "origin", url)
    }

    #[test]
    fn captures_stdout_of_the_service() {
        let session = session("hello-remote");
        let output = spawn(ConnectParams {
            session: &session,
            git_command: "echo",
        })
        .unwrap();
        assert_eq!(output, "hello-remote\n");
    }

    #[test]
    fn missing_service_binary_is_a_handler_error() {
        let session = session("irrelevant");
        let err = spawn(ConnectParams {
            session: &session,
            git_command: "definitely-not-a-real-git-service",
        })
        .unwrap_err();
        assert!(err.to_string().contains("No such file") || err.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn non_zero_exit_is_a_handler_error() {
        let session = session("irrelevant");
        let err = spawn(ConnectParams {
            session: &session,
            git_command: "false",
        })
        .unwrap_err();
        assert!(err.to_string().contains("'false' failed"));
    }
}

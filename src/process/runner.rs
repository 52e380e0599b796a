// astris-build: AdAstris Engine Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()
//!   build_command()   args, stdin closed, stdout/stderr piped
//!   spawn()           SpawnFailed on error
//!   read_stream() x2  stdout -> info!, stderr -> warn!
//!   wait()
//!   exit code 0?
//!     no  --> ProcessError::NonZeroExit
//!     yes --> ProcessOutput
//! ```

use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};

use super::builder::{ProcessBuilder, ProcessOutput};
use crate::error::{ProcessError, Result};

#[derive(Debug, Clone, Copy)]
enum StreamKind {
    Stdout,
    Stderr,
}

impl ProcessBuilder {
    /// Spawns the process, forwards its output to the log and waits for it.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::SpawnFailed` if the process cannot be started and
    /// `ProcessError::NonZeroExit` if it exits with a non-zero code.
    pub async fn run(self) -> Result<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();
        debug!(cmd = %cmd_line, "exec");

        let mut child = self
            .build_command()
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let stdout = child
            .stdout
            .take()
            .map(|s| spawn_reader(s, &name, StreamKind::Stdout));
        let stderr = child
            .stderr
            .take()
            .map(|s| spawn_reader(s, &name, StreamKind::Stderr));

        let status = child.wait().await.map_err(|source| ProcessError::SpawnFailed {
            command: cmd_line.clone(),
            source,
        })?;
        join_reader(stdout).await;
        join_reader(stderr).await;

        let output = ProcessOutput::new(status.code().unwrap_or(-1));
        if output.exit_code() != 0 {
            return Err(ProcessError::NonZeroExit {
                command: name,
                code: output.exit_code(),
            }
            .into());
        }

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }

    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());
        command.stdin(Stdio::null());
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());
        command.kill_on_drop(true);
        command
    }
}

fn spawn_reader<R>(stream: R, name: &str, kind: StreamKind) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let name = name.to_string();
    tokio::spawn(async move { read_stream(stream, &name, kind).await })
}

async fn join_reader(handle: Option<JoinHandle<()>>) {
    if let Some(handle) = handle {
        let _ = handle.await;
    }
}

async fn read_stream<R>(stream: R, name: &str, kind: StreamKind)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(stream).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match kind {
                StreamKind::Stdout => info!(process = %name, "{line}"),
                StreamKind::Stderr => warn!(process = %name, "{line}"),
            },
            Ok(None) => break,
            Err(e) => {
                warn!(process = %name, stream = ?kind, error = %e, "failed to read process output");
                break;
            }
        }
    }
}

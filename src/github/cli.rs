//! `gh api` command builder
//!
//! Constructs `std::process::Command` values for the GitHub CLI and runs
//! them, returning stdout. The CLI owns authentication and host selection.

use std::io::ErrorKind;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use tokio::process::Command as TokioCommand;

/// Options shared by every `gh api` invocation
#[derive(Debug, Clone)]
pub struct ApiOptions {
    /// Program to run (usually `gh`)
    pub binary: String,
    /// Value for `--cache` (e.g. `60m`); empty disables the flag
    pub cache: String,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            binary: "gh".to_string(),
            cache: "60m".to_string(),
        }
    }
}

/// Build a `gh api` command for `path`, optionally filtered with `--jq`.
///
/// Argument order is `api [--cache <ttl>] <path> [--jq <filter>]`.
#[must_use]
pub fn build_api_command(path: &str, jq: Option<&str>, options: &ApiOptions) -> Command {
    let mut cmd = Command::new(&options.binary);
    cmd.arg("api");

    if !options.cache.is_empty() {
        cmd.arg("--cache").arg(&options.cache);
    }

    cmd.arg(path);

    if let Some(filter) = jq {
        cmd.arg("--jq").arg(filter);
    }

    cmd
}

/// Run a command to completion and return its stdout.
///
/// A missing binary and a non-zero exit are both errors; stderr is
/// included in the latter.
pub async fn run_for_stdout(cmd: Command) -> Result<String> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    let output = match TokioCommand::from(cmd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
    {
        Ok(output) => output,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            bail!("could not find {program}. Is it installed? error: {e}")
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to spawn {program}")),
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let code = output
            .status
            .code()
            .map_or_else(|| "unknown".to_string(), |c| c.to_string());
        bail!(
            "failed to run {program}: exit code {code}, stderr: {}",
            stderr.trim()
        );
    }

    String::from_utf8(output.stdout).with_context(|| format!("{program} produced non-UTF-8 output"))
}

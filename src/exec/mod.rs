//! External Command Execution
//!
//! Every interaction with the tape drive goes through one of the three
//! utilities (`mt`, `sg_logs`, `sg_read_attr`). This module owns the single
//! place where they are launched.

use crate::error::{Result, RustLtouError};
use async_trait::async_trait;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;
use tracing::{debug, info};

mod scope;

#[cfg(test)]
pub(crate) mod mock;

pub use scope::{CancelHandle, ExecScope};

/// Launches a program and collects its combined output.
///
/// Implementations return stdout followed by stderr on a zero exit status,
/// `RustLtouError::ExitStatus` (carrying the same output) on a non-zero one
/// and `RustLtouError::Launch` when the program could not be started.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> Result<Vec<u8>>;
}

/// Runs programs on the host with `tokio::process`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcess;

#[async_trait]
impl ProcessRunner for SystemProcess {
    async fn run(&self, program: &str, args: &[String]) -> Result<Vec<u8>> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| RustLtouError::Launch {
                program: program.to_string(),
                source,
            })?;

        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);

        if output.status.success() {
            Ok(combined)
        } else {
            Err(RustLtouError::ExitStatus {
                program: program.to_string(),
                code: output.status.code(),
                output: String::from_utf8_lossy(&combined).into_owned(),
            })
        }
    }
}

/// Single-attempt command execution bounded by an [`ExecScope`].
#[derive(Clone)]
pub struct CommandRunner {
    process: Arc<dyn ProcessRunner>,
    trace: bool,
}

impl std::fmt::Debug for CommandRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRunner")
            .field("trace", &self.trace)
            .finish_non_exhaustive()
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new(Arc::new(SystemProcess), false)
    }
}

impl CommandRunner {
    pub fn new(process: Arc<dyn ProcessRunner>, trace: bool) -> Self {
        Self { process, trace }
    }

    pub fn system(trace: bool) -> Self {
        Self::new(Arc::new(SystemProcess), trace)
    }

    /// Run `program` once and return its combined output. Errors from the
    /// process layer are returned unchanged.
    pub async fn run(&self, scope: &ExecScope, program: &str, args: &[String]) -> Result<Vec<u8>> {
        debug!("Running {} {:?}", program, args);
        if self.trace {
            info!("Lto Utils Wrapper: Run: {} {:?}", program, args);
        }

        let result = scope.bound(program, self.process.run(program, args)).await;

        if self.trace {
            match &result {
                Ok(output) => info!("Output:\n{}", String::from_utf8_lossy(output)),
                Err(RustLtouError::ExitStatus { output, .. }) => info!("Output:\n{}", output),
                Err(e) => info!("No output: {}", e),
            }
        }

        result
    }

    /// Same as [`CommandRunner::run`], decoding the output as lossy UTF-8.
    pub async fn run_text(&self, scope: &ExecScope, program: &str, args: &[String]) -> Result<String> {
        let output = self.run(scope, program, args).await?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

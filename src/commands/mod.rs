//! Command Handlers Module
//!
//! This module contains handlers for all CLI subcommands.

pub mod count;
pub mod info;
pub mod position;
pub mod space;
pub mod status;
pub mod utilities;

use rust_ltou::config::Config;
use rust_ltou::drive::LtoDrive;
use rust_ltou::error::Result;
use rust_ltou::exec::ExecScope;
use std::time::Duration;
use tracing::warn;

/// Settings shared by every subcommand of one CLI run.
pub struct Session {
    pub config: Config,
    timeout: Option<Duration>,
}

impl Session {
    pub fn new(config: Config, timeout: Option<Duration>) -> Self {
        Self { config, timeout }
    }

    /// Scope for ordinary commands: `--timeout`, else the configured
    /// command timeout, else unbounded. Ctrl-C cancels it.
    pub fn scope(&self) -> ExecScope {
        cancel_on_ctrl_c(ExecScope::timeout_opt(
            self.timeout.or_else(|| self.config.command_timeout()),
        ))
    }

    /// Scope for the full-tape file count.
    pub fn count_scope(&self) -> ExecScope {
        cancel_on_ctrl_c(ExecScope::timeout(
            self.timeout.unwrap_or_else(|| self.config.count_timeout()),
        ))
    }

    /// Open the drive. Undiscovered utilities are only warned about here;
    /// the operation needing them fails later with a precise error.
    pub async fn open(&self, device: &str) -> Result<LtoDrive> {
        let (drive, err) = LtoDrive::open(device, self.config.drive_options())
            .await?
            .into_parts();
        if let Some(e) = err {
            warn!("Some utilities are unavailable: {}", e);
        }
        Ok(drive)
    }
}

fn cancel_on_ctrl_c(scope: ExecScope) -> ExecScope {
    let (scope, handle) = scope.with_cancel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling tape operation");
            handle.cancel();
        }
    });
    scope
}

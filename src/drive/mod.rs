//! LTO No-Rewind Tape Drive
//!
//! [`LtoDrive`] binds a no-rewind tape device file to the three utilities
//! used to control it. The handle keeps no session state: position and
//! readiness are queried from the drive on every call.

use crate::error::{Partial, Result, RustLtouError};
use crate::exec::{CommandRunner, ExecScope, ProcessRunner, SystemProcess};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub mod constants;
pub mod extract;
pub mod locator;
pub mod platform;
pub mod types;
mod commands;

pub use locator::{Utility, UtilityOverrides, UtilityPaths};
pub use platform::NamingRule;
pub use types::{CapacityField, CapacityLog, MediumType, MtOp};

/// Construction settings for [`LtoDrive`].
#[derive(Debug, Clone)]
pub struct DriveOptions {
    /// Log every utility invocation and its raw output.
    pub trace_commands: bool,
    pub discovery_timeout: Duration,
    pub utilities: UtilityOverrides,
}

impl Default for DriveOptions {
    fn default() -> Self {
        Self {
            trace_commands: false,
            discovery_timeout: constants::DISCOVERY_TIMEOUT,
            utilities: UtilityOverrides::default(),
        }
    }
}

/// Handle to one physical LTO drive behind a no-rewind device file.
#[derive(Debug, Clone)]
pub struct LtoDrive {
    device_file: String,
    /// Utility paths; may be reassigned by the caller after construction.
    pub utilities: UtilityPaths,
    runner: CommandRunner,
}

impl LtoDrive {
    /// Open `device` on the host platform, discovering the utilities.
    ///
    /// A missing device file, a rewinding device or an unsupported platform
    /// are fatal. Utilities that cannot be found are reported in the
    /// returned [`Partial`] with their path left empty.
    pub async fn open(device: &str, options: DriveOptions) -> Result<Partial<LtoDrive>> {
        Self::open_with(device, options, Arc::new(SystemProcess)).await
    }

    pub async fn open_with(
        device: &str,
        options: DriveOptions,
        process: Arc<dyn ProcessRunner>,
    ) -> Result<Partial<LtoDrive>> {
        info!("Opening tape drive: {}", device);

        std::fs::metadata(device).map_err(|source| RustLtouError::DeviceStat {
            path: device.to_string(),
            source,
        })?;
        platform::check_no_rewind(Path::new(device), std::env::consts::OS)?;

        let runner = CommandRunner::new(process, options.trace_commands);
        let discovered =
            locator::discover_all(&runner, &options.utilities, options.discovery_timeout).await;
        for e in &discovered.errors {
            warn!("Utility discovery: {}", e);
        }

        let drive = LtoDrive {
            device_file: device.to_string(),
            utilities: discovered.value,
            runner,
        };
        debug!("Drive ready: {:?}", drive.utilities);
        Ok(Partial::new(drive, discovered.errors))
    }

    /// Build a handle from known parts without touching the filesystem.
    pub fn from_parts(device: &str, utilities: UtilityPaths, runner: CommandRunner) -> Self {
        Self {
            device_file: device.to_string(),
            utilities,
            runner,
        }
    }

    pub fn device_file(&self) -> &str {
        &self.device_file
    }

    /// Fail unless a readable data cartridge is loaded. Every positioning
    /// command goes through here first.
    pub async fn require_data_cartridge(&self, scope: &ExecScope) -> Result<()> {
        match self.has_data_cartridge(scope).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(RustLtouError::NoDataCartridge { source: None }),
            Err(e) => Err(RustLtouError::NoDataCartridge {
                source: Some(Box::new(e)),
            }),
        }
    }

    async fn run_utility(&self, scope: &ExecScope, utility: Utility, args: &[String]) -> Result<String> {
        let program = self.utilities.get(utility);
        if program.is_empty() {
            return Err(RustLtouError::UtilityNotFound(utility));
        }
        self.runner.run_text(scope, program, args).await
    }

    /// Issue one `mt` operation once a data cartridge is confirmed.
    pub async fn exec_mt(&self, scope: &ExecScope, op: MtOp) -> Result<String> {
        self.require_data_cartridge(scope).await?;
        debug!("mt {}", op.name());
        self.run_utility(scope, Utility::Mt, &op.to_args(&self.device_file))
            .await
    }
}

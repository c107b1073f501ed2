//! Discovery of the external tape utilities.

use super::constants::{
    MT_CANDIDATES, PROBE_ARG, SG_LOGS_CANDIDATES, SG_READ_ATTR_CANDIDATES,
};
use crate::error::{Partial, Result, RustLtouError};
use crate::exec::{CommandRunner, ExecScope};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utility {
    Mt,
    SgLogs,
    SgReadAttr,
}

impl Utility {
    pub const ALL: [Utility; 3] = [Utility::Mt, Utility::SgLogs, Utility::SgReadAttr];

    pub fn name(&self) -> &'static str {
        match self {
            Utility::Mt => "mt",
            Utility::SgLogs => "sg_logs",
            Utility::SgReadAttr => "sg_read_attr",
        }
    }

    /// Most to least preferred.
    pub fn candidates(&self) -> &'static [&'static str] {
        match self {
            Utility::Mt => MT_CANDIDATES,
            Utility::SgLogs => SG_LOGS_CANDIDATES,
            Utility::SgReadAttr => SG_READ_ATTR_CANDIDATES,
        }
    }
}

impl fmt::Display for Utility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved utility paths; an empty string means "not discovered".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityPaths {
    pub mt: String,
    pub sg_logs: String,
    pub sg_read_attr: String,
}

impl UtilityPaths {
    pub fn get(&self, utility: Utility) -> &str {
        match utility {
            Utility::Mt => &self.mt,
            Utility::SgLogs => &self.sg_logs,
            Utility::SgReadAttr => &self.sg_read_attr,
        }
    }

    pub fn set(&mut self, utility: Utility, path: String) {
        match utility {
            Utility::Mt => self.mt = path,
            Utility::SgLogs => self.sg_logs = path,
            Utility::SgReadAttr => self.sg_read_attr = path,
        }
    }
}

/// Manually configured utility paths, skipping discovery where present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilityOverrides {
    pub mt: Option<String>,
    pub sg_logs: Option<String>,
    pub sg_read_attr: Option<String>,
}

impl UtilityOverrides {
    pub fn get(&self, utility: Utility) -> Option<&str> {
        match utility {
            Utility::Mt => self.mt.as_deref(),
            Utility::SgLogs => self.sg_logs.as_deref(),
            Utility::SgReadAttr => self.sg_read_attr.as_deref(),
        }
    }
}

/// Return the first candidate that can be launched.
///
/// Only a launch failure rules a candidate out. One that starts and then
/// exits non-zero (e.g. it rejects the probe flag), outlives the deadline
/// or is cancelled was still invocable and is therefore found.
pub async fn locate(
    runner: &CommandRunner,
    utility: Utility,
    candidates: &[&str],
    probe_arg: &str,
    timeout: Duration,
) -> Result<String> {
    let args = [probe_arg.to_string()];
    for candidate in candidates {
        let scope = ExecScope::timeout(timeout);
        match runner.run(&scope, candidate, &args).await {
            Ok(_)
            | Err(RustLtouError::ExitStatus { .. })
            | Err(RustLtouError::TimedOut { .. })
            | Err(RustLtouError::Cancelled { .. }) => {
                debug!("Found {} at {}", utility, candidate);
                return Ok(candidate.to_string());
            }
            Err(e) => debug!("Probe of {} failed: {}", candidate, e),
        }
    }
    Err(RustLtouError::UtilityNotFound(utility))
}

/// Probe each utility independently; failures do not stop the others.
pub async fn discover_all(
    runner: &CommandRunner,
    overrides: &UtilityOverrides,
    timeout: Duration,
) -> Partial<UtilityPaths> {
    let mut paths = UtilityPaths::default();
    let mut errors = Vec::new();

    for utility in Utility::ALL {
        if let Some(path) = overrides.get(utility) {
            info!("Using configured {}: {}", utility, path);
            paths.set(utility, path.to_string());
            continue;
        }
        match locate(runner, utility, utility.candidates(), PROBE_ARG, timeout).await {
            Ok(path) => paths.set(utility, path),
            Err(e) => errors.push(e),
        }
    }

    Partial::new(paths, errors)
}

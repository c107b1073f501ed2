//! Drive status through `mt status`.

use crate::drive::constants::MT_FILE_NUMBER_LABEL;
use crate::drive::extract;
use crate::drive::{LtoDrive, MtOp};
use crate::error::{Result, ResultExt, RustLtouError};
use crate::exec::ExecScope;

impl LtoDrive {
    /// Confirm the drive answers `mt status`. This does not prove the
    /// medium is ready for I/O.
    pub async fn check_device(&self, scope: &ExecScope) -> Result<()> {
        self.exec_mt(scope, MtOp::Status)
            .await
            .context("device check failed")?;
        Ok(())
    }

    /// The file the head is currently in, counted from BOT. This is not the
    /// number of files on the tape.
    pub async fn current_file_number(&self, scope: &ExecScope) -> Result<u64> {
        let output = self
            .exec_mt(scope, MtOp::Status)
            .await
            .context("failed to get mt cmd output")?;
        parse_file_number(&output)
    }
}

/// Find `File number=<n>` among the comma separated sub-fields of a status
/// report.
pub fn parse_file_number(output: &str) -> Result<u64> {
    let field = output
        .lines()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .find(|field| field.starts_with(MT_FILE_NUMBER_LABEL))
        .ok_or_else(|| RustLtouError::field_missing(MT_FILE_NUMBER_LABEL))?;

    extract::equals_uint(field, 0).context("can not parse output of mt")
}

//! MAM attribute access through `sg_read_attr`.

use crate::drive::constants::attributes::{MEDIUM_SERIAL_NUMBER, MEDIUM_TYPE};
use crate::drive::extract;
use crate::drive::{LtoDrive, MediumType, Utility};
use crate::error::{Result, ResultExt, RustLtouError};
use crate::exec::ExecScope;
use tracing::debug;

impl LtoDrive {
    /// Read one attribute by ID (`0x0408` style) and return its value token.
    pub async fn read_attribute(&self, id: &str, scope: &ExecScope) -> Result<String> {
        let args = [
            "-f".to_string(),
            id.to_string(),
            self.device_file().to_string(),
        ];
        let output = self
            .run_utility(scope, Utility::SgReadAttr, &args)
            .await
            .context("failed to get sg_read_attr cmd output")?;

        let line = extract::last_line(&output)
            .ok_or_else(|| RustLtouError::field_missing(format!("attribute {}", id)))?;
        let value = extract::colon_str(line)?;
        debug!("Attribute {} = {}", id, value);
        Ok(value.to_string())
    }

    /// Medium type attribute (0408h).
    pub async fn medium_type(&self, scope: &ExecScope) -> Result<MediumType> {
        let raw = self.read_attribute(MEDIUM_TYPE, scope).await?;
        let code = extract::parse_i64(&raw, 0).context("can not parse output of sg_read_attr")?;
        Ok(MediumType::from_code(code))
    }

    pub async fn has_data_cartridge(&self, scope: &ExecScope) -> Result<bool> {
        Ok(self.medium_type(scope).await?.is_data())
    }

    /// Medium serial number attribute (0401h). The medium type must be
    /// readable first.
    pub async fn medium_serial_number(&self, scope: &ExecScope) -> Result<String> {
        self.medium_type(scope)
            .await
            .context("can not get medium serial number")?;
        self.read_attribute(MEDIUM_SERIAL_NUMBER, scope)
            .await
            .context("can not get medium serial number")
    }
}

//! Tape positioning primitives. Each is one gated `mt` invocation.

use crate::drive::{LtoDrive, MtOp};
use crate::error::{Result, ResultExt};
use crate::exec::ExecScope;
use tracing::info;

impl LtoDrive {
    pub async fn rewind(&self, scope: &ExecScope) -> Result<()> {
        self.exec_mt(scope, MtOp::Rewind)
            .await
            .context("can not rewind the tape")?;
        Ok(())
    }

    /// Forward space `count` file marks.
    pub async fn fsf(&self, count: u32, scope: &ExecScope) -> Result<()> {
        self.exec_mt(scope, MtOp::Fsf(count)).await?;
        Ok(())
    }

    /// Backward space `count` file marks. The head stops on the BOT side of
    /// the last mark crossed.
    pub async fn bsf(&self, count: u32, scope: &ExecScope) -> Result<()> {
        self.exec_mt(scope, MtOp::Bsf(count)).await?;
        Ok(())
    }

    /// Backward space `count` file marks, then forward one, leaving the head
    /// at the start of a file.
    pub async fn bsfm(&self, count: u32, scope: &ExecScope) -> Result<()> {
        self.exec_mt(scope, MtOp::Bsfm(count)).await?;
        Ok(())
    }

    /// Write one file mark at the current position.
    pub async fn weof(&self, scope: &ExecScope) -> Result<()> {
        self.exec_mt(scope, MtOp::Weof).await?;
        Ok(())
    }

    pub async fn erase(&self, scope: &ExecScope) -> Result<()> {
        info!("Erasing tape in {}", self.device_file());
        self.exec_mt(scope, MtOp::Erase).await?;
        Ok(())
    }

    pub async fn eject(&self, scope: &ExecScope) -> Result<()> {
        info!("Ejecting tape from {}", self.device_file());
        self.exec_mt(scope, MtOp::Eject).await?;
        Ok(())
    }
}

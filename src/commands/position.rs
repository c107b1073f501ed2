//! Position Command Handlers
//!
//! Handles `position` and every subcommand that moves the tape.

use super::Session;
use rust_ltou::drive::LtoDrive;
use rust_ltou::error::{Result, RustLtouError};
use rust_ltou::exec::ExecScope;
use tracing::info;

/// A single tape movement requested from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Rewind,
    Next,
    Prev,
    Fsf(u32),
    Bsf(u32),
    Bsfm(u32),
    Seek(u32),
    Weof,
    Erase { force: bool },
    Eject,
}

impl Movement {
    /// Whether the head position is meaningful afterwards.
    fn reports_position(&self) -> bool {
        !matches!(self, Movement::Erase { .. } | Movement::Eject)
    }
}

pub async fn show(session: &Session, device: String) -> Result<()> {
    let drive = session.open(&device).await?;
    let file = drive.current_file_number(&session.scope()).await?;
    println!("📍 {}: file number {}", device, file);
    Ok(())
}

pub async fn execute(session: &Session, device: String, movement: Movement) -> Result<()> {
    if let Movement::Erase { force: false } = movement {
        return Err(RustLtouError::parameter_validation(
            "erase destroys all data after the current position; pass --force to proceed",
        ));
    }

    info!("Moving tape {}: {:?}", device, movement);
    let drive = session.open(&device).await?;
    let scope = session.scope();

    apply(&drive, movement, &scope).await?;

    if movement.reports_position() {
        let file = drive.current_file_number(&scope).await?;
        println!("✅ {:?} done, now at file number {}", movement, file);
    } else {
        println!("✅ {:?} done", movement);
    }
    Ok(())
}

async fn apply(drive: &LtoDrive, movement: Movement, scope: &ExecScope) -> Result<()> {
    match movement {
        Movement::Rewind => drive.rewind(scope).await,
        Movement::Next => drive.next_file(scope).await,
        Movement::Prev => drive.previous_file(scope).await,
        Movement::Fsf(count) => drive.fsf(count, scope).await,
        Movement::Bsf(count) => drive.bsf(count, scope).await,
        Movement::Bsfm(count) => drive.bsfm(count, scope).await,
        Movement::Seek(file) => drive.seek_file(file, scope).await,
        Movement::Weof => drive.weof(scope).await,
        Movement::Erase { .. } => drive.erase(scope).await,
        Movement::Eject => drive.eject(scope).await,
    }
}

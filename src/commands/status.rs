//! Status Command Handler
//!
//! Handles the `status` subcommand for checking that the drive responds.

use super::Session;
use rust_ltou::error::Result;
use tracing::{error, info};

pub async fn execute(session: &Session, device: String) -> Result<()> {
    info!("Checking device status: {}", device);

    let drive = session.open(&device).await?;
    let scope = session.scope();

    match drive.check_device(&scope).await {
        Ok(()) => {
            println!("✅ Drive {} is responding", device);
            Ok(())
        }
        Err(e) => {
            error!("Device check failed: {}", e.report());
            println!("❌ Drive {} did not respond: {}", device, e.report());
            Err(e)
        }
    }
}

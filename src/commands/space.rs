//! Space Command Handler
//!
//! Handles the `space` subcommand for querying tape capacity information.

use super::Session;
use rust_ltou::display;
use rust_ltou::error::Result;
use tracing::{info, warn};

pub async fn execute(session: &Session, device: String, json: bool) -> Result<()> {
    info!("Getting tape space information: {}", device);

    let drive = session.open(&device).await?;
    let (log, err) = drive.capacity_log(&session.scope()).await.into_parts();

    if json {
        let text = serde_json::to_string_pretty(&log)?;
        println!("{}", text);
    } else {
        display::display_capacity(&device, &log);
    }

    match err {
        Some(e) => {
            warn!("Capacity log incomplete: {}", e.report());
            Err(e)
        }
        None => Ok(()),
    }
}

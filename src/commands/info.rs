//! Info Command Handler
//!
//! Handles the `info` subcommand: medium type and serial number.

use super::Session;
use rust_ltou::display;
use rust_ltou::drive::MediumType;
use rust_ltou::error::Result;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Serialize)]
struct MediumInfo<'a> {
    device: &'a str,
    medium_type: Option<MediumType>,
    serial_number: Option<String>,
}

pub async fn execute(session: &Session, device: String, json: bool) -> Result<()> {
    info!("Getting medium information: {}", device);

    let drive = session.open(&device).await?;
    let scope = session.scope();

    let medium_type = drive.medium_type(&scope).await;
    let serial_number = match &medium_type {
        Ok(_) => match drive.medium_serial_number(&scope).await {
            Ok(serial) => Some(serial),
            Err(e) => {
                warn!("Serial number unavailable: {}", e.report());
                None
            }
        },
        Err(_) => None,
    };

    let info = MediumInfo {
        device: &device,
        medium_type: medium_type.as_ref().ok().copied(),
        serial_number,
    };

    if json {
        let text = serde_json::to_string_pretty(&info)?;
        println!("{}", text);
    } else {
        display::display_medium(&device, info.medium_type, info.serial_number.as_deref());
    }

    medium_type.map(|_| ())
}

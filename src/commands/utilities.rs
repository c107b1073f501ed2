//! Utilities Command Handler
//!
//! Handles the `utilities` subcommand: show which tools would be used.

use super::Session;
use rust_ltou::display;
use rust_ltou::drive::locator;
use rust_ltou::error::Result;
use rust_ltou::exec::CommandRunner;
use tracing::{info, warn};

pub async fn execute(session: &Session) -> Result<()> {
    info!("Discovering tape utilities");

    let options = session.config.drive_options();
    let runner = CommandRunner::system(options.trace_commands);
    let (paths, err) =
        locator::discover_all(&runner, &options.utilities, options.discovery_timeout)
            .await
            .into_parts();

    display::display_utilities(&paths);

    match err {
        Some(e) => {
            warn!("{}", e);
            println!("💡 Install sg3-utils / mt-st or set the paths in the configuration file");
            Err(e)
        }
        None => Ok(()),
    }
}

mod commands;

use crate::commands::position::Movement;
use crate::commands::Session;
use rust_ltou::cli::{Cli, Commands};
use rust_ltou::config::Config;
use rust_ltou::error::Result;
use rust_ltou::logger;
use std::time::Duration;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse_args();

    // Initialize logging system
    logger::init(args.verbose)?;

    debug!("RustLTOU CLI starting");

    match run(args).await {
        Ok(_) => {
            info!("Operation completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Operation failed: {}", e.report());
            std::process::exit(1);
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    if args.trace {
        config.trace_commands = true;
    }
    let session = Session::new(config, args.timeout.map(Duration::from_secs));

    match args.command {
        Commands::Utilities => commands::utilities::execute(&session).await,
        Commands::Status { device } => commands::status::execute(&session, device).await,
        Commands::Info { device, json } => commands::info::execute(&session, device, json).await,
        Commands::Space { device, json } => commands::space::execute(&session, device, json).await,
        Commands::Position { device } => commands::position::show(&session, device).await,
        Commands::Count { device } => commands::count::execute(&session, device).await,
        Commands::Rewind { device } => move_tape(&session, device, Movement::Rewind).await,
        Commands::Next { device } => move_tape(&session, device, Movement::Next).await,
        Commands::Prev { device } => move_tape(&session, device, Movement::Prev).await,
        Commands::Fsf { device, count } => move_tape(&session, device, Movement::Fsf(count)).await,
        Commands::Bsf { device, count } => move_tape(&session, device, Movement::Bsf(count)).await,
        Commands::Bsfm { device, count } => {
            move_tape(&session, device, Movement::Bsfm(count)).await
        }
        Commands::Seek { device, file } => move_tape(&session, device, Movement::Seek(file)).await,
        Commands::Weof { device } => move_tape(&session, device, Movement::Weof).await,
        Commands::Erase { device, force } => {
            move_tape(&session, device, Movement::Erase { force }).await
        }
        Commands::Eject { device } => move_tape(&session, device, Movement::Eject).await,
    }
}

async fn move_tape(session: &Session, device: String, movement: Movement) -> Result<()> {
    commands::position::execute(session, device, movement).await
}

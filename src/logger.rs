use crate::error::{Result, RustLtouError};
use tracing_subscriber::{fmt, EnvFilter, prelude::*};
use std::io;

pub fn init(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| RustLtouError::config(format!("logger already initialized: {}", e)))?;

    Ok(())
}

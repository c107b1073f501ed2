//! Count Command Handler
//!
//! Handles the `count` subcommand. Walks the whole tape file by file, so it
//! shows a spinner and runs under the count deadline.

use super::Session;
use indicatif::{ProgressBar, ProgressStyle};
use rust_ltou::error::{Result, RustLtouError};
use rust_ltou::utils;
use std::time::{Duration, Instant};
use tracing::{info, warn};

pub async fn execute(session: &Session, device: String) -> Result<()> {
    info!("Counting files on tape: {}", device);

    let drive = session.open(&device).await?;
    let scope = session.count_scope();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg} [{elapsed_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Spacing through files on {}", device));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let started = Instant::now();
    let partial = drive.count_files(&scope).await;
    spinner.finish_and_clear();

    let files = partial.value;
    // The first error only marks where the walk stopped (normally end of data).
    let mut errors = partial.errors.into_iter();
    let stop = errors.next();
    if let Some(stop) = &stop {
        info!("File walk stopped: {}", stop.report());
    }
    let interrupted = stop.as_ref().map_or(false, |e| {
        matches!(
            e.root_cause(),
            RustLtouError::TimedOut { .. } | RustLtouError::Cancelled { .. }
        )
    });

    println!("📼 Files on tape: {}", files);
    println!(
        "  Duration: {}",
        utils::format_duration(started.elapsed().as_secs_f64())
    );

    if interrupted {
        println!("⚠️  Count interrupted before end of data; at least {} files", files);
    }

    match (errors.next(), stop) {
        (Some(rewind), _) => {
            warn!("Tape was not rewound: {}", rewind.report());
            println!("⚠️  Final rewind failed; the tape is not at BOT");
            Err(rewind)
        }
        (None, Some(stop)) if interrupted => Err(stop),
        _ => Ok(()),
    }
}

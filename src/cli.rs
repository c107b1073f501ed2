use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rustltou")]
#[command(about = "A Rust CLI tool for LTO no-rewind tape drives, built on mt and sg3_utils")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Specify configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log every mt / sg_* invocation and its raw output
    #[arg(long, global = true)]
    pub trace: bool,

    /// Deadline in seconds for the whole operation
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the mt, sg_logs and sg_read_attr paths that would be used
    Utilities,

    /// Check that the drive answers a status query
    Status {
        /// No-rewind tape device path (e.g. /dev/nst0)
        #[arg(value_name = "DEVICE")]
        device: String,
    },

    /// Show medium type and serial number
    Info {
        #[arg(value_name = "DEVICE")]
        device: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the tape capacity log page
    Space {
        #[arg(value_name = "DEVICE")]
        device: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the current file number
    Position {
        #[arg(value_name = "DEVICE")]
        device: String,
    },

    /// Rewind to the beginning of the tape
    Rewind {
        #[arg(value_name = "DEVICE")]
        device: String,
    },

    /// Move to the start of the next file
    Next {
        #[arg(value_name = "DEVICE")]
        device: String,
    },

    /// Move to the start of the previous file
    Prev {
        #[arg(value_name = "DEVICE")]
        device: String,
    },

    /// Forward space COUNT file marks
    Fsf {
        #[arg(value_name = "DEVICE")]
        device: String,

        #[arg(value_name = "COUNT", default_value = "1")]
        count: u32,
    },

    /// Backward space COUNT file marks
    Bsf {
        #[arg(value_name = "DEVICE")]
        device: String,

        #[arg(value_name = "COUNT", default_value = "1")]
        count: u32,
    },

    /// Backward space COUNT file marks, then forward one
    Bsfm {
        #[arg(value_name = "DEVICE")]
        device: String,

        #[arg(value_name = "COUNT", default_value = "1")]
        count: u32,
    },

    /// Rewind and move to the start of file FILE
    Seek {
        #[arg(value_name = "DEVICE")]
        device: String,

        #[arg(value_name = "FILE")]
        file: u32,
    },

    /// Write a file mark at the current position
    Weof {
        #[arg(value_name = "DEVICE")]
        device: String,
    },

    /// Erase the tape from the current position
    Erase {
        #[arg(value_name = "DEVICE")]
        device: String,

        /// Confirm the erase
        #[arg(short, long)]
        force: bool,
    },

    /// Eject the tape
    Eject {
        #[arg(value_name = "DEVICE")]
        device: String,
    },

    /// Count files on the tape (traverses the whole tape, then rewinds)
    Count {
        #[arg(value_name = "DEVICE")]
        device: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

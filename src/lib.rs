//! RustLTOU Library
//!
//! Control of LTO tape drives exposed as no-rewind devices, built on the
//! `mt`, `sg_logs` and `sg_read_attr` command-line utilities. Their text
//! reports are parsed into typed values; positioning, capacity and medium
//! queries are exposed on [`LtoDrive`].

pub mod cli;
pub mod config;
pub mod display;
pub mod drive;
pub mod error;
pub mod exec;
pub mod logger;
pub mod utils;


// Re-export key types for easier use
pub use drive::{
    CapacityField, CapacityLog, DriveOptions, LtoDrive, MediumType, MtOp, Utility,
    UtilityOverrides, UtilityPaths,
};
pub use error::{ErrorKind, Partial, Result, RustLtouError};
pub use exec::{CancelHandle, CommandRunner, ExecScope, ProcessRunner, SystemProcess};

// Domain constants for the external tape utilities.
use std::time::Duration;

/// MAM attribute IDs, as accepted by `sg_read_attr -f`.
pub mod attributes {
    pub const MEDIUM_SERIAL_NUMBER: &str = "0x0401";
    pub const MEDIUM_TYPE: &str = "0x0408";
}

/// In the medium type attribute 0 means data cartridge, 1 cleaning cartridge.
pub const MEDIUM_TYPE_DATA_CARTRIDGE: i64 = 0;
pub const MEDIUM_TYPE_CLEANING_CARTRIDGE: i64 = 1;

/// Tape Capacity log page (31h).
pub const LOG_PAGE_TAPE_CAPACITY: &str = "0x31";

pub const MT_CANDIDATES: &[&str] = &[
    "/usr/bin/mt",
    "/usr/bin/mt-st",
    "/bin/mt",
    "/bin/mt-st",
    "mt",
    "mt-st",
];
pub const SG_LOGS_CANDIDATES: &[&str] = &["/usr/bin/sg_logs", "/bin/sg_logs", "sg_logs"];
pub const SG_READ_ATTR_CANDIDATES: &[&str] = &[
    "/usr/bin/sg_read_attr",
    "/bin/sg_read_attr",
    "sg_read_attr",
];

/// Harmless flag every utility accepts (or rejects without side effects).
pub const PROBE_ARG: &str = "-h";
pub const DISCOVERY_TIMEOUT: Duration = Duration::from_secs(1);

/// `mt status` sub-field holding the current file number.
pub const MT_FILE_NUMBER_LABEL: &str = "File number";

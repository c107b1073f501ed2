use super::constants::{MEDIUM_TYPE_CLEANING_CARTRIDGE, MEDIUM_TYPE_DATA_CARTRIDGE};
use serde::Serialize;

/// Tape Capacity log page snapshot. Values are MiB (1 MiB = 1048576 bytes);
/// `None` means the drive did not report the field or it could not be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CapacityLog {
    pub main_partition_remaining: Option<i64>,
    pub alternate_partition_remaining: Option<i64>,
    pub main_partition_max: Option<i64>,
    pub alternate_partition_max: Option<i64>,
}

/// One of the four fields of [`CapacityLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityField {
    MainPartitionRemaining,
    AlternatePartitionRemaining,
    MainPartitionMax,
    AlternatePartitionMax,
}

impl CapacityField {
    pub const ALL: [CapacityField; 4] = [
        CapacityField::MainPartitionRemaining,
        CapacityField::AlternatePartitionRemaining,
        CapacityField::MainPartitionMax,
        CapacityField::AlternatePartitionMax,
    ];

    /// Line prefix used by `sg_logs -p 0x31`.
    pub fn label(&self) -> &'static str {
        match self {
            CapacityField::MainPartitionRemaining => "Main partition remaining capacity",
            CapacityField::AlternatePartitionRemaining => "Alternate partition remaining capacity",
            CapacityField::MainPartitionMax => "Main partition maximum capacity",
            CapacityField::AlternatePartitionMax => "Alternate partition maximum capacity",
        }
    }

    pub fn parse_failure(&self) -> &'static str {
        match self {
            CapacityField::MainPartitionRemaining => {
                "can not parse main partition remaining capacity"
            }
            CapacityField::AlternatePartitionRemaining => {
                "can not parse alternate partition remaining capacity"
            }
            CapacityField::MainPartitionMax => "can not parse main partition maximum capacity",
            CapacityField::AlternatePartitionMax => {
                "can not parse alternate partition maximum capacity"
            }
        }
    }

    pub fn from_line(line: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| line.starts_with(field.label()))
    }
}

impl CapacityLog {
    pub fn get(&self, field: CapacityField) -> Option<i64> {
        match field {
            CapacityField::MainPartitionRemaining => self.main_partition_remaining,
            CapacityField::AlternatePartitionRemaining => self.alternate_partition_remaining,
            CapacityField::MainPartitionMax => self.main_partition_max,
            CapacityField::AlternatePartitionMax => self.alternate_partition_max,
        }
    }

    pub fn set(&mut self, field: CapacityField, value: Option<i64>) {
        let slot = match field {
            CapacityField::MainPartitionRemaining => &mut self.main_partition_remaining,
            CapacityField::AlternatePartitionRemaining => &mut self.alternate_partition_remaining,
            CapacityField::MainPartitionMax => &mut self.main_partition_max,
            CapacityField::AlternatePartitionMax => &mut self.alternate_partition_max,
        };
        *slot = value;
    }

    pub fn missing(&self) -> Vec<CapacityField> {
        CapacityField::ALL
            .iter()
            .copied()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

/// Medium type MAM attribute (0408h).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MediumType {
    DataCartridge,
    CleaningCartridge,
    Other(i64),
}

impl MediumType {
    pub fn from_code(code: i64) -> Self {
        match code {
            MEDIUM_TYPE_DATA_CARTRIDGE => MediumType::DataCartridge,
            MEDIUM_TYPE_CLEANING_CARTRIDGE => MediumType::CleaningCartridge,
            other => MediumType::Other(other),
        }
    }

    pub fn is_data(&self) -> bool {
        matches!(self, MediumType::DataCartridge)
    }

    pub fn description(&self) -> String {
        match self {
            MediumType::DataCartridge => "Data cartridge".to_string(),
            MediumType::CleaningCartridge => "Cleaning cartridge".to_string(),
            MediumType::Other(code) => format!("Unknown medium type ({})", code),
        }
    }
}

/// Operations issued to `mt -f <device>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MtOp {
    Status,
    Rewind,
    /// Forward space N file marks.
    Fsf(u32),
    /// Backward space N file marks.
    Bsf(u32),
    /// Backward space N file marks, then forward one.
    Bsfm(u32),
    Weof,
    Erase,
    Eject,
}

impl MtOp {
    pub fn name(&self) -> &'static str {
        match self {
            MtOp::Status => "status",
            MtOp::Rewind => "rewind",
            MtOp::Fsf(_) => "fsf",
            MtOp::Bsf(_) => "bsf",
            MtOp::Bsfm(_) => "bsfm",
            MtOp::Weof => "weof",
            MtOp::Erase => "erase",
            MtOp::Eject => "eject",
        }
    }

    pub fn count(&self) -> Option<u32> {
        match self {
            MtOp::Fsf(n) | MtOp::Bsf(n) | MtOp::Bsfm(n) => Some(*n),
            _ => None,
        }
    }

    pub fn to_args(&self, device: &str) -> Vec<String> {
        let mut args = vec!["-f".to_string(), device.to_string(), self.name().to_string()];
        if let Some(n) = self.count() {
            args.push(n.to_string());
        }
        args
    }
}

use crate::drive::{CapacityField, CapacityLog, MediumType, Utility, UtilityPaths};
use crate::utils::{format_capacity, percent};

/// Display the Tape Capacity log page
pub fn display_capacity(device: &str, log: &CapacityLog) {
    println!("📦 Tape Space Information: {}", device);
    println!("{:<42} {:>16}", "Field", "Capacity");
    println!("{:-<59}", "");
    for field in CapacityField::ALL {
        println!(
            "{:<42} {:>16}",
            field.label(),
            format_capacity(log.get(field))
        );
    }

    if let (Some(remaining), Some(max)) = (log.main_partition_remaining, log.main_partition_max) {
        if let Some(used) = main_partition_used(remaining, max) {
            println!("  Main partition used: {:.1}%", used);
        }
    }
}

/// Share of the main partition in use, `None` when the values do not
/// describe a sensible partition.
fn main_partition_used(remaining: i64, max: i64) -> Option<f64> {
    percent(max.checked_sub(remaining)?, max)
}

/// Display medium type and serial number
pub fn display_medium(device: &str, medium: Option<MediumType>, serial: Option<&str>) {
    println!("Device: {}", device);
    match medium {
        Some(medium) => println!("  Medium type: {}", medium.description()),
        None => println!("  Medium type: unavailable"),
    }
    println!("  Serial number: {}", serial.unwrap_or("unavailable"));
}

/// Display resolved utility paths
pub fn display_utilities(paths: &UtilityPaths) {
    println!("{:<14} {}", "Utility", "Path");
    println!("{:-<40}", "");
    for utility in Utility::ALL {
        let path = paths.get(utility);
        println!(
            "{:<14} {}",
            utility.name(),
            if path.is_empty() { "not found" } else { path }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_partition_used() {
        assert_eq!(main_partition_used(75, 100), Some(25.0));
        assert_eq!(main_partition_used(0, 100), Some(100.0));
        assert_eq!(main_partition_used(i64::MIN, 100), None);
        assert_eq!(main_partition_used(10, 0), None);
    }
}

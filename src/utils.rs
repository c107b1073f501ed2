//! Utility functions for RustLTOU

/// Format a MiB count in human-readable binary units (MiB, GiB, TiB, PiB)
pub fn format_mib(mib: i64) -> String {
    const UNITS: &[&str] = &["MiB", "GiB", "TiB", "PiB"];
    const THRESHOLD: f64 = 1024.0;

    if mib.unsigned_abs() < 1024 {
        return format!("{} {}", mib, UNITS[0]);
    }

    let mut size = mib as f64;
    let mut unit_index = 0;

    while size.abs() >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_index])
}

/// Format an optional capacity, `unknown` when absent
pub fn format_capacity(mib: Option<i64>) -> String {
    match mib {
        Some(mib) => format_mib(mib),
        None => "unknown".to_string(),
    }
}

/// Format duration in human-readable format
pub fn format_duration(duration_secs: f64) -> String {
    if duration_secs < 60.0 {
        format!("{:.1}s", duration_secs)
    } else if duration_secs < 3600.0 {
        let minutes = (duration_secs / 60.0) as u32;
        let seconds = duration_secs % 60.0;
        format!("{}m {:.1}s", minutes, seconds)
    } else {
        let hours = (duration_secs / 3600.0) as u32;
        let minutes = ((duration_secs % 3600.0) / 60.0) as u32;
        let seconds = duration_secs % 60.0;
        format!("{}h {}m {:.1}s", hours, minutes, seconds)
    }
}

/// Percentage of `used` over `total`, `None` when not computable
pub fn percent(used: i64, total: i64) -> Option<f64> {
    if total <= 0 {
        None
    } else {
        Some(used as f64 * 100.0 / total as f64)
    }
}

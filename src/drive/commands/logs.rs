//! Log page access through `sg_logs`.

use crate::drive::constants::LOG_PAGE_TAPE_CAPACITY;
use crate::drive::extract;
use crate::drive::{CapacityField, CapacityLog, LtoDrive, Utility};
use crate::error::{Partial, ResultExt, RustLtouError};
use crate::exec::ExecScope;
use tracing::{debug, warn};

impl LtoDrive {
    /// Tape Capacity log page (31h).
    ///
    /// Whatever could be parsed is returned even when some fields are
    /// missing; every failure is listed in the result.
    pub async fn capacity_log(&self, scope: &ExecScope) -> Partial<CapacityLog> {
        let args = [
            "-p".to_string(),
            LOG_PAGE_TAPE_CAPACITY.to_string(),
            self.device_file().to_string(),
        ];
        match self
            .run_utility(scope, Utility::SgLogs, &args)
            .await
            .context("failed to get sg_logs cmd output")
        {
            Ok(output) => parse_capacity_report(&output),
            Err(e) => Partial::new(CapacityLog::default(), vec![e]),
        }
    }
}

/// Parse `sg_logs -p 0x31` output. Lines without a known label are ignored.
pub fn parse_capacity_report(output: &str) -> Partial<CapacityLog> {
    let mut log = CapacityLog::default();
    let mut errors = Vec::new();

    for line in output.lines().map(str::trim) {
        let Some(field) = CapacityField::from_line(line) else {
            continue;
        };
        match extract::colon_int(line, 0) {
            Ok(value) => {
                debug!("{} = {} MiB", field.label(), value);
                log.set(field, Some(value));
            }
            Err(e) => {
                log.set(field, None);
                errors.push(e.wrap(field.parse_failure()));
            }
        }
    }

    let missing = log.missing();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|f| f.label()).collect();
        warn!("Capacity log incomplete, missing: {}", names.join(", "));
        errors.push(
            RustLtouError::field_missing(names.join(", "))
                .wrap("some capacity log fields missing"),
        );
    }

    Partial::new(log, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drive::tests::drive_on;
    use crate::error::ErrorKind;
    use crate::exec::mock::SimulatedTape;

    #[test]
    fn test_full_report() {
        let report = parse_capacity_report(crate::exec::mock::DEFAULT_CAPACITY_REPORT);
        assert!(report.is_complete());
        assert_eq!(report.value.main_partition_remaining, Some(5_984_316));
        assert_eq!(report.value.alternate_partition_remaining, Some(0));
        assert_eq!(report.value.main_partition_max, Some(5_989_440));
        assert_eq!(report.value.alternate_partition_max, Some(0));
    }

    #[test]
    fn test_each_label_parses_with_trailing_text() {
        for field in CapacityField::ALL {
            let line = format!("  {} (in MiB): 1,234,567 MiB [approx]", field.label());
            let report = parse_capacity_report(&line);
            assert_eq!(report.value.get(field), Some(1_234_567));
            assert_eq!(report.value.missing().len(), 3);
        }
    }

    #[test]
    fn test_bad_field_is_unknown_with_specific_error() {
        let output = "\
Main partition remaining capacity (in MiB): 100
Alternate partition remaining capacity (in MiB): 0
Main partition maximum capacity (in MiB):
Alternate partition maximum capacity (in MiB): 0
Some future field: 42
";
        let report = parse_capacity_report(output);
        assert_eq!(report.value.main_partition_remaining, Some(100));
        assert_eq!(report.value.main_partition_max, None);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].has_context("can not parse main partition maximum capacity"));
        assert!(report.errors[1].has_context("some capacity log fields missing"));
        assert_eq!(report.errors[1].kind(), ErrorKind::Parse);
    }

    #[tokio::test]
    async fn test_capacity_log_exec_failure() {
        let drive = drive_on(&SimulatedTape::new(0).failing("sg_logs"));
        let report = drive.capacity_log(&ExecScope::unbounded()).await;
        assert_eq!(report.value, CapacityLog::default());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].has_context("failed to get sg_logs cmd output"));
    }

    #[tokio::test]
    async fn test_capacity_log_partial_page() {
        let tape = SimulatedTape::new(0).capacity_report(
            "Main partition remaining capacity (in MiB): 2,000\nMain partition maximum capacity (in MiB): 2,500\n",
        );
        let (log, err) = drive_on(&tape)
            .capacity_log(&ExecScope::unbounded())
            .await
            .into_parts();
        assert_eq!(log.main_partition_remaining, Some(2000));
        assert_eq!(log.main_partition_max, Some(2500));
        assert_eq!(log.alternate_partition_max, None);
        assert!(err.unwrap().report().contains("Alternate partition maximum capacity"));
    }
}

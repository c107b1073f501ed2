//! File navigation derived from the stepping primitives.
//!
//! The drive can only space across file marks relative to the current
//! position, so "previous file", "go to file N" and "how many files" are
//! built here from `fsf`, `bsf`, `bsfm` and `rewind`. All steps of one call
//! share the caller's scope.

use crate::drive::LtoDrive;
use crate::error::{Partial, Result, ResultExt};
use crate::exec::ExecScope;
use tracing::{debug, info};

impl LtoDrive {
    pub async fn next_file(&self, scope: &ExecScope) -> Result<()> {
        self.fsf(1, scope).await
    }

    /// Move the head to the start of the previous file.
    ///
    /// From file 0 or 1 this is a rewind. Otherwise `bsf 1` stops just
    /// before the mark ending the previous file and `bsfm 1` brings the head
    /// back to that file's first block.
    pub async fn previous_file(&self, scope: &ExecScope) -> Result<()> {
        self.step_back(scope)
            .await
            .context("can not go to previous file")
    }

    async fn step_back(&self, scope: &ExecScope) -> Result<()> {
        let current = self.current_file_number(scope).await?;
        debug!("Stepping back from file {}", current);
        if current <= 1 {
            return self.rewind(scope).await;
        }
        self.bsf(1, scope).await?;
        self.bsfm(1, scope).await
    }

    /// Rewind, then space forward `file` file marks.
    pub async fn seek_file(&self, file: u32, scope: &ExecScope) -> Result<()> {
        self.rewind(scope).await?;
        if file > 0 {
            self.fsf(file, scope)
                .await
                .context(format!("can not go to file {}", file))?;
        }
        Ok(())
    }

    /// Count the files on the tape by spacing forward until the drive
    /// refuses. This traverses the whole tape; bound it with a deadline.
    ///
    /// The tape is rewound afterwards in every case. The errors hold the
    /// failure that ended the walk and, if it failed, the final rewind.
    pub async fn count_files(&self, scope: &ExecScope) -> Partial<u64> {
        let mut count = 0u64;
        let mut errors = Vec::new();

        let walk = match self.rewind(scope).await {
            Ok(()) => loop {
                match self.next_file(scope).await {
                    Ok(()) => {
                        count += 1;
                        debug!("Passed file mark {}", count);
                    }
                    Err(e) => break e,
                }
            },
            Err(e) => e,
        };
        errors.push(walk);

        if let Err(e) = self.rewind(scope).await {
            errors.push(e);
        }

        info!("Counted {} files on {}", count, self.device_file());
        Partial::new(count, errors)
    }
}

#[cfg(test)]
mod tests {
    use crate::drive::tests::drive_on;
    use crate::error::{ErrorKind, RustLtouError};
    use crate::exec::mock::SimulatedTape;
    use crate::exec::ExecScope;
    use std::time::Duration;

    #[tokio::test]
    async fn test_previous_file_from_start_rewinds() {
        for start in [0, 1] {
            let tape = SimulatedTape::new(4).at_file(start);
            let drive = drive_on(&tape);
            let scope = ExecScope::unbounded();

            drive.previous_file(&scope).await.unwrap();
            drive.previous_file(&scope).await.unwrap();

            assert_eq!(tape.position(), 0);
            assert_eq!(tape.mt_ops(), vec!["status", "rewind", "status", "rewind"]);
        }
    }

    #[tokio::test]
    async fn test_previous_file_steps_back_one() {
        let tape = SimulatedTape::new(6).at_file(4);
        let drive = drive_on(&tape);
        let scope = ExecScope::unbounded();

        drive.previous_file(&scope).await.unwrap();

        assert_eq!(drive.current_file_number(&scope).await.unwrap(), 3);
        assert_eq!(tape.mt_ops(), vec!["status", "bsf 1", "bsfm 1", "status"]);
    }

    #[tokio::test]
    async fn test_previous_file_failure_is_wrapped() {
        let drive = drive_on(&SimulatedTape::new(6).at_file(4).failing("bsfm"));
        let err = drive
            .previous_file(&ExecScope::unbounded())
            .await
            .unwrap_err();
        assert!(matches!(err, RustLtouError::Context { ref context, .. } if context == "can not go to previous file"));
        assert!(matches!(err.root_cause(), RustLtouError::ExitStatus { .. }));

        let drive = drive_on(&SimulatedTape::new(6).unloaded());
        let err = drive
            .previous_file(&ExecScope::unbounded())
            .await
            .unwrap_err();
        assert!(err.has_context("can not go to previous file"));
        assert_eq!(err.kind(), ErrorKind::Precondition);
    }

    #[tokio::test]
    async fn test_previous_file_shares_one_deadline() {
        let tape = SimulatedTape::new(6).at_file(4).hanging("bsfm");
        let drive = drive_on(&tape);
        let scope = ExecScope::timeout(Duration::from_millis(200));

        let err = drive.previous_file(&scope).await.unwrap_err();
        assert!(matches!(err.root_cause(), RustLtouError::TimedOut { .. }));
        assert!(scope.is_expired());
    }

    #[tokio::test]
    async fn test_count_files_rewinds_after() {
        let tape = SimulatedTape::new(3).at_file(2);
        let drive = drive_on(&tape);

        let partial = drive.count_files(&ExecScope::unbounded()).await;

        assert_eq!(partial.value, 3);
        assert_eq!(partial.errors.len(), 1);
        assert!(matches!(partial.errors[0], RustLtouError::ExitStatus { .. }));
        assert_eq!(tape.position(), 0);
        assert_eq!(tape.mt_ops().last().map(String::as_str), Some("rewind"));
    }

    #[tokio::test]
    async fn test_count_files_empty_tape() {
        let tape = SimulatedTape::new(0);
        let partial = drive_on(&tape).count_files(&ExecScope::unbounded()).await;
        assert_eq!(partial.value, 0);
        assert_eq!(partial.errors.len(), 1);
    }

    #[tokio::test]
    async fn test_count_files_reports_failed_final_rewind() {
        let tape = SimulatedTape::new(2).failing_after("rewind", 1);
        let partial = drive_on(&tape).count_files(&ExecScope::unbounded()).await;

        assert_eq!(partial.value, 2);
        assert_eq!(partial.errors.len(), 2);
        assert!(partial.errors[1].has_context("can not rewind the tape"));
        let (count, err) = partial.into_parts();
        assert_eq!(count, 2);
        assert_eq!(err.unwrap().kind(), ErrorKind::Composite);
    }

    #[tokio::test]
    async fn test_count_files_bounded_by_one_deadline() {
        let tape = SimulatedTape::new(50).hanging("fsf");
        let scope = ExecScope::timeout(Duration::from_millis(200));
        let partial = drive_on(&tape).count_files(&scope).await;

        assert_eq!(partial.value, 0);
        assert!(matches!(
            partial.errors[0].root_cause(),
            RustLtouError::TimedOut { .. }
        ));
        // The final rewind runs under the same, expired scope.
        assert_eq!(partial.errors.len(), 2);
    }

    #[tokio::test]
    async fn test_seek_file() {
        let tape = SimulatedTape::new(5).at_file(4);
        let drive = drive_on(&tape);
        drive.seek_file(2, &ExecScope::unbounded()).await.unwrap();
        assert_eq!(tape.position(), 2);
        assert_eq!(tape.mt_ops(), vec!["rewind", "fsf 2"]);

        let err = drive.seek_file(9, &ExecScope::unbounded()).await.unwrap_err();
        assert!(err.has_context("can not go to file 9"));
    }
}

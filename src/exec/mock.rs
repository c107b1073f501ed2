//! In-memory stand-in for `mt`, `sg_logs` and `sg_read_attr` driving a
//! simulated tape, for tests.

use super::ProcessRunner;
use crate::error::{Result, RustLtouError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub(crate) const DEFAULT_CAPACITY_REPORT: &str = "\
    HP      Ultrium 7-SCSI    G9Q1
Tape capacity page  (LTO-5 and LTO-6 specific) [0x31]
  Main partition remaining capacity (in MiB): 5,984,316
  Alternate partition remaining capacity (in MiB): 0
  Main partition maximum capacity (in MiB): 5,989,440
  Alternate partition maximum capacity (in MiB): 0
";

#[derive(Debug)]
struct TapeState {
    installed: Vec<String>,
    files: u64,
    position: u64,
    medium_type: Option<String>,
    serial: Option<String>,
    capacity_report: String,
    status_report: Option<String>,
    /// Successful calls allowed before an operation starts failing.
    failures: HashMap<String, usize>,
    hangs: Vec<String>,
    calls: Vec<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct SimulatedTape {
    state: Arc<Mutex<TapeState>>,
}

impl SimulatedTape {
    /// A loaded data cartridge holding `files` files, positioned at BOT.
    pub fn new(files: u64) -> Self {
        Self {
            state: Arc::new(Mutex::new(TapeState {
                installed: vec!["mt".into(), "sg_logs".into(), "sg_read_attr".into()],
                files,
                position: 0,
                medium_type: Some("0".into()),
                serial: Some("10WT012345".into()),
                capacity_report: DEFAULT_CAPACITY_REPORT.into(),
                status_report: None,
                failures: HashMap::new(),
                hangs: Vec::new(),
                calls: Vec::new(),
            })),
        }
    }

    fn with_state(self, f: impl FnOnce(&mut TapeState)) -> Self {
        f(&mut *self.state.lock().unwrap());
        self
    }

    pub fn installed(self, programs: &[&str]) -> Self {
        self.with_state(|s| s.installed = programs.iter().map(|p| p.to_string()).collect())
    }

    pub fn at_file(self, position: u64) -> Self {
        self.with_state(|s| s.position = position)
    }

    pub fn medium_type(self, value: &str) -> Self {
        self.with_state(|s| s.medium_type = Some(value.to_string()))
    }

    /// `sg_read_attr` fails as if no medium were loaded.
    pub fn unloaded(self) -> Self {
        self.with_state(|s| s.medium_type = None)
    }

    pub fn capacity_report(self, report: &str) -> Self {
        self.with_state(|s| s.capacity_report = report.to_string())
    }

    pub fn status_report(self, report: &str) -> Self {
        self.with_state(|s| s.status_report = Some(report.to_string()))
    }

    /// `op` is an `mt` operation, `sg_logs`, or an attribute ID.
    pub fn failing(self, op: &str) -> Self {
        self.failing_after(op, 0)
    }

    pub fn failing_after(self, op: &str, successes: usize) -> Self {
        self.with_state(|s| {
            s.failures.insert(op.to_string(), successes);
        })
    }

    pub fn hanging(self, op: &str) -> Self {
        self.with_state(|s| s.hangs.push(op.to_string()))
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    /// `mt` operations issued, in order, excluding probes.
    pub fn mt_ops(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter_map(|call| {
                let mut parts = call.split_whitespace();
                let program = parts.next()?;
                if !program.ends_with("mt") {
                    return None;
                }
                let rest: Vec<&str> = parts.skip(2).collect();
                if rest.is_empty() {
                    None
                } else {
                    Some(rest.join(" "))
                }
            })
            .collect()
    }

    pub fn position(&self) -> u64 {
        self.state.lock().unwrap().position
    }

    pub fn files(&self) -> u64 {
        self.state.lock().unwrap().files
    }

    fn respond(&self, program: &str, args: &[String]) -> Reply {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("{} {}", program, args.join(" ")).trim().to_string());

        if !state.installed.iter().any(|p| p == program) {
            return Reply::Launch;
        }
        if args.len() == 1 && args[0] == "-h" {
            return Reply::Ok(format!("Usage: {} ...\n", program));
        }

        let name = Path::new(program)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let op = match name.as_str() {
            "mt" | "mt-st" => args.get(2).cloned().unwrap_or_default(),
            "sg_read_attr" => args.get(1).cloned().unwrap_or_default(),
            other => other.to_string(),
        };

        if state.hangs.contains(&op) {
            return Reply::Hang;
        }
        if let Some(remaining) = state.failures.get_mut(&op) {
            if *remaining == 0 {
                return Reply::Fail(format!("{}: {}: Input/output error\n", name, op));
            }
            *remaining -= 1;
        }

        match name.as_str() {
            "mt" | "mt-st" => {
                let count: u64 = args.get(3).and_then(|n| n.parse().ok()).unwrap_or(1);
                state.mt(&op, count)
            }
            "sg_read_attr" => state.read_attr(&op),
            "sg_logs" => Reply::Ok(state.capacity_report.clone()),
            _ => Reply::Ok(String::new()),
        }
    }
}

enum Reply {
    Ok(String),
    Fail(String),
    Launch,
    Hang,
}

impl TapeState {
    fn mt(&mut self, op: &str, count: u64) -> Reply {
        match op {
            "status" => Reply::Ok(self.status_report.clone().unwrap_or_else(|| {
                format!(
                    "SCSI 2 tape drive:\n\
                     File number={}, block number=0, partition=0.\n\
                     Tape block size 0 bytes. Density code 0x5c (LTO-7).\n\
                     Soft error count since last status=0\n\
                     General status bits on (81010000):\n EOF ONLINE IM_REP_EN\n",
                    self.position
                )
            })),
            "rewind" => {
                self.position = 0;
                Reply::Ok(String::new())
            }
            "fsf" => {
                if self.position + count > self.files {
                    self.position = self.files;
                    Reply::Fail("mt: /dev/nst0: Input/output error\n".into())
                } else {
                    self.position += count;
                    Reply::Ok(String::new())
                }
            }
            "bsf" => {
                if count > self.position {
                    self.position = 0;
                    Reply::Fail("mt: /dev/nst0: Input/output error\n".into())
                } else {
                    self.position -= count;
                    Reply::Ok(String::new())
                }
            }
            "bsfm" => {
                if count > self.position {
                    self.position = 0;
                    Reply::Fail("mt: /dev/nst0: Input/output error\n".into())
                } else {
                    self.position = self.position - count + 1;
                    Reply::Ok(String::new())
                }
            }
            "weof" => {
                self.position += 1;
                self.files = self.position;
                Reply::Ok(String::new())
            }
            "erase" => {
                self.files = self.position;
                Reply::Ok(String::new())
            }
            "eject" => {
                self.medium_type = None;
                self.position = 0;
                Reply::Ok(String::new())
            }
            other => Reply::Fail(format!("mt: unrecognized command \"{}\"\n", other)),
        }
    }

    fn read_attr(&self, id: &str) -> Reply {
        let Some(medium_type) = &self.medium_type else {
            return Reply::Fail("Read attribute: Not ready, medium not present\n".into());
        };
        match id {
            "0x0408" => Reply::Ok(format!("  Medium type: {}\n", medium_type)),
            "0x0401" => match &self.serial {
                Some(serial) => Reply::Ok(format!("  Medium serial number: {}\n", serial)),
                None => Reply::Fail("Read attribute: attribute not found\n".into()),
            },
            _ => Reply::Fail("Read attribute: illegal request\n".into()),
        }
    }
}

#[async_trait]
impl ProcessRunner for SimulatedTape {
    async fn run(&self, program: &str, args: &[String]) -> Result<Vec<u8>> {
        match self.respond(program, args) {
            Reply::Ok(output) => Ok(output.into_bytes()),
            Reply::Fail(output) => Err(RustLtouError::ExitStatus {
                program: program.to_string(),
                code: Some(2),
                output,
            }),
            Reply::Launch => Err(RustLtouError::Launch {
                program: program.to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
            Reply::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(Vec::new())
            }
        }
    }
}

//! No-rewind device naming conventions per host platform.

use crate::error::{Result, RustLtouError};
use std::path::Path;

/// How the file name of a no-rewind tape device is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingRule {
    Prefix(&'static str),
    Suffix(&'static str),
}

impl NamingRule {
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            NamingRule::Prefix(prefix) => file_name.starts_with(prefix),
            NamingRule::Suffix(suffix) => file_name.ends_with(suffix),
        }
    }
}

/// Keyed by `std::env::consts::OS`.
pub const PLATFORM_RULES: &[(&str, NamingRule)] = &[
    ("linux", NamingRule::Prefix("nst")),
    ("freebsd", NamingRule::Prefix("nsa")),
    ("netbsd", NamingRule::Prefix("nsa")),
    ("openbsd", NamingRule::Prefix("nsa")),
    ("dragonfly", NamingRule::Prefix("nsa")),
    ("solaris", NamingRule::Suffix("n")),
    ("illumos", NamingRule::Suffix("n")),
    ("aix", NamingRule::Suffix(".1")),
];

pub fn rule_for(os: &str) -> Option<NamingRule> {
    PLATFORM_RULES
        .iter()
        .find(|(name, _)| *name == os)
        .map(|(_, rule)| *rule)
}

/// Check that `device` names a no-rewind tape device on platform `os`.
pub fn check_no_rewind(device: &Path, os: &str) -> Result<()> {
    let rule = rule_for(os).ok_or_else(|| RustLtouError::UnsupportedPlatform(os.to_string()))?;
    let file_name = device
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    if rule.matches(&file_name) {
        Ok(())
    } else {
        Err(RustLtouError::NoRewindRequired {
            path: device.display().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linux_prefix() {
        assert!(check_no_rewind(Path::new("/dev/nst0"), "linux").is_ok());
        let err = check_no_rewind(Path::new("/dev/st0"), "linux").unwrap_err();
        assert!(matches!(err, RustLtouError::NoRewindRequired { .. }));
    }

    #[test]
    fn test_bsd_and_suffix_platforms() {
        assert!(check_no_rewind(Path::new("/dev/nsa0"), "freebsd").is_ok());
        assert!(check_no_rewind(Path::new("/dev/sa0"), "openbsd").is_err());
        assert!(check_no_rewind(Path::new("/dev/rmt/0n"), "solaris").is_ok());
        assert!(check_no_rewind(Path::new("/dev/rmt/0"), "solaris").is_err());
        assert!(check_no_rewind(Path::new("/dev/rmt0.1"), "aix").is_ok());
        assert!(check_no_rewind(Path::new("/dev/rmt0"), "aix").is_err());
    }

    #[test]
    fn test_unsupported_platform() {
        let err = check_no_rewind(Path::new(r"\\.\TAPE0"), "windows").unwrap_err();
        assert!(matches!(err, RustLtouError::UnsupportedPlatform(ref os) if os == "windows"));
    }

    #[test]
    fn test_directory_part_is_ignored() {
        assert!(check_no_rewind(Path::new("/dev/nst/st0"), "linux").is_err());
    }
}

//! Option file warning value object.

use std::fmt;
use std::path::PathBuf;

/// Non-fatal warning raised while reading an options or source file.
///
/// Unknown keys never abort loading; they are collected and shown to the
/// user with a suggestion when one of the known option names is close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key (`options.autoclose`)
    pub path: String,
    /// Last segment of `path`
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line of the first occurrence, when found
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "unknown key '{}' in {}:{}",
                self.path,
                self.file.display(),
                line
            )?,
            None => write!(f, "unknown key '{}' in {}", self.path, self.file.display())?,
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

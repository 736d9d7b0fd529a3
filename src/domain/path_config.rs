//! The embedded interpreter's `python<version>._pth` module-search-path file.

use std::fmt;
use std::path::PathBuf;

const FILE_PREFIX: &str = "python";
const FILE_EXTENSION: &str = "._pth";

/// Interpreter version token taken from the `._pth` file name (`312` for 3.12).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterpreterVersion(String);

impl InterpreterVersion {
    /// Match a file name against `python<digits>._pth` and return the digit run.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let digits = file_name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_EXTENSION)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(digits.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the compiled standard-library archive shipped next to the interpreter.
    pub fn stdlib_archive(&self) -> String {
        format!("{FILE_PREFIX}{}.zip", self.0)
    }

    pub fn path_config_file_name(&self) -> String {
        format!("{FILE_PREFIX}{}{FILE_EXTENSION}", self.0)
    }
}

impl fmt::Display for InterpreterVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A located `._pth` file and the version parsed from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathConfigFile {
    pub path: PathBuf,
    pub version: InterpreterVersion,
}

/// Replacement content for the `._pth` file.
///
/// Puts the standard-library archive and the staging root on the search path
/// and turns on `import site` so `Lib/site-packages` is picked up.
pub fn render_path_config(version: &InterpreterVersion) -> String {
    format!(
        "{}\n.\n\n# Uncomment to run site.main() automatically\nimport site\n",
        version.stdlib_archive()
    )
}

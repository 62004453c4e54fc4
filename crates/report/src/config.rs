//! Report configuration via `kinship.toml`
//!
//! Host-side options for the file sink: where to place report files and
//! which viewer (if any) to launch once a report is written. Matching and
//! resolution behavior is never configurable here.

use kinship_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name looked up by hosts.
pub const CONFIG_FILE_NAME: &str = "kinship.toml";

/// Report output options loaded from `kinship.toml`
///
/// # Example
///
/// ```toml
/// # Directory for report files (default: the system temp directory)
/// # output_dir = "/home/me/reports"
///
/// # Viewer command to launch on the finished report (default: none)
/// # viewer = "firefox"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Viewer command launched on the written report file; none = skip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer: Option<String>,
    /// Directory for report files; none = system temp directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl ReportConfig {
    /// Load a config from a toml file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sink`] if the file cannot be read and
    /// [`Error::Config`] if it does not parse.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write a commented default config if none exists yet
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sink`] on I/O failure.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// The default config file content with comments
    pub fn default_toml() -> &'static str {
        r#"# Kinship report configuration
#
# Directory for report files (default: the system temp directory)
# output_dir = "/home/me/reports"
#
# Viewer command to launch on the finished report (default: none)
# viewer = "firefox"
"#
    }
}

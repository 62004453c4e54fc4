//! Output sinks
//!
//! Two stock [`OutputSink`] implementations:
//! - [`FileSink`]: a timestamped `.html` file, optionally handed to a viewer
//!   command after a successful close
//! - [`BufferSink`]: an in-memory buffer for embedding and tests
//!
//! A sink is opened once per report, written incrementally, and closed
//! exactly once; the drivers own that discipline.

use crate::config::ReportConfig;
use kinship_core::Result;
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// File-backed report sink
///
/// The target path is fixed at construction: `<dir>/<report>-<millis>.html`
/// where `dir` comes from the config (system temp directory when unset).
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    viewer: Option<String>,
}

impl FileSink {
    /// Create a sink for one report run
    ///
    /// `report` names the report kind and becomes the file name prefix.
    pub fn new(config: &ReportConfig, report: &str) -> Self {
        let dir = config
            .output_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        Self {
            path: dir.join(format!("{}-{}.html", report, millis)),
            viewer: config.viewer.clone(),
        }
    }

    /// The file this sink writes to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl kinship_core::OutputSink for FileSink {
    type Handle = BufWriter<File>;

    fn open(&self) -> Result<Self::Handle> {
        info!(target: "kinship::report", path = %self.path.display(), "report file opened");
        Ok(BufWriter::new(File::create(&self.path)?))
    }

    fn write(&self, handle: &mut Self::Handle, text: &str) -> Result<()> {
        handle.write_all(text.as_bytes())?;
        Ok(())
    }

    fn close(&self, mut handle: Self::Handle) -> Result<()> {
        handle.flush()?;
        Ok(())
    }

    fn post_process(&self) -> Result<()> {
        match &self.viewer {
            Some(viewer) => {
                info!(
                    target: "kinship::report",
                    viewer,
                    path = %self.path.display(),
                    "launching viewer"
                );
                Command::new(viewer).arg(&self.path).spawn()?;
                Ok(())
            }
            None => {
                debug!(target: "kinship::report", "no viewer configured");
                Ok(())
            }
        }
    }
}

/// In-memory report sink
///
/// Single-threaded by design, matching the query contract (one logical
/// reader, no suspension points).
#[derive(Debug, Default)]
pub struct BufferSink {
    buf: RefCell<String>,
}

impl BufferSink {
    /// Create an empty buffer sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        self.buf.borrow().clone()
    }
}

impl kinship_core::OutputSink for BufferSink {
    type Handle = ();

    fn open(&self) -> Result<()> {
        self.buf.borrow_mut().clear();
        Ok(())
    }

    fn write(&self, _handle: &mut (), text: &str) -> Result<()> {
        self.buf.borrow_mut().push_str(text);
        Ok(())
    }

    fn close(&self, _handle: ()) -> Result<()> {
        Ok(())
    }
}

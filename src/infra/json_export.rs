use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::app::ports::VendorExportPort;
use crate::domain::VendorRecord;
use crate::error::Result;

/// Writes vendors as a pretty-printed JSON array (2-space indent)
pub struct JsonFileExporter {
    path: PathBuf,
}

impl JsonFileExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VendorExportPort for JsonFileExporter {
    fn export(&self, vendors: &[VendorRecord]) -> Result<PathBuf> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, vendors)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        info!(path = %self.path.display(), count = vendors.len(), "Wrote vendor export");
        Ok(self.path.clone())
    }
}

/// Reads a file produced by [`JsonFileExporter`] back into records.
pub fn read_export(path: &Path) -> Result<Vec<VendorRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let vendors = serde_json::from_reader(reader)?;
    Ok(vendors)
}

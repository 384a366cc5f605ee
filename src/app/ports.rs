use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::{SourceTable, VendorRecord};
use crate::error::Result;

/// Reads raw vendor rows from tabular input
pub trait VendorSourcePort: Send + Sync {
    fn load(&self) -> Result<SourceTable>;

    /// Human-readable location of the input, used in log lines
    fn describe(&self) -> String;
}

/// Delivers a single normalized vendor to its destination
#[async_trait]
pub trait VendorSinkPort: Send + Sync {
    /// Short identifier used for logs and metric labels
    fn name(&self) -> &'static str;

    async fn deliver(&self, vendor: &VendorRecord) -> Result<()>;
}

/// Writes the whole vendor list in one go
pub trait VendorExportPort: Send + Sync {
    fn export(&self, vendors: &[VendorRecord]) -> Result<PathBuf>;
}

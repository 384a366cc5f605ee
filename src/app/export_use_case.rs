use std::path::PathBuf;
use tracing::info;

use crate::app::ports::{VendorExportPort, VendorSourcePort};
use crate::error::Result;
use crate::observability::metrics;
use crate::pipeline;

#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    NoVendors,
    Exported { count: usize, path: PathBuf },
}

/// Loads vendors from a source and writes them all through an exporter
pub struct ExportUseCase {
    source: Box<dyn VendorSourcePort>,
    exporter: Box<dyn VendorExportPort>,
}

impl ExportUseCase {
    pub fn new(source: Box<dyn VendorSourcePort>, exporter: Box<dyn VendorExportPort>) -> Self {
        Self { source, exporter }
    }

    /// Write failures are returned; load failures have already been reported
    /// and surface as `NoVendors`.
    pub fn run(&self) -> Result<ExportOutcome> {
        let vendors = pipeline::load_vendors(self.source.as_ref());

        if vendors.is_empty() {
            info!("No vendor data to export");
            return Ok(ExportOutcome::NoVendors);
        }

        let path = self.exporter.export(&vendors)?;
        metrics::sink::records_exported(vendors.len());
        info!(count = vendors.len(), path = %path.display(), "Exported vendors");

        Ok(ExportOutcome::Exported {
            count: vendors.len(),
            path,
        })
    }
}

use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{error, info, instrument};

use crate::app::ports::{VendorSinkPort, VendorSourcePort};
use crate::observability::metrics;
use crate::pipeline;

/// Tally of one import run
#[derive(Debug, Clone)]
pub struct ImportSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ImportSummary {
    pub fn is_success(&self) -> bool {
        self.succeeded > 0
    }
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== IMPORT SUMMARY ===")?;
        writeln!(f, "Total vendors processed: {}", self.total)?;
        writeln!(f, "Successful imports: {}", self.succeeded)?;
        writeln!(f, "Failed imports: {}", self.failed)?;
        writeln!(f)?;
        if self.is_success() {
            write!(f, "✅ Import completed successfully!")
        } else {
            write!(f, "❌ Import failed!")
        }
    }
}

#[derive(Debug, Clone)]
pub enum ImportOutcome {
    /// The source produced no usable vendors
    NoVendors,
    Completed(ImportSummary),
}

/// Loads vendors from a source and hands them one by one to a sink
pub struct ImportUseCase {
    source: Box<dyn VendorSourcePort>,
    sink: Box<dyn VendorSinkPort>,
}

impl ImportUseCase {
    pub fn new(source: Box<dyn VendorSourcePort>, sink: Box<dyn VendorSinkPort>) -> Self {
        Self { source, sink }
    }

    #[instrument(skip(self), fields(sink = self.sink.name()))]
    pub async fn run(&self) -> ImportOutcome {
        let vendors = pipeline::load_vendors(self.source.as_ref());

        if vendors.is_empty() {
            info!("No vendors to import");
            return ImportOutcome::NoVendors;
        }

        println!("Starting vendor import...");
        println!();

        let started_at = Utc::now();
        let mut succeeded = 0;
        let mut failed = 0;

        for vendor in &vendors {
            match self.sink.deliver(vendor).await {
                Ok(()) => {
                    metrics::sink::record_delivered(self.sink.name());
                    succeeded += 1;
                }
                Err(e) => {
                    metrics::sink::record_failed(self.sink.name());
                    error!(vendor = %vendor.name, error = %e, "Failed to create vendor");
                    println!("Error creating vendor {}: {}", vendor.name, e);
                    failed += 1;
                }
            }
        }

        let summary = ImportSummary {
            total: vendors.len(),
            succeeded,
            failed,
            started_at,
            finished_at: Utc::now(),
        };

        info!(
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "Import finished"
        );

        ImportOutcome::Completed(summary)
    }
}

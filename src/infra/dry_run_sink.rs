use async_trait::async_trait;
use tracing::debug;

use crate::app::ports::VendorSinkPort;
use crate::domain::VendorRecord;
use crate::error::Result;

/// Prints what would be sent to the vendor creation endpoint instead of calling it
#[derive(Debug, Default)]
pub struct DryRunSink;

impl DryRunSink {
    pub fn new() -> Self {
        Self
    }

    pub fn describe(vendor: &VendorRecord) -> String {
        format!(
            "Would create vendor: {} ({})\n  Specialties: {}\n  Location: {}, {}\n",
            vendor.name,
            vendor.email,
            vendor.specialties.join(", "),
            vendor.city,
            vendor.state
        )
    }
}

#[async_trait]
impl VendorSinkPort for DryRunSink {
    fn name(&self) -> &'static str {
        "dry_run"
    }

    async fn deliver(&self, vendor: &VendorRecord) -> Result<()> {
        debug!(vendor = %vendor.name, vendor_type = %vendor.vendor_type, "Dry-run vendor creation");
        println!("{}", Self::describe(vendor));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CellValue, RawVendorRow};
    use crate::pipeline::normalize::normalize_row;

    fn vendor() -> VendorRecord {
        normalize_row(&RawVendorRow {
            name: CellValue::from("Concrete Supply Co"),
            email: CellValue::from("sales@csc.example"),
            city: CellValue::from("Seattle"),
            state: CellValue::from("WA"),
            ..RawVendorRow::default()
        })
        .unwrap()
    }

    #[test]
    fn test_describe_layout() {
        assert_eq!(
            DryRunSink::describe(&vendor()),
            "Would create vendor: Concrete Supply Co (sales@csc.example)\n\
             \x20 Specialties: Concrete, Ready Mix, General Supplies, Building Materials\n\
             \x20 Location: Seattle, WA\n"
        );
    }

    #[tokio::test]
    async fn test_dry_run_always_succeeds() {
        let sink = DryRunSink::new();
        assert!(sink.deliver(&vendor()).await.is_ok());
        assert_eq!(sink.name(), "dry_run");
    }
}

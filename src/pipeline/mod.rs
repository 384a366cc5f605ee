pub mod classify;
pub mod normalize;

use tracing::{error, info};

use crate::app::ports::VendorSourcePort;
use crate::domain::VendorRecord;
use crate::error::ImportError;
use crate::observability::metrics::{self, MetricName};

/// Loads and normalizes every vendor from `source`.
///
/// Load failures are logged and yield an empty list, so callers only have to
/// handle the "nothing to do" case.
pub fn load_vendors(source: &dyn VendorSourcePort) -> Vec<VendorRecord> {
    let _timing = metrics::time_operation(MetricName::LoaderDuration);

    let table = match source.load() {
        Ok(table) => table,
        Err(ImportError::InputNotFound(path)) => {
            metrics::loader::load_error("not_found");
            error!(path = %path.display(), "Excel file not found");
            println!("{}", missing_file_message(&path));
            return Vec::new();
        }
        Err(e) => {
            metrics::loader::load_error("load_failed");
            error!(source = %source.describe(), error = %e, "Failed to load vendor file");
            println!("Error loading Excel file: {}", e);
            return Vec::new();
        }
    };

    info!(rows = table.rows.len(), source = %source.describe(), "Loaded vendor rows");
    println!("Loaded {} vendors from Excel file", table.rows.len());
    println!("Columns: {:?}", table.columns);

    let vendors = normalize::normalize_rows(&table.rows);

    metrics::loader::rows_loaded(table.rows.len());
    metrics::loader::rows_dropped(table.rows.len() - vendors.len());

    info!(valid = vendors.len(), dropped = table.rows.len() - vendors.len(), "Normalized vendors");
    println!("Processed {} valid vendors", vendors.len());

    vendors
}

fn missing_file_message(path: &std::path::Path) -> String {
    format!("Error: Excel file '{}' not found", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CellValue, RawVendorRow, SourceTable};
    use crate::error::Result;
    use std::path::PathBuf;

    enum StubSource {
        Rows(Vec<RawVendorRow>),
        Missing,
        Broken,
    }

    impl VendorSourcePort for StubSource {
        fn load(&self) -> Result<SourceTable> {
            match self {
                StubSource::Rows(rows) => Ok(SourceTable {
                    columns: vec!["* Vendor Name".to_string()],
                    rows: rows.clone(),
                }),
                StubSource::Missing => Err(ImportError::InputNotFound(PathBuf::from("missing.xlsx"))),
                StubSource::Broken => Err(ImportError::MissingColumn("* Vendor Name".to_string())),
            }
        }

        fn describe(&self) -> String {
            "stub".to_string()
        }
    }

    fn named(name: &str) -> RawVendorRow {
        RawVendorRow {
            name: CellValue::from(name),
            ..RawVendorRow::default()
        }
    }

    #[test]
    fn test_load_vendors_drops_unnamed_rows() {
        let source = StubSource::Rows(vec![named("Ace Roofing"), named("nan"), named("")]);
        let vendors = load_vendors(&source);
        assert_eq!(vendors.len(), 1);
        assert_eq!(vendors[0].name, "Ace Roofing");
    }

    #[test]
    fn test_missing_file_message() {
        assert_eq!(
            missing_file_message(std::path::Path::new("../Vendor Database.xlsx")),
            "Error: Excel file '../Vendor Database.xlsx' not found"
        );
    }

    #[test]
    fn test_missing_input_yields_empty_list() {
        assert!(load_vendors(&StubSource::Missing).is_empty());
    }

    #[test]
    fn test_load_errors_yield_empty_list() {
        assert!(load_vendors(&StubSource::Broken).is_empty());
    }
}

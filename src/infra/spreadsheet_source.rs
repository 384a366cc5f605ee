use calamine::{open_workbook_auto, Data, Reader};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::app::ports::VendorSourcePort;
use crate::constants;
use crate::domain::{CellValue, RawVendorRow, SourceTable};
use crate::error::{ImportError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputFormat {
    Workbook,
    Csv,
}

impl InputFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(InputFormat::Workbook),
            "csv" => Ok(InputFormat::Csv),
            other => Err(ImportError::UnsupportedFormat(if other.is_empty() {
                format!("'{}' has no file extension", path.display())
            } else {
                format!(".{}", other)
            })),
        }
    }
}

/// Positions of the known vendor columns within a header row
#[derive(Debug, Clone)]
pub struct ColumnMap {
    indices: HashMap<&'static str, usize>,
}

const KNOWN_COLUMNS: &[&str] = &[
    constants::COL_VENDOR_NAME,
    constants::COL_EMAIL,
    constants::COL_PHONE,
    constants::COL_ADDRESS,
    constants::COL_CITY,
    constants::COL_STATE,
    constants::COL_ZIP_CODE,
    constants::COL_CONTACT_NAME,
];

impl ColumnMap {
    /// Fails when the vendor name column is absent; other columns are optional.
    pub fn from_headers(headers: &[String]) -> Result<Self> {
        let mut indices = HashMap::new();
        for (idx, header) in headers.iter().enumerate() {
            let header = header.trim();
            if let Some(known) = KNOWN_COLUMNS.iter().find(|c| **c == header) {
                indices.entry(*known).or_insert(idx);
            }
        }

        if !indices.contains_key(constants::COL_VENDOR_NAME) {
            return Err(ImportError::MissingColumn(constants::COL_VENDOR_NAME.to_string()));
        }

        for column in KNOWN_COLUMNS.iter().filter(|c| !indices.contains_key(**c)) {
            debug!(column = %column, "Optional column not present");
        }

        Ok(Self { indices })
    }

    fn cell(&self, cells: &[CellValue], column: &str) -> CellValue {
        self.indices
            .get(column)
            .and_then(|idx| cells.get(*idx))
            .cloned()
            .unwrap_or(CellValue::Empty)
    }

    pub fn build_row(&self, cells: &[CellValue]) -> RawVendorRow {
        RawVendorRow {
            name: self.cell(cells, constants::COL_VENDOR_NAME),
            email: self.cell(cells, constants::COL_EMAIL),
            phone: self.cell(cells, constants::COL_PHONE),
            address: self.cell(cells, constants::COL_ADDRESS),
            city: self.cell(cells, constants::COL_CITY),
            state: self.cell(cells, constants::COL_STATE),
            zip_code: self.cell(cells, constants::COL_ZIP_CODE),
            contact_name: self.cell(cells, constants::COL_CONTACT_NAME),
        }
    }
}

fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(_) => CellValue::Text(data.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        _ => CellValue::Empty,
    }
}

/// Reads vendor rows from an Excel/ODS workbook or a CSV file.
///
/// The first row is the header row. Blank rows are kept so the row count
/// matches what the sheet shows; they fall out at the name filter.
pub struct SpreadsheetSource {
    path: PathBuf,
    sheet: Option<String>,
}

impl SpreadsheetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheet: None,
        }
    }

    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }

    fn read_workbook(&self) -> Result<(Vec<String>, Vec<Vec<CellValue>>)> {
        let mut workbook = open_workbook_auto(&self.path)?;

        let sheet_name = match &self.sheet {
            Some(name) => name.clone(),
            None => workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| ImportError::Config(format!("'{}' contains no sheets", self.path.display())))?,
        };
        debug!(sheet = %sheet_name, "Reading worksheet");

        let range = workbook.worksheet_range(&sheet_name)?;
        let mut rows = range.rows();

        let headers: Vec<String> = rows
            .next()
            .map(|header| header.iter().map(|c| cell_from_data(c).to_text()).collect())
            .unwrap_or_default();

        let body: Vec<Vec<CellValue>> = rows
            .map(|row| row.iter().map(cell_from_data).collect())
            .collect();

        Ok((headers, body))
    }

    fn read_csv(&self) -> Result<(Vec<String>, Vec<Vec<CellValue>>)> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;

        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

        let mut body = Vec::new();
        for record in reader.records() {
            let record = record?;
            body.push(record.iter().map(CellValue::from).collect());
        }

        Ok((headers, body))
    }
}

impl VendorSourcePort for SpreadsheetSource {
    fn load(&self) -> Result<SourceTable> {
        if !self.path.exists() {
            return Err(ImportError::InputNotFound(self.path.clone()));
        }

        let (headers, body) = match InputFormat::from_path(&self.path)? {
            InputFormat::Workbook => self.read_workbook()?,
            InputFormat::Csv => self.read_csv()?,
        };

        let columns = ColumnMap::from_headers(&headers)?;
        let rows: Vec<RawVendorRow> = body
            .iter()
            .map(|cells| columns.build_row(cells))
            .collect();

        info!(path = %self.path.display(), rows = rows.len(), "Read vendor spreadsheet");

        Ok(SourceTable { columns: headers, rows })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_input_format_detection() {
        assert_eq!(InputFormat::from_path(Path::new("a/Vendor Database.xlsx")).unwrap(), InputFormat::Workbook);
        assert_eq!(InputFormat::from_path(Path::new("vendors.XLS")).unwrap(), InputFormat::Workbook);
        assert_eq!(InputFormat::from_path(Path::new("vendors.csv")).unwrap(), InputFormat::Csv);
        assert!(matches!(
            InputFormat::from_path(Path::new("vendors.txt")),
            Err(ImportError::UnsupportedFormat(_))
        ));
        assert!(InputFormat::from_path(Path::new("vendors")).is_err());
    }

    #[test]
    fn test_column_map_requires_name() {
        let result = ColumnMap::from_headers(&headers(&["Email", "Phone"]));
        assert!(matches!(result, Err(ImportError::MissingColumn(c)) if c == "* Vendor Name"));
    }

    #[test]
    fn test_column_map_trims_headers_and_fills_missing() {
        let map = ColumnMap::from_headers(&headers(&[" City ", "* Vendor Name", "Unrelated"])).unwrap();
        let row = map.build_row(&[CellValue::from("Tacoma"), CellValue::from("Ace Roofing"), CellValue::from("x")]);

        assert_eq!(row.name, CellValue::from("Ace Roofing"));
        assert_eq!(row.city, CellValue::from("Tacoma"));
        assert_eq!(row.email, CellValue::Empty);
        assert_eq!(row.zip_code, CellValue::Empty);
    }

    #[test]
    fn test_short_rows_fill_with_empty() {
        let map = ColumnMap::from_headers(&headers(&["* Vendor Name", "Email", "Phone"])).unwrap();
        let row = map.build_row(&[CellValue::from("Ace Roofing")]);
        assert_eq!(row.email, CellValue::Empty);
        assert_eq!(row.phone, CellValue::Empty);
    }

    #[test]
    fn test_cell_conversion() {
        assert_eq!(cell_from_data(&Data::Float(2065551234.0)), CellValue::Number(2065551234.0));
        assert_eq!(cell_from_data(&Data::Int(98101)), CellValue::Number(98101.0));
        assert_eq!(cell_from_data(&Data::String("WA".to_string())), CellValue::from("WA"));
        assert_eq!(cell_from_data(&Data::Empty), CellValue::Empty);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let source = SpreadsheetSource::new(dir.path().join("Vendor Database.xlsx"));
        assert!(matches!(source.load(), Err(ImportError::InputNotFound(_))));
    }

    #[test]
    fn test_read_csv_keeps_blank_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vendors.csv");
        fs::write(
            &path,
            "* Vendor Name,Email,Phone,Zip Code\n\
             Concrete Supply Co,sales@csc.example,2065551234,98101\n\
             ,,,\n\
             nan,ghost@example.com,,\n",
        )
        .unwrap();

        let table = SpreadsheetSource::new(&path).load().unwrap();
        assert_eq!(table.columns, headers(&["* Vendor Name", "Email", "Phone", "Zip Code"]));
        // The blank line still counts as a loaded row
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].phone, CellValue::from("2065551234"));
        assert!(table.rows[1].name.is_missing());
        assert_eq!(table.rows[2].name, CellValue::from("nan"));
    }

    #[test]
    fn test_unreadable_workbook_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        fs::write(&path, b"not a zip archive").unwrap();

        assert!(matches!(SpreadsheetSource::new(&path).load(), Err(ImportError::Spreadsheet(_))));
    }
}

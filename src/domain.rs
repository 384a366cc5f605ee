use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of a vendor, inferred from its name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorType {
    #[default]
    Supplier,
    Subcontractor,
    Service,
}

impl VendorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorType::Supplier => "supplier",
            VendorType::Subcontractor => "subcontractor",
            VendorType::Service => "service",
        }
    }
}

impl fmt::Display for VendorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical vendor shape produced by normalization and consumed by the sinks.
///
/// Field names serialize in camelCase to match the vendors table of the
/// receiving database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub contact_person: String,
    pub vendor_type: VendorType,
    pub specialties: Vec<String>,
    pub payment_terms: String,
    pub is_active: bool,
    pub certifications: Vec<String>,
}

/// One spreadsheet cell as read from the input file
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Blank cells, whitespace-only text and NaN numbers carry no value.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(n) => n.is_nan(),
            CellValue::Bool(_) => false,
        }
    }

    /// Trimmed textual form of the cell; empty when missing.
    pub fn to_text(&self) -> String {
        if self.is_missing() {
            return String::new();
        }
        match self {
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

// Whole numbers print without a trailing ".0"
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// The cells of one input row, keyed by the known vendor columns
#[derive(Debug, Clone, PartialEq)]
pub struct RawVendorRow {
    pub name: CellValue,
    pub email: CellValue,
    pub phone: CellValue,
    pub address: CellValue,
    pub city: CellValue,
    pub state: CellValue,
    pub zip_code: CellValue,
    pub contact_name: CellValue,
}

impl Default for RawVendorRow {
    fn default() -> Self {
        Self {
            name: CellValue::Empty,
            email: CellValue::Empty,
            phone: CellValue::Empty,
            address: CellValue::Empty,
            city: CellValue::Empty,
            state: CellValue::Empty,
            zip_code: CellValue::Empty,
            contact_name: CellValue::Empty,
        }
    }
}

/// Rows read from a source along with the header row as found in the file
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    pub columns: Vec<String>,
    pub rows: Vec<RawVendorRow>,
}

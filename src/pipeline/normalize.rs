use tracing::debug;

use crate::constants::{DEFAULT_PAYMENT_TERMS, NAN_LITERAL};
use crate::domain::{CellValue, RawVendorRow, VendorRecord};
use crate::pipeline::classify::{determine_specialties, determine_vendor_type};

/// Formats a phone cell as `(XXX) XXX-XXXX` when it holds a US number.
///
/// Numbers, including text that parses as one (`2065551234.0` from a CSV),
/// are truncated to an integer first. Other text keeps only its digits.
/// Digit strings that are neither 10 digits nor 11 digits with a leading `1`
/// are returned unchanged.
pub fn clean_phone_number(cell: &CellValue) -> String {
    if cell.is_missing() {
        return String::new();
    }

    let digits = match cell {
        CellValue::Number(n) => match integer_digits(*n) {
            Some(digits) => digits,
            None => return String::new(),
        },
        CellValue::Text(s) => match parse_number(s) {
            Some(n) => match integer_digits(n) {
                Some(digits) => digits,
                None => return String::new(),
            },
            None => s.chars().filter(|c| c.is_ascii_digit()).collect(),
        },
        CellValue::Bool(_) | CellValue::Empty => return String::new(),
    };

    format_phone_digits(&digits)
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

// Truncated integer form; None for NaN and infinities
fn integer_digits(n: f64) -> Option<String> {
    n.is_finite().then(|| format!("{}", n.trunc() as i64))
}

pub fn format_phone_digits(digits: &str) -> String {
    let is_digits = digits.bytes().all(|b| b.is_ascii_digit());
    let local = match digits.len() {
        10 if is_digits => digits,
        11 if is_digits && digits.starts_with('1') => &digits[1..],
        _ => return digits.to_string(),
    };

    format!("({}) {}-{}", &local[..3], &local[3..6], &local[6..])
}

/// Numeric zips are truncated and stringified.
///
/// Text that parses as a number (`98101.0`) takes the numeric path, except
/// plain digit strings, which are kept as written so leading zeros survive.
pub fn clean_zip_code(cell: &CellValue) -> String {
    if cell.is_missing() {
        return String::new();
    }

    match cell {
        CellValue::Number(n) => integer_digits(*n).unwrap_or_default(),
        CellValue::Text(s) => {
            let trimmed = s.trim();
            let all_digits = trimmed.bytes().all(|b| b.is_ascii_digit());
            match parse_number(trimmed) {
                Some(n) if !all_digits => integer_digits(n).unwrap_or_default(),
                _ => trimmed.to_string(),
            }
        }
        other => other.to_text(),
    }
}

/// Converts one raw row into a vendor record.
///
/// Returns `None` when the name is blank or the `nan` placeholder.
pub fn normalize_row(row: &RawVendorRow) -> Option<VendorRecord> {
    let name = row.name.to_text();
    if name.is_empty() || name == NAN_LITERAL {
        debug!(name = %name, "Dropping row without a vendor name");
        return None;
    }

    Some(VendorRecord {
        vendor_type: determine_vendor_type(&name),
        specialties: determine_specialties(&name),
        email: row.email.to_text(),
        phone: clean_phone_number(&row.phone),
        address: row.address.to_text(),
        city: row.city.to_text(),
        state: row.state.to_text(),
        zip_code: clean_zip_code(&row.zip_code),
        contact_person: row.contact_name.to_text(),
        payment_terms: DEFAULT_PAYMENT_TERMS.to_string(),
        is_active: true,
        certifications: Vec::new(),
        name,
    })
}

/// Normalizes every row, dropping the ones without a usable name.
pub fn normalize_rows(rows: &[RawVendorRow]) -> Vec<VendorRecord> {
    rows.iter().filter_map(normalize_row).collect()
}

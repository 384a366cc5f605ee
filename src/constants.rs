/// Column headers expected in the vendor spreadsheet
pub const COL_VENDOR_NAME: &str = "* Vendor Name";
pub const COL_EMAIL: &str = "Email";
pub const COL_PHONE: &str = "Phone";
pub const COL_ADDRESS: &str = "Address Line 1";
pub const COL_CITY: &str = "City";
pub const COL_STATE: &str = "State";
pub const COL_ZIP_CODE: &str = "Zip Code";
pub const COL_CONTACT_NAME: &str = "Contact Name";

// Defaults used when no config.toml or override is present
pub const DEFAULT_INPUT_PATH: &str = "../Vendor Database.xlsx";
pub const DEFAULT_EXPORT_PATH: &str = "vendors_export.json";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_CREATE_PATH: &str = "/api/vendors";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

// Environment overrides
pub const ENV_INPUT_PATH: &str = "VENDOR_IMPORT_INPUT";
pub const ENV_EXPORT_PATH: &str = "VENDOR_IMPORT_EXPORT";
pub const ENV_SITE_URL: &str = "VENDOR_IMPORT_SITE_URL";

/// Payment terms assigned to every imported vendor
pub const DEFAULT_PAYMENT_TERMS: &str = "Net 30";

/// Specialty used when no keyword in the vendor name matches
pub const GENERAL_CONSTRUCTION: &str = "General Construction";

/// Placeholder that a blank name cell stringifies to in the source sheets
pub const NAN_LITERAL: &str = "nan";

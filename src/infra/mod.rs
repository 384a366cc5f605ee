pub mod dry_run_sink;
pub mod http_sink;
pub mod json_export;
pub mod spreadsheet_source;

pub use dry_run_sink::DryRunSink;
pub use http_sink::HttpVendorSink;
pub use json_export::JsonFileExporter;
pub use spreadsheet_source::SpreadsheetSource;

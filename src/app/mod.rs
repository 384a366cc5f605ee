pub mod ports;
pub mod import_use_case;
pub mod export_use_case;

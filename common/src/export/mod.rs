//! Export core modules shared by the library and CLI wrappers.

pub mod csv_core;
pub mod json_core;

pub use csv_core::generate_csv;
pub use json_core::generate_json;

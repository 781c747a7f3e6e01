//! Infrastructure layer for crsp-catalog.
//!
//! CSV loaders for the bundled vehicle and motorcycle catalogs.

pub mod catalog_csv;

pub use catalog_csv::{
    load_motorcycles, load_motorcycles_from_path, load_vehicles, load_vehicles_from_path,
};

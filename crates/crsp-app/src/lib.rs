//! Application service layer for crsp-catalog.
//!
//! Owns the bundled catalog resources, the one-shot background load at
//! startup, and the browser facade consumed by the presentation layer.

pub mod browser;
pub mod catalog;
pub mod load;

pub use browser::CatalogBrowser;
pub use catalog::Catalog;
pub use load::{spawn_load, LoadState};

//! Core types for the CRSP vehicle catalog.
//!
//! Record types parsed from the bundled CSV resources, plus the sort
//! specification shared by the domain and presentation layers.

pub mod error;

pub use error::{Error, Result};

use serde::{Deserialize, Serialize};

/// A vehicle record from the CRSP catalog.
///
/// Every attribute is optional: the source data has blank cells and the
/// numeric columns mix formatted numbers with free text. Blank fields
/// normalize to `None` at load time. Records carry no identity of their
/// own; duplicate make+model pairs are valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Body type (e.g., "Hatchback", "SUV")
    pub body_type: Option<String>,
    /// Current Retail Selling Price
    pub crsp: Option<f64>,
    /// Drive configuration (e.g., "2WD", "4WD")
    pub drive_configuration: Option<String>,
    /// Engine capacity, kept as text: the column mixes "1500" with
    /// descriptive values like "ELECTRIC"
    pub engine_capacity: Option<String>,
    /// Fuel type
    pub fuel: Option<String>,
    /// Gross Vehicle Weight in kg
    pub gvw: Option<u32>,
    /// Manufacturer
    pub make: Option<String>,
    /// Model name
    pub model: Option<String>,
    /// Manufacturer model number
    pub model_number: Option<String>,
    /// Seating capacity
    pub seating: Option<u32>,
    /// Transmission type
    pub transmission: Option<String>,
}

/// A motorcycle record from the CRSP catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Motorcycle {
    /// Current Retail Selling Price
    pub crsp: Option<f64>,
    /// Engine capacity in cc
    pub engine_capacity: Option<u32>,
    /// Fuel type
    pub fuel: Option<String>,
    /// Manufacturer
    pub make: Option<String>,
    /// Model name
    pub model: Option<String>,
    /// Manufacturer model number
    pub model_number: Option<String>,
    /// Transmission type
    pub transmission: Option<String>,
    /// Seating capacity
    pub seating: Option<u32>,
}

/// Sort key for the derived vehicle list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Make,
    Price,
    Seats,
}

impl SortKey {
    /// Display label for UI controls
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Make => "Make",
            SortKey::Price => "Price",
            SortKey::Seats => "Seats",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Flip ascending to descending and back
    pub fn flipped(&self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Active sort: key plus direction. Always fully specified; the
/// default (make, ascending) is the state on launch and after clear-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// Ascending sort on the given key
    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Ascending)
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::ascending(SortKey::Make)
    }
}

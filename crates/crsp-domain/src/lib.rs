//! Domain layer: filter selection state machine and the pure
//! derivation services that turn the record store plus the current
//! selection into the displayed list.

pub mod selection;
pub mod service;

pub use selection::{FilterDimension, FilterSelection, SelectionState};
pub use service::{derive_view, filter_options};

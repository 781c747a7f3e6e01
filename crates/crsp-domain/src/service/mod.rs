//! Pure derivation services

pub mod derivation;
pub mod options;

pub use derivation::derive_view;
pub use options::filter_options;

//! Available-options query for the filter selection UI.

use std::collections::BTreeSet;

use crsp_types::Vehicle;

use crate::selection::{FilterDimension, FilterSelection};

/// Distinct non-blank values for a filter dimension, sorted ascending
/// (case-sensitive).
///
/// For the Model dimension the candidates are restricted to records
/// matching the current make filter, when one is set; every other
/// dimension draws from the whole record set.
pub fn filter_options(
    records: &[Vehicle],
    dimension: FilterDimension,
    selection: &FilterSelection,
) -> Vec<String> {
    let mut values = BTreeSet::new();

    for vehicle in records {
        if dimension == FilterDimension::Model {
            if let Some(make) = &selection.make {
                if vehicle.make.as_deref() != Some(make.as_str()) {
                    continue;
                }
            }
        }

        let attribute = match dimension {
            FilterDimension::Make => &vehicle.make,
            FilterDimension::Model => &vehicle.model,
            FilterDimension::Fuel => &vehicle.fuel,
            FilterDimension::Type => &vehicle.body_type,
            FilterDimension::Transmission => &vehicle.transmission,
            FilterDimension::Drive => &vehicle.engine_capacity,
        };

        if let Some(value) = attribute {
            if !value.trim().is_empty() {
                values.insert(value.clone());
            }
        }
    }

    values.into_iter().collect()
}

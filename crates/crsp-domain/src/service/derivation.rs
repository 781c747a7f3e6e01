//! View derivation: one pass of predicate filtering followed by one
//! stable sort.

use std::cmp::Ordering;

use crsp_types::{SortKey, SortOrder, SortSpec, Vehicle};

use crate::selection::FilterSelection;

/// Derive the displayed list from the record store and the current
/// selection.
///
/// A record is included iff every set dimension equals the record's
/// attribute exactly (case-sensitive); unset dimensions impose no
/// constraint. A record whose attribute is missing never matches a set
/// filter. The Drive dimension compares against `engine_capacity`.
///
/// Sorting is stable in both directions: records with equal keys keep
/// their record-store order. Missing makes sort as the minimal value;
/// missing prices and seat counts sort as zero.
pub fn derive_view(
    records: &[Vehicle],
    selection: &FilterSelection,
    sort: SortSpec,
) -> Vec<Vehicle> {
    let mut view: Vec<Vehicle> = records
        .iter()
        .filter(|v| matches_selection(v, selection))
        .cloned()
        .collect();

    view.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, sort.key);
        match sort.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });

    view
}

/// True if the vehicle passes every set filter dimension
pub fn matches_selection(vehicle: &Vehicle, selection: &FilterSelection) -> bool {
    matches_field(&selection.make, &vehicle.make)
        && matches_field(&selection.model, &vehicle.model)
        && matches_field(&selection.fuel, &vehicle.fuel)
        && matches_field(&selection.body_type, &vehicle.body_type)
        && matches_field(&selection.transmission, &vehicle.transmission)
        // Drive filters on engine capacity, see FilterDimension::Drive
        && matches_field(&selection.drive, &vehicle.engine_capacity)
}

fn matches_field(filter: &Option<String>, attribute: &Option<String>) -> bool {
    match filter {
        None => true,
        Some(wanted) => attribute.as_deref() == Some(wanted.as_str()),
    }
}

fn compare_by_key(a: &Vehicle, b: &Vehicle, key: SortKey) -> Ordering {
    match key {
        // Option<String> ordering puts None first, i.e. missing makes
        // sort as the minimal value ascending
        SortKey::Make => a.make.cmp(&b.make),
        SortKey::Price => a
            .crsp
            .unwrap_or(0.0)
            .total_cmp(&b.crsp.unwrap_or(0.0)),
        SortKey::Seats => a.seating.unwrap_or(0).cmp(&b.seating.unwrap_or(0)),
    }
}

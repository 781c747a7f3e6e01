//! Browser facade over the loaded catalog.
//!
//! Pairs the immutable record store with the selection state machine and
//! keeps the derived view current: every mutation re-runs the pure
//! derivation, so readers always observe a view consistent with the
//! selection.

use crsp_domain::{derive_view, filter_options, FilterDimension, SelectionState};
use crsp_types::{Motorcycle, SortKey, SortSpec, Vehicle};

use crate::catalog::Catalog;

pub struct CatalogBrowser {
    catalog: Catalog,
    state: SelectionState,
    derived: Vec<Vehicle>,
}

impl CatalogBrowser {
    pub fn new(catalog: Catalog) -> Self {
        let state = SelectionState::new();
        let derived = derive_view(catalog.vehicles(), &state.filters, state.sort);
        Self {
            catalog,
            state,
            derived,
        }
    }

    /// The current filtered, sorted view
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.derived
    }

    /// Full motorcycle list, sorted by make
    pub fn motorcycles(&self) -> Vec<&Motorcycle> {
        let mut bikes: Vec<_> = self.catalog.motorcycles().iter().collect();
        bikes.sort_by(|a, b| a.make.cmp(&b.make));
        bikes
    }

    /// Number of records in the unfiltered store
    pub fn total_vehicles(&self) -> usize {
        self.catalog.vehicle_count()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.state
    }

    /// Available choices for one filter dimension under the current
    /// selection
    pub fn options(&self, dimension: FilterDimension) -> Vec<String> {
        filter_options(self.catalog.vehicles(), dimension, &self.state.filters)
    }

    /// Set or clear one filter dimension
    pub fn set_filter(&mut self, dimension: FilterDimension, value: Option<String>) {
        self.state.set_filter(dimension, value);
        self.refresh();
    }

    /// Sort-key click from the UI: same key toggles direction, new key
    /// starts ascending
    pub fn select_sort_key(&mut self, key: SortKey) {
        self.state.select_sort_key(key);
        self.refresh();
    }

    /// Replace the sort wholesale
    pub fn set_sort(&mut self, sort: SortSpec) {
        self.state.set_sort(sort);
        self.refresh();
    }

    /// Reset all filters and the sort
    pub fn clear_all(&mut self) {
        self.state.clear_all();
        self.refresh();
    }

    /// Detail lookup for a make/model pair in the current view.
    ///
    /// Fails closed: returns `None` when the pair is no longer present
    /// (the filters may have changed between render and navigation), so
    /// the UI can show "not found" instead of crashing.
    pub fn find_vehicle(&self, make: &str, model: &str) -> Option<&Vehicle> {
        self.derived.iter().find(|v| {
            v.make.as_deref() == Some(make) && v.model.as_deref() == Some(model)
        })
    }

    fn refresh(&mut self) {
        self.derived = derive_view(self.catalog.vehicles(), &self.state.filters, self.state.sort);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(make: &str, model: &str, crsp: f64) -> Vehicle {
        Vehicle {
            body_type: None,
            crsp: Some(crsp),
            drive_configuration: None,
            engine_capacity: None,
            fuel: None,
            gvw: None,
            make: Some(make.to_string()),
            model: Some(model.to_string()),
            model_number: None,
            seating: Some(5),
            transmission: None,
        }
    }

    fn browser() -> CatalogBrowser {
        CatalogBrowser::new(Catalog::new(
            vec![
                vehicle("Toyota", "Vitz", 1_500_000.0),
                vehicle("Nissan", "Note", 1_200_000.0),
                vehicle("Toyota", "Fielder", 1_800_000.0),
            ],
            Vec::new(),
        ))
    }

    #[test]
    fn test_view_tracks_filter_changes() {
        let mut b = browser();
        assert_eq!(b.vehicles().len(), 3);

        b.set_filter(FilterDimension::Make, Some("Toyota".to_string()));
        assert_eq!(b.vehicles().len(), 2);

        b.set_filter(FilterDimension::Make, None);
        assert_eq!(b.vehicles().len(), 3);
    }

    #[test]
    fn test_find_vehicle_fails_closed_after_filter_change() {
        let mut b = browser();
        assert!(b.find_vehicle("Nissan", "Note").is_some());

        b.set_filter(FilterDimension::Make, Some("Toyota".to_string()));
        assert!(b.find_vehicle("Nissan", "Note").is_none());
    }

    #[test]
    fn test_clear_all_restores_full_view_and_default_sort() {
        let mut b = browser();
        b.set_filter(FilterDimension::Make, Some("Toyota".to_string()));
        b.select_sort_key(SortKey::Price);
        b.select_sort_key(SortKey::Price);

        b.clear_all();

        assert_eq!(b.vehicles().len(), 3);
        assert_eq!(b.selection().sort, SortSpec::default());
        // Default sort is by make ascending
        assert_eq!(b.vehicles()[0].make.as_deref(), Some("Nissan"));
    }

    #[test]
    fn test_motorcycles_sorted_by_make() {
        let bike = |make: &str| Motorcycle {
            crsp: None,
            engine_capacity: None,
            fuel: None,
            make: Some(make.to_string()),
            model: None,
            model_number: None,
            transmission: None,
            seating: None,
        };
        let b = CatalogBrowser::new(Catalog::new(
            Vec::new(),
            vec![bike("Yamaha"), bike("Bajaj"), bike("Honda")],
        ));

        let makes: Vec<_> = b
            .motorcycles()
            .iter()
            .map(|m| m.make.as_deref().unwrap())
            .collect();
        assert_eq!(makes, ["Bajaj", "Honda", "Yamaha"]);
    }
}

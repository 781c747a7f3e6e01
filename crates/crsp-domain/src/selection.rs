//! Filter selection state for the vehicle browser.

use serde::{Deserialize, Serialize};

use crsp_types::{SortKey, SortOrder, SortSpec};

/// One of the six independently settable filter dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterDimension {
    Make,
    Model,
    Fuel,
    /// Body type
    Type,
    Transmission,
    /// Matches against the record's engine capacity, not its drive
    /// configuration. The filter is wired this way in the source data
    /// set and the behavior is kept for parity.
    Drive,
}

impl FilterDimension {
    /// All dimensions in display order
    pub fn all() -> [FilterDimension; 6] {
        [
            FilterDimension::Make,
            FilterDimension::Model,
            FilterDimension::Fuel,
            FilterDimension::Type,
            FilterDimension::Transmission,
            FilterDimension::Drive,
        ]
    }

    /// Display label for UI controls
    pub fn label(&self) -> &'static str {
        match self {
            FilterDimension::Make => "Make",
            FilterDimension::Model => "Model",
            FilterDimension::Fuel => "Fuel",
            FilterDimension::Type => "Type",
            FilterDimension::Transmission => "Transmission",
            FilterDimension::Drive => "Drive",
        }
    }
}

/// Current value for each filter dimension. `None` means the dimension
/// imposes no constraint. Values are exact-match, case-sensitive strings
/// previously observed in the record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub make: Option<String>,
    pub model: Option<String>,
    pub fuel: Option<String>,
    pub body_type: Option<String>,
    pub transmission: Option<String>,
    pub drive: Option<String>,
}

impl FilterSelection {
    /// Current value for a dimension
    pub fn get(&self, dimension: FilterDimension) -> Option<&str> {
        match dimension {
            FilterDimension::Make => self.make.as_deref(),
            FilterDimension::Model => self.model.as_deref(),
            FilterDimension::Fuel => self.fuel.as_deref(),
            FilterDimension::Type => self.body_type.as_deref(),
            FilterDimension::Transmission => self.transmission.as_deref(),
            FilterDimension::Drive => self.drive.as_deref(),
        }
    }

    /// True if no dimension is set
    pub fn is_empty(&self) -> bool {
        FilterDimension::all().iter().all(|d| self.get(*d).is_none())
    }

    /// Number of dimensions currently set
    pub fn active_count(&self) -> usize {
        FilterDimension::all()
            .iter()
            .filter(|d| self.get(**d).is_some())
            .count()
    }

    fn set(&mut self, dimension: FilterDimension, value: Option<String>) {
        match dimension {
            FilterDimension::Make => self.make = value,
            FilterDimension::Model => self.model = value,
            FilterDimension::Fuel => self.fuel = value,
            FilterDimension::Type => self.body_type = value,
            FilterDimension::Transmission => self.transmission = value,
            FilterDimension::Drive => self.drive = value,
        }
    }
}

/// Complete selection state of the browser screen: the six filters plus
/// the active sort. Mutated only through the transition methods below;
/// the derived view is recomputed from this state after every change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub filters: FilterSelection,
    pub sort: SortSpec,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear one filter dimension.
    ///
    /// Clearing the make filter also clears the model filter: the model
    /// choices are scoped to the selected make, so a model value may no
    /// longer exist once the make constraint is gone.
    pub fn set_filter(&mut self, dimension: FilterDimension, value: Option<String>) {
        self.filters.set(dimension, value.clone());

        if dimension == FilterDimension::Make && value.is_none() {
            self.filters.model = None;
        }
    }

    /// Select a sort key the way the UI does: picking the active key
    /// again flips the direction, picking a new key starts ascending.
    pub fn select_sort_key(&mut self, key: SortKey) {
        let order = if self.sort.key == key {
            self.sort.order.flipped()
        } else {
            SortOrder::Ascending
        };
        self.sort = SortSpec::new(key, order);
    }

    /// Replace the sort wholesale
    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Reset every filter and return the sort to its default
    pub fn clear_all(&mut self) {
        self.filters = FilterSelection::default();
        self.sort = SortSpec::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clearing_make_cascades_to_model() {
        let mut state = SelectionState::new();
        state.set_filter(FilterDimension::Make, Some("Toyota".to_string()));
        state.set_filter(FilterDimension::Model, Some("Vitz".to_string()));

        state.set_filter(FilterDimension::Make, None);

        assert_eq!(state.filters.make, None);
        assert_eq!(state.filters.model, None);
    }

    #[test]
    fn test_changing_make_keeps_model() {
        // Only clearing cascades; the UI re-derives model options on a
        // make change and the stale model simply matches nothing.
        let mut state = SelectionState::new();
        state.set_filter(FilterDimension::Make, Some("Toyota".to_string()));
        state.set_filter(FilterDimension::Model, Some("Vitz".to_string()));

        state.set_filter(FilterDimension::Make, Some("Nissan".to_string()));

        assert_eq!(state.filters.model.as_deref(), Some("Vitz"));
    }

    #[test]
    fn test_clearing_other_dimension_leaves_model() {
        let mut state = SelectionState::new();
        state.set_filter(FilterDimension::Model, Some("Note".to_string()));
        state.set_filter(FilterDimension::Fuel, None);

        assert_eq!(state.filters.model.as_deref(), Some("Note"));
    }

    #[test]
    fn test_same_sort_key_toggles_direction() {
        let mut state = SelectionState::new();

        state.select_sort_key(SortKey::Price);
        assert_eq!(state.sort, SortSpec::ascending(SortKey::Price));

        state.select_sort_key(SortKey::Price);
        assert_eq!(
            state.sort,
            SortSpec::new(SortKey::Price, SortOrder::Descending)
        );

        state.select_sort_key(SortKey::Price);
        assert_eq!(state.sort, SortSpec::ascending(SortKey::Price));
    }

    #[test]
    fn test_new_sort_key_resets_to_ascending() {
        let mut state = SelectionState::new();
        state.select_sort_key(SortKey::Price);
        state.select_sort_key(SortKey::Price);
        assert_eq!(state.sort.order, SortOrder::Descending);

        state.select_sort_key(SortKey::Seats);
        assert_eq!(state.sort, SortSpec::ascending(SortKey::Seats));
    }

    #[test]
    fn test_clear_all_resets_filters_and_sort() {
        let mut state = SelectionState::new();
        state.set_filter(FilterDimension::Make, Some("Toyota".to_string()));
        state.set_filter(FilterDimension::Fuel, Some("Petrol".to_string()));
        state.select_sort_key(SortKey::Seats);

        state.clear_all();

        assert!(state.filters.is_empty());
        assert_eq!(state.sort, SortSpec::default());
    }

    #[test]
    fn test_active_count() {
        let mut state = SelectionState::new();
        assert_eq!(state.filters.active_count(), 0);
        state.set_filter(FilterDimension::Make, Some("Toyota".to_string()));
        state.set_filter(FilterDimension::Drive, Some("1500".to_string()));
        assert_eq!(state.filters.active_count(), 2);
    }
}

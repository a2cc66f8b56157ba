use super::{FilterField, FilterState};
use tracing::debug;

/// What last replaced the filters of a [`PageController`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChange {
    Initial,
    Search,
    Reset,
}

/// Owns the filters applied to one section's listing.
///
/// Search and reset replace the state wholesale and bump `revision`, so a
/// listing can tell a repeated search from no search at all. Nothing is
/// validated here; the listing reacts to the new state and does the fetching.
#[derive(Debug, Clone, PartialEq)]
pub struct PageController {
    filters: FilterState,
    revision: u64,
    last_change: FilterChange,
}

impl PageController {
    pub fn new(fields: &'static [FilterField]) -> Self {
        Self {
            filters: FilterState::empty(fields),
            revision: 0,
            last_change: FilterChange::Initial,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn last_change(&self) -> FilterChange {
        self.last_change
    }

    pub fn handle_search(&mut self, filters: FilterState) {
        debug!(
            "Applying filters: {:?}",
            filters.non_empty().collect::<Vec<_>>()
        );
        self.filters = filters;
        self.record(FilterChange::Search);
    }

    pub fn handle_reset(&mut self) {
        debug!("Resetting filters");
        self.filters = FilterState::empty(self.filters.fields());
        self.record(FilterChange::Reset);
    }

    fn record(&mut self, change: FilterChange) {
        self.revision = self.revision.wrapping_add(1);
        self.last_change = change;
    }
}

/// Version counter for views that must refetch on demand, independent of filters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invalidation {
    version: u64,
}

impl Invalidation {
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ACTIVE_OPTIONS;

    const FIELDS: &[FilterField] = &[
        FilterField::text("name", "Name"),
        FilterField::text("email", "Email"),
        FilterField::select("is_active", "Status", ACTIVE_OPTIONS),
    ];

    #[test]
    fn test_search_replaces_instead_of_merging() {
        let mut controller = PageController::new(FIELDS);
        controller.handle_search(FilterState::empty(FIELDS).with("name", "An").unwrap());
        controller.handle_search(FilterState::empty(FIELDS).with("email", "x@y.vn").unwrap());

        assert_eq!(controller.filters().get("name"), Some(""));
        assert_eq!(controller.filters().get("email"), Some("x@y.vn"));
    }

    #[test]
    fn test_reset_restores_default_snapshot() {
        let mut controller = PageController::new(FIELDS);
        controller.handle_search(
            FilterState::empty(FIELDS)
                .with("name", "An")
                .unwrap()
                .with("is_active", "true")
                .unwrap(),
        );
        controller.handle_reset();

        assert_eq!(controller.filters(), &FilterState::empty(FIELDS));
        assert_eq!(controller.filters(), PageController::new(FIELDS).filters());
        assert_eq!(controller.last_change(), FilterChange::Reset);
        assert_eq!(controller.revision(), 2);
    }

    #[test]
    fn test_same_search_twice_keeps_filters_but_counts_as_a_change() {
        let filters = FilterState::empty(FIELDS).with("name", "Naruto").unwrap();
        let mut controller = PageController::new(FIELDS);
        controller.handle_search(filters.clone());
        let first = controller.clone();
        controller.handle_search(filters);

        assert_eq!(controller.filters(), first.filters());
        assert_eq!(controller.revision(), first.revision() + 1);
        assert_eq!(controller.last_change(), FilterChange::Search);
    }

    #[test]
    fn test_reset_of_default_filters_is_still_a_change() {
        let mut controller = PageController::new(FIELDS);
        assert_eq!(controller.last_change(), FilterChange::Initial);
        controller.handle_reset();

        assert!(controller.filters().is_default());
        assert_eq!(controller.revision(), 1);
        assert_eq!(controller.last_change(), FilterChange::Reset);
    }

    #[test]
    fn test_invalidation_bumps() {
        let mut invalidation = Invalidation::default();
        assert_eq!(invalidation.version(), 0);
        invalidation.bump();
        invalidation.bump();
        assert_eq!(invalidation.version(), 2);
    }
}

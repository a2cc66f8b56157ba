use super::{FilterError, FilterState};

/// Local draft behind a search form.
///
/// Edits stay in the draft; only [`SearchDraft::submit`] produces a snapshot
/// for the page controller.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchDraft {
    draft: FilterState,
}

impl SearchDraft {
    pub fn new(current: &FilterState) -> Self {
        Self {
            draft: current.clone(),
        }
    }

    pub fn value(&self, name: &str) -> &str {
        self.draft.get(name).unwrap_or_default()
    }

    pub fn edit(&mut self, name: &str, value: impl Into<String>) -> Result<(), FilterError> {
        self.draft.set(name, value)
    }

    /// Snapshot to hand to the controller, unless a required field is blank
    pub fn submit(&self) -> Result<FilterState, FilterError> {
        match self.draft.missing_required() {
            Some(field) => Err(FilterError::MissingRequired(field.label)),
            None => Ok(self.draft.clone()),
        }
    }

    pub fn clear(&mut self) {
        self.draft = FilterState::empty(self.draft.fields());
    }
}

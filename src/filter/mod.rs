//! Filter state shared by every admin section: field schemas, the page
//! controller that owns the applied filters, the search form draft, and the
//! query derived from them.

mod controller;
mod form;
mod query;
mod schema;
mod state;

pub use controller::{FilterChange, Invalidation, PageController};
pub use form::SearchDraft;
pub use query::{ListingQuery, Sort, SortDirection};
pub use schema::{FieldKind, FilterField, SelectOption, ACTIVE_OPTIONS};
pub use state::FilterState;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown filter field: {0}")]
    UnknownField(String),
    #[error("{0} is required")]
    MissingRequired(&'static str),
}

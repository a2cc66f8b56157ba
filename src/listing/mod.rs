//! Listing state for a section: the query currently shown, the fetched page,
//! and the guard that keeps a slow, superseded response from overwriting a
//! newer one.

mod loader;
mod resource;

pub use loader::{begin_refresh, fetch_report_stats, load_report_stats, run_fetch, StateSlot};
pub use resource::{LatestResource, RequestId};

use crate::api::{ApiError, Page, Row};
use crate::filter::{FilterChange, FilterState, ListingQuery, PageController, Sort};
use tracing::info;

/// Handed out when a fetch starts; must be returned with its result
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    id: RequestId,
    query: ListingQuery,
}

impl FetchTicket {
    pub fn query(&self) -> &ListingQuery {
        &self.query
    }
}

/// What the listing should render right now
#[derive(Debug, PartialEq)]
pub enum ListingView<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Rows(&'a Page<Row>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingController {
    page_size: u32,
    query: Option<ListingQuery>,
    rows: LatestResource<Page<Row>>,
    action_error: Option<String>,
    /// Revision of the page controller the last `next_query` saw
    seen_revision: Option<u64>,
}

impl ListingController {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            query: None,
            rows: LatestResource::default(),
            action_error: None,
            seen_revision: None,
        }
    }

    /// Query of the most recent fetch
    pub fn query(&self) -> Option<&ListingQuery> {
        self.query.as_ref()
    }

    /// Query to run for the given filters. New filters start over at page 1
    /// (keeping the sort); unchanged filters keep the current page.
    pub fn query_for(&self, filters: &FilterState) -> ListingQuery {
        match &self.query {
            Some(current) if current.matches_filters(filters) => current.clone(),
            Some(current) => {
                ListingQuery::new(filters, self.page_size).with_sort(current.sort.clone())
            }
            None => ListingQuery::new(filters, self.page_size),
        }
    }

    /// First page of `filters` with no sort
    pub fn reset_query(&self, filters: &FilterState) -> ListingQuery {
        ListingQuery::new(filters, self.page_size)
    }

    /// Query for the fetch that follows a change to `page`. A reset since the
    /// last call starts over from the default query even when the filters were
    /// already default; anything else, including an invalidation, goes
    /// through [`Self::query_for`].
    pub fn next_query(&mut self, page: &PageController) -> ListingQuery {
        let changed = self.seen_revision != Some(page.revision());
        self.seen_revision = Some(page.revision());
        match page.last_change() {
            FilterChange::Reset if changed => self.reset_query(page.filters()),
            _ => self.query_for(page.filters()),
        }
    }

    /// When the page just loaded is empty but earlier pages still hold rows,
    /// as after deleting the only row on the last page, the query for the
    /// new last page
    pub fn recovery_query(&self) -> Option<ListingQuery> {
        if self.rows.is_loading() {
            return None;
        }
        let page = self.rows.value()?;
        let query = self.query.as_ref()?;
        if !page.is_empty() || page.total == 0 || query.page <= 1 {
            return None;
        }
        let last = page.total_pages();
        (last < query.page).then(|| query.clone().with_page(last))
    }

    pub fn page_query(&self, page: u32) -> Option<ListingQuery> {
        self.query.clone().map(|q| q.with_page(page))
    }

    /// Toggle sorting on a column and go back to the first page
    pub fn sort_query(&self, field: &str) -> Option<ListingQuery> {
        self.query.clone().map(|q| {
            let sort = Sort::toggled(field, q.sort.as_ref());
            q.with_sort(Some(sort)).with_page(1)
        })
    }

    pub fn begin(&mut self, query: ListingQuery) -> FetchTicket {
        self.query = Some(query.clone());
        self.action_error = None;
        FetchTicket {
            id: self.rows.begin(),
            query,
        }
    }

    /// Returns false when the ticket was superseded and the result dropped
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Page<Row>, ApiError>) -> bool {
        let summary = match &result {
            Ok(page) => format!("{} of {} row(s)", page.items.len(), page.total),
            Err(e) => format!("error: {}", e),
        };

        let applied = self.rows.complete(ticket.id, result);
        if applied {
            info!("✓ Listing page {} loaded: {}", ticket.query.page, summary);
        }
        applied
    }

    pub fn is_loading(&self) -> bool {
        self.rows.is_loading()
    }

    pub fn page(&self) -> Option<&Page<Row>> {
        self.rows.value()
    }

    pub fn view(&self) -> ListingView<'_> {
        if self.rows.is_loading() {
            return ListingView::Loading;
        }
        if let Some(error) = self.rows.error() {
            return ListingView::Failed(error);
        }
        match self.rows.value() {
            Some(page) if !page.is_empty() => ListingView::Rows(page),
            _ => ListingView::Empty,
        }
    }

    /// Error from a row action (e.g. delete); rows stay visible
    pub fn set_action_error(&mut self, message: String) {
        self.action_error = Some(message);
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }
}

/// Page numbers to show around the current page
pub fn page_window(current: u32, total_pages: u32, radius: u32) -> Vec<u32> {
    let total_pages = total_pages.max(1);
    let current = current.clamp(1, total_pages);
    let start = current.saturating_sub(radius).max(1);
    let end = current.saturating_add(radius).min(total_pages);
    (start..=end).collect()
}

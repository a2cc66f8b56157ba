//! Fetch drivers shared by the listing hook and the report stats panel.
//!
//! State is reached through [`StateSlot`] so the same code runs against a
//! reactive signal in the app and a plain value in tests.

use super::{FetchTicket, LatestResource, ListingController};
use crate::api::{decode_data, ApiError, CollectionSource, ReportStats};
use crate::filter::PageController;
use crate::sections::Section;
use tracing::{debug, info, warn};

/// Somewhere a piece of state can be borrowed mutably for a short update
pub trait StateSlot<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl StateSlot<ListingController> for ListingController {
    fn update<R>(&mut self, f: impl FnOnce(&mut ListingController) -> R) -> R {
        f(self)
    }
}

impl<T> StateSlot<LatestResource<T>> for LatestResource<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut LatestResource<T>) -> R) -> R {
        f(self)
    }
}

/// Start the fetch that follows a filter change or an invalidation
pub fn begin_refresh<S>(slot: &mut S, page: &PageController) -> FetchTicket
where
    S: StateSlot<ListingController>,
{
    slot.update(|listing| {
        let query = listing.next_query(page);
        listing.begin(query)
    })
}

/// Fetch the rows for `ticket` and apply them.
///
/// When the page comes back empty past the end, the last page is fetched
/// instead. Stops as soon as a newer fetch supersedes this one.
pub async fn run_fetch<S>(
    slot: &mut S,
    section: Section,
    source: &dyn CollectionSource,
    ticket: FetchTicket,
) where
    S: StateSlot<ListingController>,
{
    let mut ticket = ticket;
    loop {
        let result = section.fetch_rows(source, ticket.query()).await;
        if let Err(e) = &result {
            warn!("✗ Failed to load {}: {}", section, e);
        }

        let next = slot.update(|listing| {
            if !listing.complete(ticket, result) {
                return None;
            }
            let query = listing.recovery_query()?;
            info!("↩ {} page is past the end, loading page {}", section, query.page);
            Some(listing.begin(query))
        });

        match next {
            Some(recovery) => ticket = recovery,
            None => break,
        }
    }
}

pub async fn fetch_report_stats(source: &dyn CollectionSource) -> Result<ReportStats, ApiError> {
    let value = source.get(Section::ChapterReports.endpoint(), "stats").await?;
    decode_data(value)
}

/// Load report stats for invalidation `version`, once per version.
/// Returns whether a result was applied.
pub async fn load_report_stats<S>(slot: &mut S, version: u64, source: &dyn CollectionSource) -> bool
where
    S: StateSlot<LatestResource<ReportStats>>,
{
    let Some(request) = slot.update(|stats| stats.begin_for(version)) else {
        return false;
    };

    debug!("Loading report stats (version {})", version);
    let result = fetch_report_stats(source).await;
    if let Err(e) = &result {
        warn!("✗ Failed to load report stats: {}", e);
    }
    slot.update(|stats| stats.complete(request, result))
}

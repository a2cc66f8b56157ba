use crate::api::CollectionSource;
use crate::filter::{Invalidation, ListingQuery, PageController};
use crate::listing::{begin_refresh, run_fetch, FetchTicket, ListingController, StateSlot};
use crate::sections::Section;
use crate::ui::use_app_context;
use dioxus::prelude::*;
use std::sync::Arc;
use tracing::{debug, info, warn};

impl<T: 'static> StateSlot<T> for Signal<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut value = self.write();
        f(&mut *value)
    }
}

/// Handle to one section's listing: its state signal plus the source it fetches from
#[derive(Clone)]
pub struct ListingHandle {
    section: Section,
    controller: Signal<ListingController>,
    source: Arc<dyn CollectionSource>,
}

impl PartialEq for ListingHandle {
    fn eq(&self, other: &Self) -> bool {
        self.section == other.section && self.controller == other.controller
    }
}

impl ListingHandle {
    pub fn section(&self) -> Section {
        self.section
    }

    pub fn controller(&self) -> Signal<ListingController> {
        self.controller
    }

    pub fn is_loading(&self) -> bool {
        self.controller.read().is_loading()
    }

    /// Fetch `query`, superseding whatever is still in flight
    pub fn start(&self, query: ListingQuery) {
        let mut controller = self.controller;
        let ticket = controller.update(|listing| listing.begin(query));
        self.spawn_fetch(ticket);
    }

    fn spawn_fetch(&self, ticket: FetchTicket) {
        let mut controller = self.controller;
        let source = self.source.clone();
        let section = self.section;

        spawn(async move {
            run_fetch(&mut controller, section, source.as_ref(), ticket).await;
        });
    }

    pub fn go_to_page(&self, page: u32) {
        let query = self.controller.peek().page_query(page);
        if let Some(query) = query {
            self.start(query);
        }
    }

    pub fn sort_by(&self, field: &str) {
        let query = self.controller.peek().sort_query(field);
        if let Some(query) = query {
            self.start(query);
        }
    }

    /// Delete a record and notify `on_deleted`, which is expected to invalidate the listing.
    /// The task belongs to the calling component's scope.
    pub fn delete(&self, id: String, on_deleted: EventHandler<()>) {
        let handle = self.clone();

        spawn(async move {
            let section = handle.section;
            match handle.source.delete(section.endpoint(), &id).await {
                Ok(()) => {
                    info!("🗑 Deleted {} #{}", section, id);
                    on_deleted.call(());
                }
                Err(e) => {
                    warn!("✗ Failed to delete {} #{}: {}", section, id, e);
                    let mut controller = handle.controller;
                    controller
                        .write()
                        .set_action_error(format!("Failed to delete #{}: {}", id, e));
                }
            }
        });
    }
}

/// Hook that keeps a section's listing in sync with its page controller.
///
/// Every search or reset writes the controller signal, which re-runs the
/// effect and starts a fetch, even when the filters are unchanged. A reset
/// goes back to the first unsorted page. Bumping `invalidation` refetches the
/// current page.
pub fn use_listing(
    section: Section,
    page: Signal<PageController>,
    invalidation: Signal<Invalidation>,
) -> ListingHandle {
    let app_context = use_app_context();
    let page_size = app_context.config.page_size;
    let controller = use_signal(|| ListingController::new(page_size));

    let handle = ListingHandle {
        section,
        controller,
        source: app_context.source,
    };

    let effect_handle = handle.clone();
    use_effect(move || {
        let version = invalidation.read().version();
        let mut controller = effect_handle.controller;
        let ticket = begin_refresh(&mut controller, &page.read());
        debug!(
            "Listing {} page {} (version {})",
            section,
            ticket.query().page,
            version
        );
        effect_handle.spawn_fetch(ticket);
    });

    handle
}

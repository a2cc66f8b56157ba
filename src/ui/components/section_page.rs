use super::listing_hooks::use_listing;
use super::{ListingPanel, PageMeta, ReportStatsPanel, SearchForm};
use crate::filter::{FilterState, Invalidation, PageController};
use crate::sections::Section;
use dioxus::prelude::*;

/// Routed entry for `/:section`
#[component]
pub fn SectionPage(section: Section) -> Element {
    rsx! {
        // Keyed by section so switching sections starts from fresh filters
        for current in std::iter::once(section) {
            SectionScreen { key: "{current}", section: current }
        }
    }
}

/// Search form, listing, and section extras for one admin section
#[component]
fn SectionScreen(section: Section) -> Element {
    let mut page = use_signal(|| PageController::new(section.filter_fields()));
    let mut invalidation = use_signal(Invalidation::default);
    let listing = use_listing(section, page, invalidation);

    let applied = page.read().filters().clone();

    rsx! {
        PageMeta { title: section.title(), description: section.description() }
        div { class: "p-6 space-y-6",
            div { class: "flex items-center justify-between",
                div {
                    h1 { class: "text-3xl font-bold text-white", "{section.title()}" }
                    p { class: "text-gray-400 mt-1", "{section.description()}" }
                }
                div { class: "flex items-center gap-3",
                    if listing.is_loading() {
                        span { class: "text-sm text-blue-300 loading-pulse", "Loading…" }
                    }
                    button {
                        class: "px-4 py-2 bg-gray-700 hover:bg-gray-600 text-white rounded-lg",
                        onclick: move |_| invalidation.write().bump(),
                        "Refresh"
                    }
                }
            }

            SearchForm {
                section,
                applied,
                on_search: move |filters: FilterState| page.write().handle_search(filters),
                on_reset: move |_| page.write().handle_reset(),
            }

            if section.has_report_stats() {
                ReportStatsPanel { invalidation }
            }

            ListingPanel {
                listing: listing.clone(),
                on_changed: move |_| invalidation.write().bump(),
            }
        }
    }
}

use crate::api::ReportStats;
use crate::filter::Invalidation;
use crate::listing::{load_report_stats, LatestResource};
use crate::ui::use_app_context;
use dioxus::prelude::*;

/// Chapter report counters, refetched whenever `invalidation` is bumped
#[component]
pub fn ReportStatsPanel(invalidation: Signal<Invalidation>) -> Element {
    let app_context = use_app_context();
    let mut stats = use_signal(LatestResource::<ReportStats>::default);

    use_effect(move || {
        let version = invalidation.read().version();
        let source = app_context.source.clone();

        spawn(async move {
            load_report_stats(&mut stats, version, source.as_ref()).await;
        });
    });

    let current = stats.read().clone();

    rsx! {
        div { class: "bg-gray-800 rounded-lg p-4 shadow",
            h2 { class: "text-lg font-semibold text-white mb-3", "Report statistics" }
            if let Some(error) = current.error() {
                p { class: "text-sm text-red-400", "Failed to load statistics: {error}" }
            } else if let Some(counts) = current.value() {
                div { class: "grid grid-cols-3 gap-4",
                    StatCard { label: "Total", value: counts.total, accent: "text-white" }
                    StatCard { label: "Pending", value: counts.pending, accent: "text-yellow-400" }
                    StatCard { label: "Resolved", value: counts.resolved, accent: "text-green-400" }
                }
            } else {
                p { class: "text-sm text-gray-400 loading-pulse", "Loading statistics…" }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: u64, accent: &'static str) -> Element {
    rsx! {
        div { class: "bg-gray-900 rounded-lg p-3 text-center",
            div { class: "text-2xl font-bold {accent}", "{value}" }
            div { class: "text-xs uppercase tracking-wider text-gray-400 mt-1", "{label}" }
        }
    }
}

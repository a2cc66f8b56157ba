use super::dialog_context::{ConfirmRequest, DialogContext};
use super::listing_hooks::ListingHandle;
use super::Pagination;
use crate::api::{Page, Row};
use crate::filter::{Sort, SortDirection};
use crate::listing::ListingView;
use crate::sections::{Column, Layout, Section};
use crate::ui::Route;
use dioxus::prelude::*;

const HEADER_CLASS: &str =
    "px-4 py-3 text-xs font-semibold uppercase tracking-wider text-gray-400 border-b border-gray-700";

/// Rows of a section as a table or a card grid, with row actions and paging
#[component]
pub fn ListingPanel(listing: ListingHandle, on_changed: EventHandler<()>) -> Element {
    let dialog = use_context::<DialogContext>();
    let section = listing.section();
    let controller = listing.controller();
    let state = controller.read().clone();

    let listing_for_sort = listing.clone();
    let on_sort = EventHandler::new(move |key: &'static str| listing_for_sort.sort_by(key));

    let listing_for_page = listing.clone();
    let on_page = EventHandler::new(move |page: u32| listing_for_page.go_to_page(page));

    // Confirmation only records the id; the delete task runs in this scope
    let mut pending_delete = use_signal(|| None::<String>);
    let listing_for_delete = listing.clone();
    use_effect(move || {
        if pending_delete.read().is_none() {
            return;
        }
        if let Some(id) = pending_delete.write().take() {
            listing_for_delete.delete(id, on_changed);
        }
    });

    let on_delete = EventHandler::new(move |row: Row| {
        let request = delete_request(section, &row, move |id| {
            // The panel may be gone by the time the dialog is answered
            let mut pending_delete = pending_delete;
            if let Ok(mut pending) = pending_delete.try_write() {
                *pending = Some(id);
            };
        });
        dialog.show(request);
    });

    let sort = state.query().and_then(|q| q.sort.clone());

    let body = match state.view() {
        ListingView::Loading => rsx! {
            div { class: "text-center py-12",
                div { class: "animate-spin rounded-full h-10 w-10 border-b-2 border-blue-500 mx-auto" }
                p { class: "mt-4 text-gray-400", "Loading {section.nav_label()}…" }
            }
        },
        ListingView::Failed(error) => rsx! {
            div { class: "bg-red-900/40 border border-red-700 rounded-lg p-4 text-red-300",
                "Failed to load {section.nav_label()}: {error}"
            }
        },
        ListingView::Empty => {
            // Rows may remain on earlier pages while the last one is refetched
            let remaining = state.page().filter(|page| page.total > 0).cloned();
            rsx! {
                div { class: "text-center py-12 text-gray-400", "No records match these filters." }
                if let Some(page) = remaining {
                    Pagination {
                        page: page.page,
                        total_pages: page.total_pages(),
                        total: page.total,
                        on_page,
                    }
                }
            }
        }
        ListingView::Rows(page) => {
            let rows = match section.layout() {
                Layout::Table => rsx! {
                    RowTable { section, page: page.clone(), sort, on_sort, on_delete }
                },
                Layout::Grid => rsx! {
                    RowGrid { section, page: page.clone(), on_delete }
                },
            };

            rsx! {
                {rows}
                Pagination {
                    page: page.page,
                    total_pages: page.total_pages(),
                    total: page.total,
                    on_page,
                }
            }
        }
    };

    rsx! {
        div { class: "space-y-4",
            if let Some(error) = state.action_error() {
                div { class: "bg-red-900/40 border border-red-700 rounded-lg p-3 text-sm text-red-300",
                    "{error}"
                }
            }
            {body}
        }
    }
}

/// Confirmation for deleting `row`; confirming hands its id to `on_confirm`
fn delete_request(
    section: Section,
    row: &Row,
    on_confirm: impl Fn(String) + 'static,
) -> ConfirmRequest {
    let id = row.id.clone();
    let name = row.cells.first().cloned().unwrap_or_default();
    ConfirmRequest::new(
        format!("Delete from {}?", section.nav_label()),
        format!("\"{}\" (#{}) will be permanently removed.", name, id),
        move || on_confirm(id.clone()),
    )
    .with_labels("Delete", "Cancel")
}

#[component]
fn RowTable(
    section: Section,
    page: Page<Row>,
    sort: Option<Sort>,
    on_sort: EventHandler<&'static str>,
    on_delete: EventHandler<Row>,
) -> Element {
    rsx! {
        div { class: "overflow-x-auto",
            table { class: "w-full bg-gray-800 rounded-lg shadow-lg text-left",
                thead {
                    tr { class: "bg-gray-900",
                        for column in section.columns().iter().copied() {
                            ColumnHeader { key: "{column.label}", column, sort: sort.clone(), on_sort }
                        }
                        th { class: HEADER_CLASS, "Actions" }
                    }
                }
                tbody {
                    for row in page.items.iter() {
                        tr { key: "{row.id}", class: "border-b border-gray-700 hover:bg-gray-700/50",
                            for cell in row.cells.iter() {
                                td { class: "px-4 py-3 text-sm text-gray-200 listing-cell", "{cell}" }
                            }
                            td { class: "px-4 py-3",
                                RowActions { section, row: row.clone(), on_delete }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ColumnHeader(column: Column, sort: Option<Sort>, on_sort: EventHandler<&'static str>) -> Element {
    let Some(key) = column.sort_key else {
        return rsx! {
            th { class: HEADER_CLASS, "{column.label}" }
        };
    };

    let indicator = match &sort {
        Some(sort) if sort.field == key => match sort.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        },
        _ => "",
    };

    rsx! {
        th { class: HEADER_CLASS,
            button {
                class: "uppercase tracking-wider hover:text-white",
                onclick: move |_| on_sort.call(key),
                "{column.label}{indicator}"
            }
        }
    }
}

#[component]
fn RowGrid(section: Section, page: Page<Row>, on_delete: EventHandler<Row>) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4",
            for row in page.items.iter() {
                div { key: "{row.id}", class: "bg-gray-800 rounded-lg p-4 shadow-lg flex flex-col gap-2",
                    h3 { class: "font-bold text-lg text-white listing-cell",
                        {row.cells.first().cloned().unwrap_or_default()}
                    }
                    for (column, cell) in section.columns().iter().zip(row.cells.iter()).skip(1) {
                        p { class: "text-sm text-gray-400",
                            span { class: "text-gray-500", "{column.label}: " }
                            "{cell}"
                        }
                    }
                    div { class: "mt-auto pt-2",
                        RowActions { section, row: row.clone(), on_delete }
                    }
                }
            }
        }
    }
}

#[component]
fn RowActions(section: Section, row: Row, on_delete: EventHandler<Row>) -> Element {
    let id = row.id.clone();

    rsx! {
        div { class: "flex gap-3 text-sm",
            Link {
                to: Route::EntityDetailPage { section, id },
                class: "text-blue-400 hover:text-blue-300 underline",
                "View"
            }
            button {
                class: "text-red-400 hover:text-red-300 underline",
                onclick: move |_| on_delete.call(row.clone()),
                "Delete"
            }
        }
    }
}

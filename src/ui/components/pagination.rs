use crate::listing::page_window;
use dioxus::prelude::*;

const BUTTON_CLASS: &str =
    "px-3 py-1 rounded bg-gray-700 hover:bg-gray-600 text-white disabled:opacity-40 disabled:cursor-not-allowed";
const CURRENT_CLASS: &str = "px-3 py-1 rounded bg-blue-600 text-white";

#[component]
pub fn Pagination(page: u32, total_pages: u32, total: u64, on_page: EventHandler<u32>) -> Element {
    rsx! {
        div { class: "flex items-center justify-between",
            span { class: "text-sm text-gray-400", "Page {page} of {total_pages} · {total} result(s)" }
            div { class: "flex gap-1",
                button {
                    class: BUTTON_CLASS,
                    disabled: page <= 1,
                    onclick: move |_| on_page.call(page.saturating_sub(1).max(1)),
                    "‹ Prev"
                }
                for number in page_window(page, total_pages, 2) {
                    button {
                        key: "{number}",
                        class: if number == page { CURRENT_CLASS } else { BUTTON_CLASS },
                        onclick: move |_| on_page.call(number),
                        "{number}"
                    }
                }
                button {
                    class: BUTTON_CLASS,
                    disabled: page >= total_pages,
                    onclick: move |_| on_page.call(page + 1),
                    "Next ›"
                }
            }
        }
    }
}

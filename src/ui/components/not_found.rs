use crate::ui::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "min-h-screen bg-gray-900 flex flex-col items-center justify-center gap-4 text-gray-100",
            h1 { class: "text-3xl font-bold", "Page not found" }
            p { class: "text-gray-400", "No admin page at /{path}" }
            Link { to: Route::Dashboard {}, class: "text-blue-400 hover:text-blue-300 underline", "Back to dashboard" }
        }
    }
}

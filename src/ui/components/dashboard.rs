use super::PageMeta;
use crate::sections::Section;
use crate::ui::{use_app_context, Route};
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    let app_context = use_app_context();

    rsx! {
        PageMeta {
            title: "Dashboard",
            description: "Moderation and content management for MyManga VN",
        }
        div { class: "p-6",
            h1 { class: "text-3xl font-bold text-white", "Dashboard" }
            p { class: "text-gray-400 mt-1 mb-6", "Connected to {app_context.config.api_base_url}" }
            div { class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4",
                for section in Section::ALL {
                    Link {
                        key: "{section}",
                        to: Route::SectionPage { section },
                        class: "block bg-gray-800 hover:bg-gray-700 rounded-lg p-4 shadow transition-colors",
                        h2 { class: "text-lg font-semibold text-white", "{section.nav_label()}" }
                        p { class: "text-sm text-gray-400 mt-1", "{section.description()}" }
                    }
                }
            }
        }
    }
}

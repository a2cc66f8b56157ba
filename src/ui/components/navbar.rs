use crate::sections::Section;
use crate::ui::Route;
use dioxus::prelude::*;

use super::dialog::GlobalDialog;

const NAV_LINK_CLASS: &str = "block px-3 py-2 rounded-lg text-sm text-gray-300 hover:bg-gray-800 hover:text-white";

/// Sidebar with one link per section, around the routed page
#[component]
pub fn AdminLayout() -> Element {
    rsx! {
        div { class: "flex min-h-screen bg-gray-900 text-gray-100",
            nav { class: "w-60 shrink-0 bg-gray-950 border-r border-gray-800 p-4 space-y-1",
                Link {
                    to: Route::Dashboard {},
                    class: "block px-3 py-3 mb-4 text-lg font-bold text-white",
                    "MyManga VN Admin"
                }
                for section in Section::ALL {
                    Link {
                        key: "{section}",
                        to: Route::SectionPage { section },
                        class: NAV_LINK_CLASS,
                        active_class: "bg-gray-800 text-white",
                        "{section.nav_label()}"
                    }
                }
            }
            main { class: "flex-1 overflow-y-auto", Outlet::<Route> {} }
        }
        GlobalDialog {}
    }
}

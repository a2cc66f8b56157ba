use dioxus::prelude::*;

/// Window title and description for a page
#[component]
pub fn PageMeta(title: &'static str, description: &'static str) -> Element {
    rsx! {
        document::Title { "{title} | MyManga VN Admin" }
        document::Meta { name: "description", content: "{description}" }
    }
}

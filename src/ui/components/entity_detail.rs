use super::PageMeta;
use crate::api::{decode_data, Record};
use crate::listing::LatestResource;
use crate::sections::Section;
use crate::ui::{use_app_context, Route};
use dioxus::prelude::*;
use serde_json::Value;
use tracing::warn;

/// Routed entry for `/:section/:id`
#[component]
pub fn EntityDetailPage(section: Section, id: String) -> Element {
    rsx! {
        for key in std::iter::once(format!("{}/{}", section, id)) {
            EntityDetail { key: "{key}", section, id: id.clone() }
        }
    }
}

/// Every top-level field of one record, read-only
#[component]
fn EntityDetail(section: Section, id: String) -> Element {
    let app_context = use_app_context();
    let mut record = use_signal(LatestResource::<Record>::default);

    let id_for_fetch = id.clone();
    use_effect(move || {
        let request = record.write().begin();
        let source = app_context.source.clone();
        let id = id_for_fetch.clone();

        spawn(async move {
            let result = source
                .get(section.endpoint(), &id)
                .await
                .and_then(decode_data::<Value>)
                .map(|value| Record::from_value(&value));
            if let Err(e) = &result {
                warn!("✗ Failed to load {} #{}: {}", section, id, e);
            }
            record.write().complete(request, result);
        });
    });

    let current = record.read().clone();

    rsx! {
        PageMeta { title: section.title(), description: section.description() }
        div { class: "p-6 max-w-4xl space-y-4",
            Link {
                to: Route::SectionPage { section },
                class: "text-blue-400 hover:text-blue-300 text-sm",
                "← Back to {section.nav_label()}"
            }
            h1 { class: "text-2xl font-bold text-white", "{section.nav_label()} #{id}" }

            if current.is_loading() {
                p { class: "text-gray-400 loading-pulse", "Loading…" }
            } else if let Some(error) = current.error() {
                div { class: "bg-red-900/40 border border-red-700 rounded-lg p-4 text-red-300",
                    "{error}"
                }
            } else if let Some(loaded) = current.value() {
                dl { class: "bg-gray-800 rounded-lg shadow divide-y divide-gray-700",
                    for (key, value) in loaded.fields.iter() {
                        div { key: "{key}", class: "grid grid-cols-3 gap-4 px-4 py-3",
                            dt { class: "text-sm font-medium text-gray-400", "{key}" }
                            dd { class: "col-span-2 text-sm text-gray-100 break-words", "{value}" }
                        }
                    }
                }
            }
        }
    }
}

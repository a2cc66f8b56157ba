use crate::filter::{FieldKind, FilterField, FilterState, SearchDraft};
use crate::sections::Section;
use dioxus::prelude::*;
use tracing::warn;

const INPUT_CLASS: &str =
    "w-full px-3 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white focus:outline-none focus:border-blue-500";

/// Filter inputs for a section. Edits stay local until submitted.
#[component]
pub fn SearchForm(
    section: Section,
    applied: FilterState,
    on_search: EventHandler<FilterState>,
    on_reset: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(|| SearchDraft::new(&applied));
    let mut form_error = use_signal(|| None::<String>);

    let mut submit = move || {
        let result = draft.read().submit();
        match result {
            Ok(filters) => {
                form_error.set(None);
                on_search.call(filters);
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };

    let clear = move |_: MouseEvent| {
        draft.write().clear();
        form_error.set(None);
        on_reset.call(());
    };

    rsx! {
        div { class: "bg-gray-800 rounded-lg p-4 shadow",
            div { class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4",
                for field in section.filter_fields().iter().copied() {
                    FilterInput {
                        key: "{field.name}",
                        field,
                        value: draft.read().value(field.name).to_string(),
                        on_change: move |value: String| {
                            if let Err(e) = draft.write().edit(field.name, value) {
                                warn!("Ignoring edit: {}", e);
                            }
                        },
                        on_enter: move |_| submit(),
                    }
                }
            }
            if let Some(error) = form_error() {
                p { class: "mt-3 text-sm text-red-400", "{error}" }
            }
            div { class: "mt-4 flex gap-2",
                button {
                    class: "px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg",
                    onclick: move |_| submit(),
                    "Search"
                }
                button {
                    class: "px-4 py-2 bg-gray-700 hover:bg-gray-600 text-white rounded-lg",
                    onclick: clear,
                    "Clear"
                }
            }
        }
    }
}

#[component]
fn FilterInput(
    field: FilterField,
    value: String,
    on_change: EventHandler<String>,
    on_enter: EventHandler<()>,
) -> Element {
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };

    let control = match field.kind {
        FieldKind::Select(choices) => rsx! {
            select {
                class: INPUT_CLASS,
                value: "{value}",
                onchange: move |e: FormEvent| on_change.call(e.value()),
                for choice in choices.iter() {
                    option {
                        key: "{choice.value}",
                        value: "{choice.value}",
                        selected: choice.value == value,
                        "{choice.label}"
                    }
                }
            }
        },
        FieldKind::Date => rsx! {
            input {
                r#type: "date",
                class: INPUT_CLASS,
                value: "{value}",
                oninput: move |e: FormEvent| on_change.call(e.value()),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        on_enter.call(());
                    }
                },
            }
        },
        FieldKind::Text => rsx! {
            input {
                r#type: "text",
                class: INPUT_CLASS,
                placeholder: "{field.label}",
                value: "{value}",
                oninput: move |e: FormEvent| on_change.call(e.value()),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        on_enter.call(());
                    }
                },
            }
        },
    };

    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-300 mb-1", "{label}" }
            {control}
        }
    }
}

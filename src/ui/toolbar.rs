use std::time::Duration;

use dioxus::prelude::*;

use crate::state::i18n::{self, Language};
use crate::state::toast::{ToastKind, ToastList};
use crate::ui::actions;
use crate::ui::modal::use_modal;

#[component]
pub fn Toolbar(
    language: Signal<Language>,
    toasts: Signal<ToastList>,
    toast_duration: Duration,
) -> Element {
    // Actions only: opening a modal must not re-render the toolbar.
    let modal = use_modal();
    let current_language = *language.read();

    let language_label = i18n::tr(current_language, "language.label");
    let modal_title = i18n::tr(current_language, "modal.title");
    let confirm_label = i18n::tr(current_language, "modal.open_confirm");
    let form_label = i18n::tr(current_language, "modal.open_form");
    let bare_label = i18n::tr(current_language, "modal.open_bare");
    let toast_title = i18n::tr(current_language, "toast.title");

    let toast_buttons = [
        (ToastKind::Success, "toast.success", "btn-success"),
        (ToastKind::Error, "toast.error", "btn-danger"),
        (ToastKind::Warning, "toast.warning", "btn-warning"),
        (ToastKind::Info, "toast.info", "btn-info"),
    ];

    rsx! {
        div { class: "toolbar",
            // Language group
            div { class: "toolbar-group",
                span { class: "toolbar-label", "{language_label}" }
                select {
                    class: "toolbar-select toolbar-select-sm",
                    id: "select-language",
                    value: "{current_language.code()}",
                    onchange: move |evt| {
                        if let Some(next_language) = Language::from_code(&evt.value()) {
                            language.set(next_language);
                        }
                    },
                    for lang in Language::all() {
                        option { value: "{lang.code()}", "{lang.label(current_language)}" }
                    }
                }
            }
            div { class: "toolbar-separator" }

            // Modal group
            div { class: "toolbar-group",
                span { class: "toolbar-label", "{modal_title}" }
                button {
                    class: "toolbar-btn",
                    id: "btn-modal-confirm",
                    onclick: move |_| {
                        actions::open_confirm_modal(modal, current_language, toasts, toast_duration);
                    },
                    "{confirm_label}"
                }
                button {
                    class: "toolbar-btn",
                    id: "btn-modal-form",
                    onclick: move |_| {
                        actions::open_form_modal(modal, current_language, toasts, toast_duration);
                    },
                    "{form_label}"
                }
                button {
                    class: "toolbar-btn",
                    id: "btn-modal-bare",
                    onclick: move |_| {
                        actions::open_bare_modal(modal, current_language, toasts, toast_duration);
                    },
                    "{bare_label}"
                }
            }
            div { class: "toolbar-separator" }

            // Toast group
            div { class: "toolbar-group",
                span { class: "toolbar-label", "{toast_title}" }
                for (kind, key, class) in toast_buttons {
                    button {
                        class: "toolbar-btn {class}",
                        onclick: move |_| {
                            actions::push_toast(toasts, current_language, key, kind, toast_duration);
                        },
                        "{i18n::tr(current_language, key)}"
                    }
                }
            }
        }
    }
}

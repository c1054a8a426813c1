use std::time::Duration;

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::io::json_io;
use crate::state::data_model::TableData;
use crate::state::i18n::{self, Language};
use crate::state::modal_store::{ModalConfig, ModalSize};
use crate::state::toast::{ToastKind, ToastList};
use crate::ui::modal::ModalController;

const SAMPLE_ROWS: &str = include_str!("../../assets/sample_rows.json");

/// Rows for the demo table: the configured seed file, or the bundled sample.
/// A load failure falls back to the sample and reports the error.
pub fn load_seed_rows(config: &AppConfig) -> (TableData, Option<String>) {
    let Some(path) = config.rows_path.as_ref() else {
        return (sample_rows(), None);
    };

    match json_io::load_rows(path) {
        Ok(rows) => {
            tracing::info!(path = %path.display(), rows = rows.len(), "loaded seed rows");
            (rows, None)
        }
        Err(err) => {
            tracing::error!(path = %path.display(), %err, "failed to load seed rows");
            (sample_rows(), Some(err.to_string()))
        }
    }
}

pub fn sample_rows() -> TableData {
    json_io::parse_rows(SAMPLE_ROWS).unwrap_or_else(|err| {
        tracing::error!(%err, "bundled sample rows are invalid");
        TableData::new()
    })
}

pub fn push_toast(
    mut toasts: Signal<ToastList>,
    language: Language,
    key: &'static str,
    kind: ToastKind,
    duration: Duration,
) {
    toasts.write().push(i18n::tr(language, key), kind, duration);
}

pub fn open_confirm_modal(
    modal: ModalController,
    language: Language,
    toasts: Signal<ToastList>,
    duration: Duration,
) {
    let body = i18n::tr(language, "modal.confirm.body");
    let cancel_label = i18n::tr(language, "modal.confirm.cancel");
    let ok_label = i18n::tr(language, "modal.confirm.ok");

    modal.show_modal(
        ModalConfig::new(move || {
            rsx! {
                p { class: "modal-text", "{body}" }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| modal.close_modal(),
                        "{cancel_label}"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            push_toast(toasts, language, "toast.confirmed", ToastKind::Success, duration);
                            modal.close_modal();
                        },
                        "{ok_label}"
                    }
                }
            }
        })
        .title(i18n::tr(language, "modal.confirm.title"))
        .size(ModalSize::Md),
    );
}

pub fn open_form_modal(
    modal: ModalController,
    language: Language,
    toasts: Signal<ToastList>,
    duration: Duration,
) {
    modal.show_modal(
        ModalConfig::new(move || rsx! { FormModalBody { language, toasts, duration } })
            .title(i18n::tr(language, "modal.form.title"))
            .size(ModalSize::Lg),
    );
}

pub fn open_bare_modal(
    modal: ModalController,
    language: Language,
    toasts: Signal<ToastList>,
    duration: Duration,
) {
    let body = i18n::tr(language, "modal.bare.body");
    let close_label = i18n::tr(language, "modal.close");

    modal.show_modal(
        ModalConfig::new(move || {
            rsx! {
                p { class: "modal-text", "{body}" }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| modal.close_modal(),
                        "{close_label}"
                    }
                }
            }
        })
        .size(ModalSize::Sm)
        .show_close_button(false)
        .on_close(move || {
            push_toast(toasts, language, "toast.modal_closed", ToastKind::Info, duration);
        }),
    );
}

#[component]
fn FormModalBody(language: Language, toasts: Signal<ToastList>, duration: Duration) -> Element {
    let mut name = use_signal(String::new);
    let modal = ModalController;
    let body = i18n::tr(language, "modal.form.body");
    let name_label = i18n::tr(language, "modal.form.name");
    let submit_label = i18n::tr(language, "modal.form.submit");

    rsx! {
        p { class: "modal-text", "{body}" }
        form {
            class: "modal-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                let submitted = name.read().clone();
                tracing::info!(name = %submitted, "demo form submitted");
                push_toast(toasts, language, "toast.submitted", ToastKind::Success, duration);
                modal.close_modal();
            },
            label { class: "form-label", "{name_label}" }
            input {
                class: "form-input",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            div { class: "modal-actions",
                button { class: "btn btn-primary", r#type: "submit",
                    "{submit_label}"
                }
            }
        }
    }
}

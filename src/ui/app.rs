use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::state::columns::{self, ColumnDef};
use crate::state::data_model::TableData;
use crate::state::i18n::{self, Language};
use crate::state::memo::Memo;
use crate::state::toast::ToastList;
use crate::ui::actions;
use crate::ui::modal::GlobalModal;
use crate::ui::table::EditableTable;
use crate::ui::toast::ToastStack;
use crate::ui::toolbar::Toolbar;

const STYLES: Asset = asset!("/assets/styles.css");

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let language = use_context_provider(|| Signal::new(config.language));
    let toasts = use_context_provider(|| Signal::new(ToastList::new()));

    let (seed_rows, load_error) = use_hook(|| actions::load_seed_rows(&config));
    let mut table_rows = use_signal(move || seed_rows);
    let mut column_memo = use_hook(|| CopyValue::new(Memo::<Language, [ColumnDef]>::new()));

    let current_language = language();
    let columns = column_memo
        .write()
        .get_or_compute(&current_language, |language| columns::localized_columns(*language));
    let row_count = table_rows.read().len();

    let title = i18n::tr(current_language, "app.title");
    let subtitle = i18n::tr(current_language, "app.subtitle");
    let table_title = i18n::tr(current_language, "table.title");
    let rows_label = i18n::tr(current_language, "table.rows_changed");
    let load_error_label = i18n::tr(current_language, "error.load_rows");

    rsx! {
        document::Stylesheet { href: STYLES }
        div { class: "app",
            header { class: "app-header",
                h1 { "{title}" }
                p { class: "app-subtitle", "{subtitle}" }
            }
            Toolbar { language, toasts, toast_duration: config.toast_duration }
            if let Some(err) = load_error {
                p { class: "error-message", id: "load-error", "{load_error_label}: {err}" }
            }
            section { class: "card",
                h2 { class: "card-title", "{table_title}" }
                EditableTable {
                    rows: table_rows(),
                    columns,
                    page_size: config.page_size,
                    language: current_language,
                    on_data_change: move |rows: TableData| {
                        tracing::debug!(rows = rows.len(), "table data changed");
                        table_rows.set(rows);
                    },
                }
                p { class: "muted", id: "row-count", "{rows_label}: {row_count}" }
            }
            Widgets { language: current_language }
        }
        ToastStack { toasts }
        GlobalModal {}
    }
}

#[component]
fn Widgets(language: Language) -> Element {
    let title = i18n::tr(language, "widgets.title");
    let badge = i18n::tr(language, "widgets.badge");
    let alert = i18n::tr(language, "widgets.alert");

    rsx! {
        section { class: "card",
            h2 { class: "card-title", "{title}" }
            div { class: "widget-row",
                for variant in ["primary", "secondary", "outline", "danger", "ghost"] {
                    button { class: "btn btn-{variant}", "{variant}" }
                }
            }
            div { class: "widget-row",
                span { class: "badge badge-success", "{badge}" }
                span { class: "avatar", "AB" }
                div { class: "progress", div { class: "progress-bar", style: "width: 60%;" } }
                span { class: "spinner" }
            }
            div { class: "alert alert-info", "{alert}" }
        }
    }
}

use std::rc::Rc;

use dioxus::prelude::{Key, *};
use serde_json::Value;

use crate::state::cell_edit::CellEditController;
use crate::state::columns::{ColumnDef, ColumnKind};
use crate::state::data_model::TableData;
use crate::state::i18n::{self, Language};
use crate::state::row_store::{RowId, RowStore, StoredRow};
use crate::state::settle::SettleQueue;
use crate::state::table_engine::{PageSize, TableEngine};

#[component]
pub fn EditableTable(
    rows: TableData,
    columns: Rc<[ColumnDef]>,
    #[props(default)] page_size: PageSize,
    #[props(default)] language: Language,
    on_data_change: Option<EventHandler<TableData>>,
) -> Element {
    let mut engine = use_signal({
        let rows = rows.clone();
        let columns = columns.clone();
        move || {
            let store = RowStore::from_rows(rows).unwrap_or_else(|err| {
                tracing::error!(%err, "rejecting table rows");
                RowStore::new()
            });
            let mut engine = TableEngine::from_store(store, columns);
            engine.set_page_size(page_size);
            engine
        }
    });
    let mut settle = use_hook(|| CopyValue::new(SettleQueue::new()));

    // A new row sequence from the parent replaces the store wholesale.
    use_effect(use_reactive((&rows,), move |(rows,)| {
        if engine.peek().store().matches(&rows) {
            return;
        }
        if let Err(err) = engine.write().replace_rows(rows) {
            tracing::error!(%err, "rejecting replacement rows");
        }
    }));

    use_effect(use_reactive((&columns,), move |(columns,)| {
        if !Rc::ptr_eq(engine.peek().columns(), &columns) {
            engine.write().set_columns(columns);
        }
    }));

    // Runs after each render that follows a commit.
    use_effect(move || {
        let snapshot = engine.read().store().to_rows();
        let ticks = settle.write().drain();
        if let Some(handler) = on_data_change {
            for _ in 0..ticks {
                handler.call(snapshot.clone());
            }
        }
    });

    let snapshot = engine.read();
    let page_rows: Vec<StoredRow> = snapshot.page_rows().to_vec();
    let table_columns = snapshot.columns().clone();
    let page_index = snapshot.page_index();
    let page_count = snapshot.page_count();
    let current_size = snapshot.page_size();
    let can_previous = snapshot.can_previous();
    let can_next = snapshot.can_next();
    let select_column = table_columns
        .iter()
        .find(|column| column.kind == ColumnKind::Checkbox)
        .map(|column| column.key.clone());
    drop(snapshot);

    let placeholder = i18n::tr(language, "cell.placeholder").to_string();
    let empty_label = i18n::tr(language, "table.empty");
    let add_row_label = i18n::tr(language, "table.add_row");
    let delete_selected_label = i18n::tr(language, "table.delete_selected");
    let page_label = i18n::tr(language, "table.page");
    let show_label = i18n::tr(language, "table.show");

    rsx! {
        div { class: "table-container", id: "table-container",
            table {
                thead {
                    tr {
                        for column in table_columns.iter() {
                            th { key: "{column.key}", "{column.header}" }
                        }
                    }
                }
                tbody {
                    if page_rows.is_empty() {
                        tr {
                            td { class: "empty-message", colspan: "{table_columns.len()}", "{empty_label}" }
                        }
                    }
                    for row in page_rows.iter() {
                        TableRow {
                            key: "{row.id}",
                            row: row.clone(),
                            columns: table_columns.clone(),
                            engine,
                            settle,
                            placeholder: placeholder.clone(),
                        }
                    }
                }
            }
        }
        div { class: "table-actions",
            button {
                class: "toolbar-btn",
                id: "btn-add-row",
                onclick: move |_| {
                    let added = engine.with_mut(|engine| {
                        let row = engine.blank_row();
                        engine.push_row(row)
                    });
                    match added {
                        Ok(_) => settle.write().schedule(),
                        Err(err) => tracing::error!(%err, "could not add row"),
                    }
                },
                "\u{2795} {add_row_label}"
            }
            if let Some(select_key) = select_column {
                button {
                    class: "toolbar-btn toolbar-btn-danger",
                    id: "btn-delete-selected",
                    onclick: move |_| {
                        let removed = engine.with_mut(|engine| engine.remove_rows_where(&select_key, "1"));
                        if removed > 0 {
                            settle.write().schedule();
                        }
                    },
                    "\u{1F5D1} {delete_selected_label}"
                }
            }
        }
        div { class: "pagination",
            div { class: "pagination-nav",
                button {
                    id: "btn-first-page",
                    disabled: !can_previous,
                    onclick: move |_| {
                        engine.write().first_page();
                    },
                    "<<"
                }
                button {
                    id: "btn-previous-page",
                    disabled: !can_previous,
                    onclick: move |_| {
                        engine.write().previous_page();
                    },
                    "<"
                }
                button {
                    id: "btn-next-page",
                    disabled: !can_next,
                    onclick: move |_| {
                        engine.write().next_page();
                    },
                    ">"
                }
                button {
                    id: "btn-last-page",
                    disabled: !can_next,
                    onclick: move |_| {
                        engine.write().last_page();
                    },
                    ">>"
                }
            }
            div { class: "pagination-info",
                span { "{page_label} " strong { "{page_index + 1} / {page_count}" } }
                select {
                    id: "select-page-size",
                    value: "{current_size.get()}",
                    onchange: move |evt| {
                        let size = evt
                            .value()
                            .parse::<usize>()
                            .ok()
                            .and_then(|value| PageSize::try_from(value).ok());
                        if let Some(size) = size {
                            engine.write().set_page_size(size);
                        }
                    },
                    for size in PageSize::ALL {
                        option { value: "{size.get()}", "{show_label} {size.get()}" }
                    }
                }
            }
        }
    }
}

#[component]
fn TableRow(
    row: StoredRow,
    columns: Rc<[ColumnDef]>,
    engine: Signal<TableEngine>,
    settle: CopyValue<SettleQueue>,
    placeholder: String,
) -> Element {
    rsx! {
        tr { class: "table-row", id: "row-{row.id}",
            for column in columns.iter() {
                td { key: "{column.key}", class: "table-cell",
                    {match column.kind {
                        ColumnKind::Checkbox => rsx! {
                            CheckboxCell {
                                row_id: row.id.clone(),
                                column_key: column.key.clone(),
                                checked: row.text(&column.key) == "1",
                                engine,
                                settle,
                            }
                        },
                        ColumnKind::Text if column.editable => rsx! {
                            EditableCell {
                                row_id: row.id.clone(),
                                column: column.clone(),
                                committed: row.fields.get(&column.key).cloned().unwrap_or(Value::Null),
                                engine,
                                settle,
                                placeholder: placeholder.clone(),
                            }
                        },
                        ColumnKind::Text => rsx! {
                            span { class: "cell-readonly", "{readonly_text(&row, &column.key)}" }
                        },
                    }}
                }
            }
        }
    }
}

#[component]
fn CheckboxCell(
    row_id: RowId,
    column_key: String,
    checked: bool,
    engine: Signal<TableEngine>,
    settle: CopyValue<SettleQueue>,
) -> Element {
    rsx! {
        div { class: "cell-checkbox",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |_| {
                    let mut engine = engine;
                    let mut settle = settle;
                    if engine.with_mut(|engine| engine.toggle_checkbox(&row_id, &column_key)) {
                        settle.write().schedule();
                    }
                },
            }
        }
    }
}

#[component]
fn EditableCell(
    row_id: RowId,
    column: ColumnDef,
    committed: Value,
    engine: Signal<TableEngine>,
    settle: CopyValue<SettleQueue>,
    placeholder: String,
) -> Element {
    let mut controller = use_signal({
        let committed = committed.clone();
        move || CellEditController::new(committed)
    });
    let mut input_ref = use_signal(|| None::<Rc<MountedData>>);

    // The store is authoritative: an outside change resets the draft.
    use_effect(use_reactive((&committed,), move |(committed,)| {
        if controller.peek().committed() != &committed {
            controller.write().sync_committed(committed);
        }
    }));

    let (draft, error) = {
        let ctl = controller.read();
        (ctl.draft().to_string(), ctl.error().map(str::to_string))
    };
    let input_class = if error.is_some() {
        "cell-input cell-input-error"
    } else {
        "cell-input"
    };
    let blur_row_id = row_id.clone();
    let blur_column_key = column.key.clone();
    let key_row_id = row_id.clone();
    let key_column_key = column.key.clone();

    rsx! {
        div { class: "cell-editor",
            input {
                class: "{input_class}",
                r#type: "text",
                value: "{draft}",
                placeholder: "{placeholder}",
                onmounted: move |evt| input_ref.set(Some(evt.data())),
                oninput: move |evt| controller.write().input(evt.value()),
                onblur: move |_| {
                    commit_edit(engine, controller, settle, &blur_row_id, &blur_column_key);
                },
                onkeydown: move |evt| match evt.key() {
                    Key::Enter => {
                        commit_edit(engine, controller, settle, &key_row_id, &key_column_key);
                        if controller.peek().error().is_none() {
                            release_focus(input_ref);
                        }
                    }
                    Key::Escape => {
                        controller.write().cancel();
                        release_focus(input_ref);
                    }
                    _ => {}
                },
            }
            if let Some(error) = error {
                p { class: "cell-error", "{error}" }
            }
        }
    }
}

fn commit_edit(
    mut engine: Signal<TableEngine>,
    mut controller: Signal<CellEditController>,
    mut settle: CopyValue<SettleQueue>,
    row_id: &RowId,
    column_key: &str,
) {
    let changed = engine.with_mut(|engine| {
        engine.commit_cell(row_id, column_key, &mut controller.write())
    });
    if changed {
        settle.write().schedule();
    }
}

fn release_focus(input_ref: Signal<Option<Rc<MountedData>>>) {
    let Some(mounted) = input_ref.peek().clone() else {
        return;
    };
    spawn(async move {
        let _ = mounted.set_focus(false).await;
    });
}

fn readonly_text(row: &StoredRow, column: &str) -> String {
    let text = row.text(column);
    if text.is_empty() {
        "-".to_string()
    } else {
        text
    }
}

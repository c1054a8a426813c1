use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::state::modal_store::{ModalConfig, ModalStore};
use crate::state::scroll_lock::{ScrollHost, ScrollLock};

/// The one modal store of the process. Only [`GlobalModal`] reads it.
pub static MODAL_STORE: GlobalSignal<ModalStore> = Signal::global(ModalStore::new);

/// Action-only handle on [`MODAL_STORE`].
///
/// Holding one never subscribes the caller to modal state, so opening or
/// closing a modal does not re-render it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalController;

impl ModalController {
    pub fn show_modal(self, config: ModalConfig) {
        MODAL_STORE.write().open(config);
    }

    pub fn close_modal(self) {
        if !MODAL_STORE.peek().is_open() {
            return;
        }
        // Run the hook after the write guard is gone so it may reopen a modal.
        let on_close = MODAL_STORE.write().begin_close();
        if let Some(on_close) = on_close {
            on_close();
        }
    }
}

pub fn use_modal() -> ModalController {
    ModalController
}

/// Body scroll of the webview document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentScroll;

impl ScrollHost for DocumentScroll {
    fn suspend_scroll(&self) {
        let _ = document::eval("document.body.style.overflow = 'hidden';");
    }

    fn restore_scroll(&self) {
        let _ = document::eval("document.body.style.overflow = '';");
    }
}

#[component]
pub fn GlobalModal() -> Element {
    let modal = use_modal();
    let scroll_lock = use_hook(|| Rc::new(RefCell::new(None::<ScrollLock<DocumentScroll>>)));

    use_hook(|| tracing::debug!("global modal mounted"));

    use_effect({
        let scroll_lock = scroll_lock.clone();
        move || {
            let open = MODAL_STORE.read().is_open();
            let mut slot = scroll_lock.borrow_mut();
            if open && slot.is_none() {
                *slot = Some(ScrollLock::acquire(DocumentScroll));
            } else if !open {
                slot.take();
            }
        }
    });

    use_drop({
        let scroll_lock = scroll_lock.clone();
        move || {
            scroll_lock.borrow_mut().take();
            tracing::debug!("global modal unmounted");
        }
    });

    let Some(config) = MODAL_STORE.read().config().cloned() else {
        return rsx! {};
    };

    let panel_class = format!("modal-panel {}", config.size.max_width_class());
    let body = (config.content)();

    rsx! {
        div {
            class: "modal-backdrop",
            id: "modal-backdrop",
            onclick: move |_| modal.close_modal(),
            div {
                class: "{panel_class}",
                onclick: move |evt| evt.stop_propagation(),
                if config.shows_header() {
                    div { class: "modal-header",
                        if let Some(title) = config.title.as_ref() {
                            h2 { class: "modal-title", "{title}" }
                        }
                        if config.show_close_button {
                            button {
                                class: "modal-close",
                                id: "modal-close",
                                onclick: move |_| modal.close_modal(),
                                "\u{2715}"
                            }
                        }
                    }
                }
                div { class: "modal-body", {body} }
            }
        }
    }
}

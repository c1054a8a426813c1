use dioxus::prelude::*;

use crate::state::toast::{Toast, ToastId, ToastList, TOAST_FADE};

#[component]
pub fn ToastStack(toasts: Signal<ToastList>) -> Element {
    let items = toasts.read().items().to_vec();

    rsx! {
        div { class: "toast-stack", id: "toast-stack",
            for toast in items {
                ToastItem { key: "{toast.id}", toast, toasts }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: Signal<ToastList>) -> Element {
    let mut visible = use_signal(|| true);
    let id = toast.id;
    let duration = toast.duration;

    let timer = use_hook(move || {
        spawn(async move {
            tokio::time::sleep(duration).await;
            visible.set(false);
            fade_out(toasts, id).await;
        })
    });

    // Teardown must never leave the timer armed.
    use_drop(move || timer.cancel());

    let fade_class = if visible() { "toast-visible" } else { "toast-hidden" };

    rsx! {
        div { class: "toast {toast.kind.class()} {fade_class}",
            span { "{toast.message}" }
            button {
                class: "toast-close",
                onclick: move |_| {
                    timer.cancel();
                    visible.set(false);
                    spawn(fade_out(toasts, id));
                },
                "\u{2715}"
            }
        }
    }
}

async fn fade_out(mut toasts: Signal<ToastList>, id: ToastId) {
    tokio::time::sleep(TOAST_FADE).await;
    toasts.write().dismiss(id);
}

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

use kuro::{
    config::site,
    toast::{Toast, ToastQueue},
};

pub static TOASTS: GlobalSignal<ToastQueue> = Signal::global(|| ToastQueue::new(site().toast.limit));

// show a notification; it dismisses itself after the configured time
pub fn push_toast(title: &str, description: &str) {
    let id = TOASTS.write().push(title, description);

    let task = Timeout::new(site().toast.duration_ms, move || {
        TOASTS.write().dismiss(id);
    });
    task.forget();
}

#[derive(Clone, PartialEq, Props)]
struct ToastCardProps {
    toast: Toast,
}

#[component]
fn ToastCard(props: ToastCardProps) -> Element {
    let id = props.toast.id;

    rsx! {
        div { class: "toast", role: "status",
            div { class: "toast-title", "{props.toast.title}" }
            div { class: "toast-description", "{props.toast.description}" }
            button {
                class: "btn-ghost toast-close",
                r#type: "button",
                "aria-label": "Dismiss",
                onclick: move |_| TOASTS.write().dismiss(id),
                "×"
            }
        }
    }
}

#[component]
pub fn Toaster() -> Element {
    let toasts = {
        let queue = TOASTS.read();
        if queue.is_empty() {
            return rsx! {};
        }
        queue.items().to_vec()
    };

    rsx! {
        div { class: "toast-viewport",
            for toast in toasts {
                ToastCard { key: "{toast.id}", toast }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toaster_renders_nothing_until_pushed() {
        let mut dom = VirtualDom::new(Toaster);
        dom.rebuild_in_place();
        assert!(!dioxus_ssr::render(&dom).contains("toast-viewport"));

        dom.in_runtime(|| TOASTS.write().push("Message Sent", "Thank you"));
        dom.render_immediate_to_vec();

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("toast-viewport"));
        assert!(html.contains("Message Sent"));
        assert!(html.contains("Thank you"));
    }
}

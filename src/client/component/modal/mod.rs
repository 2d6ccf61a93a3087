pub mod confirmation_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;

/// Dialog rendered over the current page. Escape and backdrop clicks close it
/// unless `prevent_close` is set, e.g. while a request is in flight.
#[component]
pub fn Modal(
    mut show: Signal<bool>,
    title: String,
    #[props(default = false)] prevent_close: bool,
    #[props(default = "max-w-lg")] width: &'static str,
    children: Element,
) -> Element {
    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    });

    let mut close = move || {
        if !prevent_close {
            show.set(false);
        }
    };

    rsx!(
        div {
            class: if show() { "modal modal-open" } else { "modal" },
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    close();
                }
            },
            div {
                class: "modal-box border border-base-300 w-11/12 {width}",
                div {
                    class: "flex justify-between items-center mb-4",
                    h3 { class: "font-bold text-lg", "{title}" }
                    if !prevent_close {
                        button {
                            class: "btn btn-sm btn-circle btn-ghost",
                            onclick: move |_| close(),
                            "✕"
                        }
                    }
                }
                div { {children} }
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| close(),
            }
        }
    )
}

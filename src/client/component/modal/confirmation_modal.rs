use dioxus::prelude::*;

use super::Modal;

/// Yes/no dialog for destructive actions such as deleting a backup.
///
/// With `require_text` set, the confirm button stays disabled until that exact text has
/// been typed, for deletions that cannot be undone.
#[component]
pub fn ConfirmationModal(
    mut show: Signal<bool>,
    title: String,
    message: Element,
    confirm_text: String,
    #[props(default = "btn-error".to_string())] confirm_class: String,
    require_text: Option<String>,
    is_processing: bool,
    on_confirm: EventHandler<()>,
) -> Element {
    let mut typed = use_signal(String::new);

    // Start every opening with an empty input
    use_effect(move || {
        if !show() {
            typed.set(String::new());
        }
    });

    let confirmed = confirmation_matches(require_text.as_deref(), &typed());

    rsx!(
        Modal {
            show,
            title,
            prevent_close: is_processing,
            {message}
            if let Some(expected) = require_text.clone() {
                label {
                    class: "form-control mt-4",
                    span {
                        class: "label-text mb-1",
                        "Type "
                        code { "{expected}" }
                        " to confirm"
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        value: "{typed}",
                        disabled: is_processing,
                        oninput: move |evt| typed.set(evt.value()),
                    }
                }
            }
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    disabled: is_processing,
                    onclick: move |_| show.set(false),
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn {confirm_class}",
                    disabled: is_processing || !confirmed,
                    onclick: move |_| on_confirm.call(()),
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                    }
                    "{confirm_text}"
                }
            }
        }
    )
}

/// Surrounding whitespace is ignored; case is not.
fn confirmation_matches(expected: Option<&str>, typed: &str) -> bool {
    match expected {
        Some(expected) => typed.trim() == expected,
        None => true,
    }
}

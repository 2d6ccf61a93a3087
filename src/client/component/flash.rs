use dioxus::prelude::*;

use crate::client::store::flash::FlashState;

/// Messages stored under `flash_key`, each dismissible.
#[component]
pub fn FlashMessages(flash_key: String) -> Element {
    let mut flash = use_context::<Signal<FlashState>>();
    let messages: Vec<_> = flash.read().for_key(&flash_key).cloned().collect();

    rsx!(
        for (index, message) in messages.into_iter().enumerate() {
            div {
                key: "{index}",
                class: "alert {message.kind.alert_class()} mb-4 flex justify-between",
                span { "{message.message}" }
                button {
                    class: "btn btn-xs btn-ghost",
                    onclick: {
                        let flash_key = flash_key.clone();
                        move |_| flash.write().clear_key(&flash_key)
                    },
                    "✕"
                }
            }
        }
    )
}

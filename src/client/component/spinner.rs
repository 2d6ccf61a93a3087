use dioxus::prelude::*;

use crate::client::hook::use_debounced_flag;

/// Inline loading indicator that stays hidden for requests which finish quickly.
#[component]
pub fn LoadingIndicator(loading: Signal<bool>) -> Element {
    let visible = use_debounced_flag(loading);

    rsx!(
        if visible() {
            span { class: "loading loading-spinner loading-sm" }
        }
    )
}

use dioxus::prelude::*;

use crate::client::{component::ErrorPage, config::ClientConfig};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let config = use_context::<ClientConfig>();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Title { "Not Found | {config.site_name}" }
        ErrorPage { status: 404, message: format!("Nothing was found at {}.", path) }
    }
}

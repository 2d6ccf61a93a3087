use dioxus::prelude::*;

use crate::client::api::PaginationMeta;

/// Previous/next controls for a panel list. Pages are 1-indexed, as the API reports them.
#[component]
pub fn Pagination(meta: PaginationMeta, on_page_change: EventHandler<u64>) -> Element {
    if meta.total_pages <= 1 {
        return rsx!();
    }

    let first = meta.current_page.saturating_sub(1) * meta.per_page + 1;
    let last = (first + meta.count).saturating_sub(1);
    let current = meta.current_page;

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-4",
            span {
                class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                "Showing {first} to {last} of {meta.total}"
            }
            div {
                class: "join",
                button {
                    class: "join-item btn btn-xs sm:btn-sm",
                    disabled: !meta.has_previous(),
                    onclick: move |_| on_page_change.call(current.saturating_sub(1).max(1)),
                    "«"
                }
                button {
                    class: "join-item btn btn-xs sm:btn-sm btn-disabled",
                    "Page {meta.current_page} of {meta.total_pages}"
                }
                button {
                    class: "join-item btn btn-xs sm:btn-sm",
                    disabled: !meta.has_next(),
                    onclick: move |_| on_page_change.call(current + 1),
                    "»"
                }
            }
        }
    )
}

mod locations;
mod nodes;
mod users;

pub use locations::AdminLocations;
pub use nodes::AdminNodes;
pub use users::AdminUsers;

use dioxus::prelude::*;

use crate::client::router::Route;

#[derive(Clone, Copy, PartialEq)]
pub enum AdminTab {
    Nodes,
    Locations,
    Users,
}

#[component]
pub fn AdminTabs(active_tab: AdminTab) -> Element {
    let tab_class = |tab: AdminTab| {
        if active_tab == tab {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    rsx! {
        h1 {
            class: "text-lg sm:text-2xl mb-6",
            "Admin Panel"
        }
        div {
            role: "tablist",
            class: "tabs tabs-bordered mb-6",
            Link {
                to: Route::AdminNodes {},
                class: tab_class(AdminTab::Nodes),
                "Nodes"
            }
            Link {
                to: Route::AdminLocations {},
                class: tab_class(AdminTab::Locations),
                "Locations"
            }
            Link {
                to: Route::AdminUsers {},
                class: tab_class(AdminTab::Users),
                "Users"
            }
        }
    }
}

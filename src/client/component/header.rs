use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaRightFromBracket, FaServer},
    Icon,
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::{config::ClientConfig, router::Route, store::user::UserState};

#[cfg(feature = "web")]
use crate::client::api::auth::logout;

#[component]
pub fn Header() -> Element {
    let config = use_context::<ClientConfig>();
    let mut user_store = use_context::<Signal<UserState>>();
    let nav = navigator();

    let user_logged_in = user_store.read().user.is_some();
    let user_is_admin = user_store.read().is_admin();
    let fetch_completed = user_store.read().fetched;

    let on_logout = move |_: MouseEvent| {
        #[cfg(feature = "web")]
        spawn(async move {
            if let Err(err) = logout().send().await {
                tracing::error!("Failed to log out: {}", err);
            }
            user_store.set(UserState::signed_out());
            nav.push(Route::Login {});
        });
        #[cfg(not(feature = "web"))]
        nav.push(Route::Login {});
    };

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Dashboard {},
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 32,
                        height: 32,
                        icon: FaServer
                    }
                    p {
                        class: "md:text-xl text-wrap",
                        "{config.site_name}"
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if fetch_completed && user_logged_in {
                if user_is_admin {
                    Link {
                        to: Route::AdminNodes {},
                        class: "btn btn-outline",
                        "Admin"
                    }
                }
                button {
                    class: "btn btn-outline flex gap-2 items-center",
                    onclick: on_logout,
                    Icon {
                        width: 18,
                        height: 18,
                        icon: FaRightFromBracket
                    }
                    "Logout"
                }
            } else if fetch_completed {
                Link {
                    to: Route::Login {},
                    class: "btn btn-outline",
                    "Login"
                }
            }
        }
    })
}

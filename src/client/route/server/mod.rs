mod backups;
mod file_edit;
mod files;
mod schedules;

pub use backups::ServerBackups;
pub use file_edit::FileEdit;
pub use files::{ServerDirectory, ServerFiles};
pub use schedules::ServerSchedules;

use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        config::ClientConfig,
        model::cache::Cache,
        router::Route,
        store::server::ServerState,
    },
    model::server::{PowerSignal, ServerDetailsDto},
};

#[cfg(feature = "web")]
use crate::client::api::server::{get_server_details, send_power_signal};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ServerTab {
    Files,
    Backups,
    Schedules,
}

impl ServerTab {
    fn of(route: &Route) -> Option<Self> {
        match route {
            Route::ServerFiles { .. } | Route::ServerDirectory { .. } | Route::FileEdit { .. } => {
                Some(ServerTab::Files)
            }
            Route::ServerBackups { .. } => Some(ServerTab::Backups),
            Route::ServerSchedules { .. } => Some(ServerTab::Schedules),
            _ => None,
        }
    }
}

/// Loads the server named in the route and shares it with the pages below.
#[component]
pub fn ServerLayout(id: String) -> Element {
    let config = use_context::<ClientConfig>();
    let mut state = use_context_provider(|| Signal::new(ServerState::default()));
    let mut details = use_signal(Cache::<ServerDetailsDto>::default);

    #[cfg(feature = "web")]
    let future = {
        let server_id = id.clone();
        use_resource(use_reactive!(|(server_id,)| async move {
            get_server_details(&server_id).send().await
        }))
    };

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(server) => {
                    state.set(ServerState::new(
                        server.attributes.clone(),
                        server.meta.user_permissions.clone(),
                    ));
                }
                Err(err) => {
                    tracing::error!("Failed to fetch server: {}", err);
                    state.write().clear();
                }
            }
            details.set(Cache::from(result.clone()));
        }
    });

    let active = ServerTab::of(&use_route::<Route>());

    let view = match &*details.read() {
        Cache::NotFetched | Cache::Loading => rsx!(LoadingPage {}),
        Cache::Error(err) => rsx!(ErrorPage { status: err.status, message: err.message.clone() }),
        Cache::Fetched(server) => {
            let server = &server.attributes;
            rsx! {
                Title { "{server.name} | {config.site_name}" }
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-6xl",
                        div {
                            class: "flex flex-wrap items-center justify-between gap-4 mb-6",
                            div {
                                h1 { class: "text-lg sm:text-2xl", "{server.name}" }
                                if !server.description.is_empty() {
                                    p { class: "opacity-70 text-sm", "{server.description}" }
                                }
                            }
                            PowerControls { id: id.clone() }
                        }
                        if server.is_suspended {
                            div { class: "alert alert-error mb-4", "This server is suspended." }
                        } else if server.is_installing {
                            div { class: "alert alert-warning mb-4", "This server is still being installed." }
                        }
                        ServerTabs { id: id.clone(), active }
                        Outlet::<Route> {}
                    }
                }
            }
        }
    };
    view
}

#[component]
fn ServerTabs(id: String, active: Option<ServerTab>) -> Element {
    let tab_class = |tab: ServerTab| {
        if active == Some(tab) {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    rsx! {
        div {
            role: "tablist",
            class: "tabs tabs-bordered mb-6",
            Link {
                to: Route::ServerFiles { id: id.clone() },
                class: tab_class(ServerTab::Files),
                "Files"
            }
            Link {
                to: Route::ServerBackups { id: id.clone() },
                class: tab_class(ServerTab::Backups),
                "Backups"
            }
            Link {
                to: Route::ServerSchedules { id: id.clone() },
                class: tab_class(ServerTab::Schedules),
                "Schedules"
            }
        }
    }
}

#[component]
fn PowerControls(id: String) -> Element {
    let state = use_context::<Signal<ServerState>>();
    let mut pending = use_signal(|| None::<PowerSignal>);

    #[cfg(feature = "web")]
    let _power_future = use_resource(move || {
        let id = id.clone();
        async move {
            let Some(signal) = pending() else {
                return;
            };
            if let Err(err) = send_power_signal(&id, signal).send().await {
                tracing::error!("Failed to send power signal: {}", err);
            }
            pending.set(None);
        }
    });

    let buttons = [
        (PowerSignal::Start, "control.start", "Start", "btn-success"),
        (PowerSignal::Restart, "control.restart", "Restart", "btn-outline"),
        (PowerSignal::Stop, "control.stop", "Stop", "btn-error"),
    ];

    rsx! {
        div {
            class: "flex gap-2",
            for (signal, permission, label, class) in buttons {
                if state.read().can(permission) {
                    button {
                        key: "{label}",
                        class: "btn btn-sm {class}",
                        disabled: pending().is_some(),
                        onclick: move |_| pending.set(Some(signal)),
                        "{label}"
                    }
                }
            }
        }
    }
}

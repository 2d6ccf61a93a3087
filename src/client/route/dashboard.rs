use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        api::Paginated,
        component::{ErrorPage, LoadingIndicator, LoadingPage, Page, Pagination},
        config::ClientConfig,
        model::cache::Cache,
        router::Route,
        store::user::UserState,
        util::format::format_limit,
    },
    model::server::{ServerDto, ServerListType},
};

#[cfg(feature = "web")]
use crate::client::api::server::get_servers;

#[component]
pub fn Dashboard() -> Element {
    let config = use_context::<ClientConfig>();
    let user_store = use_context::<Signal<UserState>>();
    let is_admin = user_store.read().is_admin();

    let mut page = use_signal(|| 1u64);
    let mut search = use_signal(String::new);
    let mut query = use_signal(String::new);
    let mut list_type = use_signal(ServerListType::default);
    let mut servers = use_signal(Cache::<Paginated<ServerDto>>::default);
    let mut loading = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let (page, query, list_type) = (page(), query(), list_type());
        loading.set(true);
        get_servers(page, Some(query.as_str()), list_type).send().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch servers: {}", err);
            }
            servers.set(Cache::from(result.clone()));
            loading.set(false);
        }
    });

    let on_search = move |evt: Event<FormData>| {
        evt.prevent_default();
        page.set(1);
        query.set(search().trim().to_string());
    };

    let content = match &*servers.read() {
        Cache::NotFetched | Cache::Loading => rsx!(LoadingPage {}),
        Cache::Error(err) => rsx!(ErrorPage { status: err.status, message: err.message.clone() }),
        Cache::Fetched(list) => rsx!(
            ServerList { servers: list.items.clone() }
            Pagination {
                meta: list.pagination.clone(),
                on_page_change: move |next| page.set(next),
            }
        ),
    };

    rsx! {
        Title { "Dashboard | {config.site_name}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                div {
                    class: "flex flex-wrap items-center justify-between gap-4 mb-6",
                    div {
                        class: "flex items-center gap-3",
                        h1 { class: "text-lg sm:text-2xl", "Your Servers" }
                        LoadingIndicator { loading }
                    }
                    div {
                        class: "flex flex-wrap items-center gap-2",
                        if is_admin {
                            select {
                                class: "select select-bordered select-sm",
                                onchange: move |evt| {
                                    let selected = match evt.value().as_str() {
                                        "admin" => ServerListType::Admin,
                                        "admin-all" => ServerListType::AdminAll,
                                        _ => ServerListType::Owner,
                                    };
                                    page.set(1);
                                    list_type.set(selected);
                                },
                                option { value: "owner", "My servers" }
                                option { value: "admin", "Others' servers" }
                                option { value: "admin-all", "All servers" }
                            }
                        }
                        form {
                            class: "join",
                            onsubmit: on_search,
                            input {
                                class: "input input-bordered input-sm join-item",
                                r#type: "search",
                                placeholder: "Search servers...",
                                value: "{search}",
                                oninput: move |evt| search.set(evt.value()),
                            }
                            button { class: "btn btn-sm join-item", r#type: "submit", "Search" }
                        }
                    }
                }
                {content}
            }
        }
    }
}

#[component]
fn ServerList(servers: Vec<ServerDto>) -> Element {
    rsx! {
        if servers.is_empty() {
            div {
                class: "text-center py-8 opacity-50",
                "There are no servers to display."
            }
        } else {
            div {
                class: "grid gap-4 md:grid-cols-2",
                for server in servers {
                    {
                        let memory = format_limit(server.limits.memory);
                        let disk = format_limit(server.limits.disk);
                        let address = server
                            .default_allocation()
                            .map(|allocation| allocation.address())
                            .unwrap_or_default();
                        rsx! {
                            Link {
                                key: "{server.identifier}",
                                to: Route::ServerFiles { id: server.identifier.clone() },
                                class: "card bg-base-200 hover:bg-base-300 transition-colors",
                                div {
                                    class: "card-body",
                                    div {
                                        class: "flex items-center justify-between gap-2",
                                        h2 { class: "card-title", "{server.name}" }
                                        if server.is_suspended {
                                            span { class: "badge badge-error", "Suspended" }
                                        } else if server.is_installing {
                                            span { class: "badge badge-warning", "Installing" }
                                        }
                                    }
                                    if !server.description.is_empty() {
                                        p { class: "opacity-70 text-sm", "{server.description}" }
                                    }
                                    div {
                                        class: "flex flex-wrap gap-4 text-sm opacity-70",
                                        span { "{address}" }
                                        span { "Memory: {memory}" }
                                        span { "Disk: {disk}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

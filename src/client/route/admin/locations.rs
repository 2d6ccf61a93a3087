use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        api::Paginated,
        component::{
            ConfirmationModal, ErrorPage, FlashMessages, LoadingIndicator, LoadingPage, Modal,
            Page, Pagination,
        },
        config::ClientConfig,
        model::cache::Cache,
        route::admin::{AdminTab, AdminTabs},
        store::flash::{FlashKind, FlashState},
        validation::validate_location_short,
    },
    model::admin::{LocationDto, SaveLocationDto},
};

#[cfg(feature = "web")]
use crate::client::api::admin::location::{create_location, delete_location, get_locations};

const FLASH_KEY: &str = "admin:locations";

#[component]
pub fn AdminLocations() -> Element {
    let config = use_context::<ClientConfig>();
    let mut flash = use_context::<Signal<FlashState>>();
    let per_page = config.per_page;

    let mut page = use_signal(|| 1u64);
    let mut locations = use_signal(Cache::<Paginated<LocationDto>>::default);
    let mut loading = use_signal(|| false);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut show_create_modal = use_signal(|| false);
    let mut show_delete_modal = use_signal(|| false);
    let mut location_to_delete = use_signal(|| None::<LocationDto>);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        let page = page();
        loading.set(true);
        get_locations(page, per_page).send().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch locations: {}", err);
            }
            locations.set(Cache::from(result.clone()));
            loading.set(false);
        }
    });

    let on_delete = move |_: ()| {
        let Some(location) = location_to_delete() else {
            return;
        };
        is_deleting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match delete_location(location.id).send().await {
                Ok(()) => {
                    flash.write().add(
                        FLASH_KEY,
                        FlashKind::Success,
                        format!("Deleted location {}.", location.short),
                    );
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to delete location {}: {}", location.id, err);
                    flash.write().error(FLASH_KEY, err.message);
                }
            }
            is_deleting.set(false);
            show_delete_modal.set(false);
        });
    };

    let content = match &*locations.read() {
        Cache::NotFetched | Cache::Loading => return rsx!(LoadingPage {}),
        Cache::Error(err) => {
            return rsx!(ErrorPage { status: err.status, message: err.message.clone() })
        }
        Cache::Fetched(list) => rsx!(
            if list.items.is_empty() {
                div { class: "text-center py-8 opacity-50", "No locations found" }
            } else {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-zebra w-full",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Short Code" }
                                th { "Description" }
                                th { class: "text-right", "Actions" }
                            }
                        }
                        tbody {
                            for location in list.items.clone() {
                                {
                                    let target = location.clone();
                                    let long = location.long.clone().unwrap_or_default();
                                    rsx! {
                                        tr {
                                            key: "{location.id}",
                                            td { "{location.id}" }
                                            td { code { "{location.short}" } }
                                            td { "{long}" }
                                            td {
                                                div {
                                                    class: "flex gap-2 justify-end",
                                                    button {
                                                        class: "btn btn-sm btn-error",
                                                        onclick: move |_| {
                                                            location_to_delete.set(Some(target.clone()));
                                                            show_delete_modal.set(true);
                                                        },
                                                        "Delete"
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
            }
            Pagination {
                meta: list.pagination.clone(),
                on_page_change: move |next| page.set(next),
            }
        ),
    };

    rsx! {
        Title { "Admin - Locations | {config.site_name}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                AdminTabs { active_tab: AdminTab::Locations }
                div {
                    class: "flex items-center justify-between gap-4 mb-6",
                    div {
                        class: "flex items-center gap-2",
                        h2 { class: "text-lg font-semibold", "Manage Locations" }
                        LoadingIndicator { loading }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_create_modal.set(true),
                        "Create Location"
                    }
                }
                FlashMessages { flash_key: FLASH_KEY.to_string() }
                div {
                    class: "card bg-base-200",
                    div { class: "card-body", {content} }
                }
            }
        }

        CreateLocationModal { show: show_create_modal, refetch_trigger }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete Location".to_string(),
            require_text: location_to_delete().map(|location| location.short),
            message: rsx!(
                if let Some(location) = location_to_delete() {
                    p {
                        class: "py-4",
                        "Are you sure you want to delete "
                        span { class: "font-bold", "\"{location.short}\"" }
                        "? Locations with nodes assigned cannot be deleted."
                    }
                }
            ),
            confirm_text: "Delete".to_string(),
            is_processing: is_deleting(),
            on_confirm: on_delete,
        }
    }
}

#[component]
fn CreateLocationModal(mut show: Signal<bool>, mut refetch_trigger: Signal<u32>) -> Element {
    let mut short = use_signal(String::new);
    let mut long = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    use_effect(move || {
        if show() {
            short.set(String::new());
            long.set(String::new());
            error_message.set(None);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if let Some(message) = validate_location_short(short().trim()) {
            error_message.set(Some(message));
            return;
        }

        let long_value = long().trim().to_string();
        let dto = SaveLocationDto {
            short: short().trim().to_string(),
            long: (!long_value.is_empty()).then_some(long_value),
        };

        is_submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match create_location(&dto).send().await {
                Ok(_) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to create location: {}", err);
                    error_message.set(Some(err.message));
                }
            }
            is_submitting.set(false);
        });
    };

    rsx! {
        Modal {
            show,
            title: "Create Location".to_string(),
            prevent_close: is_submitting(),
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                label {
                    class: "form-control",
                    span { class: "label-text mb-1", "Short Code" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        placeholder: "us.nyc.lvl3",
                        value: "{short}",
                        disabled: is_submitting(),
                        oninput: move |evt| short.set(evt.value()),
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text mb-1", "Description" }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        value: "{long}",
                        disabled: is_submitting(),
                        oninput: move |evt| long.set(evt.value()),
                    }
                }
                if let Some(message) = error_message() {
                    p { class: "text-error text-sm", "{message}" }
                }
                div {
                    class: "modal-action",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: is_submitting(),
                        "Create"
                    }
                }
            }
        }
    }
}

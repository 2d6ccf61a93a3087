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
        util::format::format_limit,
        validation::validate_fqdn,
    },
    model::admin::{LocationDto, NodeDto, SaveNodeDto},
};

#[cfg(feature = "web")]
use crate::client::api::admin::{
    location::get_locations,
    node::{create_node, delete_node, get_nodes},
};

const FLASH_KEY: &str = "admin:nodes";

/// Node form input before conversion into a request payload.
#[derive(Clone, Debug, PartialEq)]
struct NodeForm {
    name: String,
    location_id: Option<u64>,
    fqdn: String,
    use_ssl: bool,
    memory: String,
    disk: String,
}

impl Default for NodeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            location_id: None,
            fqdn: String::new(),
            use_ssl: true,
            memory: String::new(),
            disk: String::new(),
        }
    }
}

impl NodeForm {
    fn to_dto(&self) -> Result<SaveNodeDto, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Node name is required.".to_string());
        }
        let Some(location_id) = self.location_id else {
            return Err("A location must be selected.".to_string());
        };
        if let Some(problem) = validate_fqdn(&self.fqdn) {
            return Err(problem);
        }
        let megabytes = |label: &str, value: &str| {
            value
                .trim()
                .parse::<u64>()
                .map_err(|_| format!("{} must be a whole number of megabytes.", label))
        };

        Ok(SaveNodeDto {
            name: name.to_string(),
            description: None,
            location_id,
            public: true,
            fqdn: self.fqdn.trim().to_string(),
            scheme: if self.use_ssl { "https" } else { "http" }.to_string(),
            behind_proxy: false,
            memory: megabytes("Memory", &self.memory)?,
            memory_overallocate: 0,
            disk: megabytes("Disk", &self.disk)?,
            disk_overallocate: 0,
            upload_size: 100,
            daemon_listen: 8080,
            daemon_sftp: 2022,
            daemon_base: "/var/lib/panel/volumes".to_string(),
        })
    }
}

#[component]
pub fn AdminNodes() -> Element {
    let config = use_context::<ClientConfig>();
    let mut flash = use_context::<Signal<FlashState>>();
    let per_page = config.per_page;

    let mut page = use_signal(|| 1u64);
    let mut nodes = use_signal(Cache::<Paginated<NodeDto>>::default);
    let mut loading = use_signal(|| false);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut show_create_modal = use_signal(|| false);
    let mut show_delete_modal = use_signal(|| false);
    let mut node_to_delete = use_signal(|| None::<NodeDto>);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        let page = page();
        loading.set(true);
        get_nodes(page, per_page).send().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch nodes: {}", err);
            }
            nodes.set(Cache::from(result.clone()));
            loading.set(false);
        }
    });

    let on_delete = move |_: ()| {
        let Some(node) = node_to_delete() else {
            return;
        };
        is_deleting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match delete_node(node.id).send().await {
                Ok(()) => {
                    flash.write().add(
                        FLASH_KEY,
                        FlashKind::Success,
                        format!("Deleted node {}.", node.name),
                    );
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to delete node {}: {}", node.id, err);
                    flash.write().error(FLASH_KEY, err.message);
                }
            }
            is_deleting.set(false);
            show_delete_modal.set(false);
        });
    };

    let content = match &*nodes.read() {
        Cache::NotFetched | Cache::Loading => return rsx!(LoadingPage {}),
        Cache::Error(err) => {
            return rsx!(ErrorPage { status: err.status, message: err.message.clone() })
        }
        Cache::Fetched(list) => rsx!(
            if list.items.is_empty() {
                div { class: "text-center py-8 opacity-50", "No nodes found" }
            } else {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-zebra w-full",
                        thead {
                            tr {
                                th { "Name" }
                                th { "FQDN" }
                                th { "Memory" }
                                th { "Disk" }
                                th { class: "text-right", "Actions" }
                            }
                        }
                        tbody {
                            for node in list.items.clone() {
                                {
                                    let target = node.clone();
                                    let memory = format_limit(node.memory);
                                    let disk = format_limit(node.disk);
                                    rsx! {
                                        tr {
                                            key: "{node.id}",
                                            td {
                                                div {
                                                    class: "flex items-center gap-2",
                                                    span { "{node.name}" }
                                                    if node.maintenance_mode {
                                                        span { class: "badge badge-sm badge-warning", "Maintenance" }
                                                    }
                                                }
                                            }
                                            td { code { "{node.scheme}://{node.fqdn}:{node.daemon_listen}" } }
                                            td { "{memory}" }
                                            td { "{disk}" }
                                            td {
                                                div {
                                                    class: "flex gap-2 justify-end",
                                                    button {
                                                        class: "btn btn-sm btn-error",
                                                        onclick: move |_| {
                                                            node_to_delete.set(Some(target.clone()));
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
        Title { "Admin - Nodes | {config.site_name}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                AdminTabs { active_tab: AdminTab::Nodes }
                div {
                    class: "flex items-center justify-between gap-4 mb-6",
                    div {
                        class: "flex items-center gap-2",
                        h2 { class: "text-lg font-semibold", "Manage Nodes" }
                        LoadingIndicator { loading }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_create_modal.set(true),
                        "Create Node"
                    }
                }
                FlashMessages { flash_key: FLASH_KEY.to_string() }
                div {
                    class: "card bg-base-200",
                    div { class: "card-body", {content} }
                }
            }
        }

        CreateNodeModal { show: show_create_modal, refetch_trigger }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete Node".to_string(),
            require_text: node_to_delete().map(|node| node.name),
            message: rsx!(
                if let Some(node) = node_to_delete() {
                    p {
                        class: "py-4",
                        "Are you sure you want to delete "
                        span { class: "font-bold", "\"{node.name}\"" }
                        "? Nodes with servers cannot be deleted."
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
fn CreateNodeModal(mut show: Signal<bool>, mut refetch_trigger: Signal<u32>) -> Element {
    let mut form = use_signal(NodeForm::default);
    let mut locations = use_signal(Vec::<LocationDto>::new);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    use_effect(move || {
        if show() {
            form.set(NodeForm::default());
            error_message.set(None);
        }
    });

    #[cfg(feature = "web")]
    let location_future = use_resource(move || async move {
        if show() {
            Some(get_locations(1, 100).send().await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        match location_future.read_unchecked().as_ref() {
            Some(Some(Ok(list))) => locations.set(list.items.clone()),
            Some(Some(Err(err))) => tracing::error!("Failed to fetch locations: {}", err),
            _ => (),
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let dto = match form.read().to_dto() {
            Ok(dto) => dto,
            Err(problem) => {
                error_message.set(Some(problem));
                return;
            }
        };

        is_submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match create_node(&dto).send().await {
                Ok(_) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to create node: {}", err);
                    error_message.set(Some(err.message));
                }
            }
            is_submitting.set(false);
        });
    };

    let current = form();

    rsx! {
        Modal {
            show,
            title: "Create Node".to_string(),
            prevent_close: is_submitting(),
            width: "max-w-2xl",
            form {
                class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                onsubmit: on_submit,
                label {
                    class: "form-control",
                    span { class: "label-text mb-1", "Name" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        value: "{current.name}",
                        oninput: move |evt| form.write().name = evt.value(),
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text mb-1", "Location" }
                    select {
                        class: "select select-bordered w-full",
                        onchange: move |evt| form.write().location_id = evt.value().parse().ok(),
                        option { value: "", disabled: true, selected: current.location_id.is_none(), "Select a location" }
                        for location in locations() {
                            option {
                                key: "{location.id}",
                                value: "{location.id}",
                                selected: current.location_id == Some(location.id),
                                "{location.short}"
                            }
                        }
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text mb-1", "FQDN" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        placeholder: "node.example.com",
                        value: "{current.fqdn}",
                        oninput: move |evt| form.write().fqdn = evt.value(),
                    }
                }
                label {
                    class: "label cursor-pointer justify-start gap-2",
                    input {
                        class: "checkbox",
                        r#type: "checkbox",
                        checked: current.use_ssl,
                        onchange: move |evt| form.write().use_ssl = evt.checked(),
                    }
                    span { class: "label-text", "Communicate over SSL" }
                }
                label {
                    class: "form-control",
                    span { class: "label-text mb-1", "Total Memory (MiB)" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "number",
                        min: "0",
                        value: "{current.memory}",
                        oninput: move |evt| form.write().memory = evt.value(),
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text mb-1", "Total Disk Space (MiB)" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "number",
                        min: "0",
                        value: "{current.disk}",
                        oninput: move |evt| form.write().disk = evt.value(),
                    }
                }
                if let Some(message) = error_message() {
                    p { class: "text-error text-sm sm:col-span-2", "{message}" }
                }
                div {
                    class: "modal-action sm:col-span-2",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: is_submitting(),
                        "Create Node"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> NodeForm {
        NodeForm {
            name: "Node 1".to_string(),
            location_id: Some(2),
            fqdn: "node1.example.com".to_string(),
            use_ssl: true,
            memory: "16384".to_string(),
            disk: "102400".to_string(),
        }
    }

    /// Tests conversion of a complete node form.
    ///
    /// Expected: https scheme and parsed resource limits
    #[test]
    fn builds_node_payload() {
        let dto = filled().to_dto().unwrap();
        assert_eq!(dto.scheme, "https");
        assert_eq!(dto.location_id, 2);
        assert_eq!(dto.memory, 16384);
        assert_eq!(dto.disk, 102400);
    }

    /// Tests rejection of incomplete node forms.
    ///
    /// Expected: missing location and malformed numbers are reported
    #[test]
    fn rejects_incomplete_forms() {
        let form = NodeForm {
            location_id: None,
            ..filled()
        };
        assert_eq!(form.to_dto().unwrap_err(), "A location must be selected.");

        let form = NodeForm {
            memory: "lots".to_string(),
            ..filled()
        };
        assert_eq!(
            form.to_dto().unwrap_err(),
            "Memory must be a whole number of megabytes."
        );
    }
}

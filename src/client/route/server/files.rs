use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ConfirmationModal, FlashMessages, LoadingIndicator, Modal},
        model::cache::Cache,
        router::Route,
        store::{
            flash::{FlashKind, FlashState},
            server::ServerState,
        },
        util::{
            format::bytes_to_string,
            path::{decode_path, join_file_path, normalize_file_path},
        },
    },
    model::file::FileObjectDto,
};

#[cfg(feature = "web")]
use crate::client::api::file::{
    compress_files, copy_file, create_directory, decompress_file, delete_files,
    get_file_download_url, list_directory,
};

const FLASH_KEY: &str = "files";

#[component]
pub fn ServerFiles(id: String) -> Element {
    rsx!(FileManager { id })
}

#[component]
pub fn ServerDirectory(id: String, segments: Vec<String>) -> Element {
    let _ = segments;
    rsx!(FileManager { id })
}

/// Directory the file manager is showing, derived from the current location.
fn current_directory(route: &Route) -> String {
    normalize_file_path(&decode_path(&route.to_string()))
}

/// `(label, path)` pairs leading from the root to `directory`.
fn breadcrumbs(directory: &str) -> Vec<(String, String)> {
    let mut crumbs = Vec::new();
    let mut path = String::new();
    for segment in directory.split('/').filter(|s| !s.is_empty()) {
        path = join_file_path(&path, segment);
        crumbs.push((segment.to_string(), path.clone()));
    }
    crumbs
}

#[component]
fn FileManager(id: String) -> Element {
    let state = use_context::<Signal<ServerState>>();
    let mut flash = use_context::<Signal<FlashState>>();
    let directory = current_directory(&use_route::<Route>());

    let mut files = use_signal(Cache::<Vec<FileObjectDto>>::default);
    let mut loading = use_signal(|| false);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut show_create_modal = use_signal(|| false);
    let mut show_delete_modal = use_signal(|| false);
    let mut file_to_delete = use_signal(|| None::<String>);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = {
        let (server_id, path) = (id.clone(), directory.clone());
        use_resource(use_reactive!(|(server_id, path)| async move {
            let _ = refetch_trigger();
            loading.set(true);
            list_directory(&server_id, &path).send().await
        }))
    };

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            let result = result.clone().map(|mut entries| {
                entries.sort_by(|a, b| a.is_file.cmp(&b.is_file).then_with(|| a.name.cmp(&b.name)));
                entries
            });
            if let Err(err) = &result {
                tracing::error!("Failed to fetch files: {}", err);
            }
            files.set(Cache::from(result));
            loading.set(false);
        }
    });

    let on_delete = {
        let id = id.clone();
        let directory = directory.clone();
        move |_: ()| {
            let Some(name) = file_to_delete() else {
                return;
            };
            is_deleting.set(true);

            #[cfg(feature = "web")]
            {
                let id = id.clone();
                let directory = directory.clone();
                spawn(async move {
                    match delete_files(&id, &directory, vec![name.clone()]).send().await {
                        Ok(()) => {
                            flash.write().add(FLASH_KEY, FlashKind::Success, format!("Deleted {}.", name));
                            refetch_trigger.set(refetch_trigger() + 1);
                        }
                        Err(err) => {
                            tracing::error!("Failed to delete {}: {}", name, err);
                            flash.write().error(FLASH_KEY, err.message);
                        }
                    }
                    is_deleting.set(false);
                    show_delete_modal.set(false);
                });
            }
        }
    };

    let can_create = state.read().can("file.create");
    let can_delete = state.read().can("file.delete");

    let listing = match &*files.read() {
        Cache::NotFetched | Cache::Loading => rsx!(
            div { class: "flex justify-center py-8", span { class: "loading loading-spinner" } }
        ),
        Cache::Error(err) => rsx!(
            div { class: "alert alert-error", "{err.message}" }
        ),
        Cache::Fetched(entries) if entries.is_empty() => rsx!(
            div { class: "text-center py-8 opacity-50", "This directory is empty." }
        ),
        Cache::Fetched(entries) => rsx!(
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Size" }
                            th { "Modified" }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for file in entries.clone() {
                            FileRow {
                                key: "{file.name}",
                                id: id.clone(),
                                directory: directory.clone(),
                                file: file.clone(),
                                can_delete,
                                refetch_trigger,
                                on_delete: move |name: String| {
                                    file_to_delete.set(Some(name));
                                    show_delete_modal.set(true);
                                },
                            }
                        }
                    }
                }
            }
        ),
    };

    rsx! {
        div {
            class: "flex flex-wrap items-center justify-between gap-4 mb-4",
            div {
                class: "flex items-center gap-2",
                div {
                    class: "breadcrumbs text-sm",
                    ul {
                        li {
                            Link { to: Route::directory(&id, "/"), "home" }
                        }
                        for (label, path) in breadcrumbs(&directory) {
                            li {
                                key: "{path}",
                                Link { to: Route::directory(&id, &path), "{label}" }
                            }
                        }
                    }
                }
                LoadingIndicator { loading }
            }
            if can_create {
                button {
                    class: "btn btn-primary btn-sm",
                    onclick: move |_| show_create_modal.set(true),
                    "New Folder"
                }
            }
        }
        FlashMessages { flash_key: FLASH_KEY.to_string() }
        div {
            class: "card bg-base-200",
            div { class: "card-body", {listing} }
        }

        CreateFolderModal {
            show: show_create_modal,
            id: id.clone(),
            directory: directory.clone(),
            refetch_trigger,
        }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete File".to_string(),
            message: rsx!(
                if let Some(name) = file_to_delete() {
                    p {
                        class: "py-4",
                        "Are you sure you want to delete "
                        span { class: "font-bold", "\"{name}\"" }
                        "? This cannot be undone."
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
fn FileRow(
    id: String,
    directory: String,
    file: FileObjectDto,
    can_delete: bool,
    mut refetch_trigger: Signal<u32>,
    on_delete: EventHandler<String>,
) -> Element {
    let state = use_context::<Signal<ServerState>>();
    let mut flash = use_context::<Signal<FlashState>>();
    let path = join_file_path(&directory, &file.name);
    let size = if file.is_file {
        bytes_to_string(file.size)
    } else {
        String::new()
    };
    let modified = file.modified_at.format("%Y-%m-%d %H:%M").to_string();

    let on_download = {
        let id = id.clone();
        let path = path.clone();
        move |_: MouseEvent| {
            #[cfg(feature = "web")]
            {
                let id = id.clone();
                let path = path.clone();
                spawn(async move {
                    match get_file_download_url(&id, &path).send().await {
                        Ok(signed) => {
                            let target = serde_json::to_string(&signed.url).unwrap_or_default();
                            document::eval(&format!("window.location.href = {};", target));
                        }
                        Err(err) => {
                            tracing::error!("Failed to fetch download url: {}", err);
                            flash.write().error(FLASH_KEY, err.message);
                        }
                    }
                });
            }
        }
    };

    let on_decompress = {
        let id = id.clone();
        let directory = directory.clone();
        let name = file.name.clone();
        move |_: MouseEvent| {
            #[cfg(feature = "web")]
            {
                let id = id.clone();
                let directory = directory.clone();
                let name = name.clone();
                spawn(async move {
                    match decompress_file(&id, &directory, &name).send().await {
                        Ok(()) => flash
                            .write()
                            .add(FLASH_KEY, FlashKind::Success, format!("Unarchived {}.", name)),
                        Err(err) => {
                            tracing::error!("Failed to decompress {}: {}", name, err);
                            flash.write().error(FLASH_KEY, err.message);
                        }
                    }
                });
            }
        }
    };

    // Copies land next to the original with a " copy" suffix
    let on_copy = {
        let id = id.clone();
        let path = path.clone();
        move |_: MouseEvent| {
            #[cfg(feature = "web")]
            {
                let id = id.clone();
                let path = path.clone();
                spawn(async move {
                    match copy_file(&id, &path).send().await {
                        Ok(()) => refetch_trigger.set(refetch_trigger() + 1),
                        Err(err) => {
                            tracing::error!("Failed to copy {}: {}", path, err);
                            flash.write().error(FLASH_KEY, err.message);
                        }
                    }
                });
            }
        }
    };

    let on_compress = {
        let id = id.clone();
        let directory = directory.clone();
        let name = file.name.clone();
        move |_: MouseEvent| {
            #[cfg(feature = "web")]
            {
                let id = id.clone();
                let directory = directory.clone();
                let name = name.clone();
                spawn(async move {
                    match compress_files(&id, &directory, vec![name.clone()]).send().await {
                        Ok(archive) => {
                            flash.write().add(
                                FLASH_KEY,
                                FlashKind::Success,
                                format!("Archived {} as {}.", name, archive.name),
                            );
                            refetch_trigger.set(refetch_trigger() + 1);
                        }
                        Err(err) => {
                            tracing::error!("Failed to compress {}: {}", name, err);
                            flash.write().error(FLASH_KEY, err.message);
                        }
                    }
                });
            }
        }
    };

    let can_copy = file.is_file && state.read().can("file.create");
    let can_archive = state.read().can("file.archive");
    let name = file.name.clone();

    rsx! {
        tr {
            td {
                if !file.is_file {
                    Link { to: Route::directory(&id, &path), class: "link link-hover font-semibold", "{file.name}/" }
                } else if file.is_editable() {
                    Link { to: Route::edit_file(&id, &path), class: "link link-hover", "{file.name}" }
                } else {
                    span { "{file.name}" }
                }
            }
            td { "{size}" }
            td { class: "opacity-70", "{modified}" }
            td {
                div {
                    class: "flex gap-2 justify-end",
                    if file.is_archive() {
                        button { class: "btn btn-xs", onclick: on_decompress, "Unarchive" }
                    } else if can_archive {
                        button { class: "btn btn-xs", onclick: on_compress, "Archive" }
                    }
                    if can_copy {
                        button { class: "btn btn-xs", onclick: on_copy, "Copy" }
                    }
                    if file.is_file {
                        button { class: "btn btn-xs", onclick: on_download, "Download" }
                    }
                    if can_delete {
                        button {
                            class: "btn btn-xs btn-error",
                            onclick: move |_| on_delete.call(name.clone()),
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CreateFolderModal(
    mut show: Signal<bool>,
    id: String,
    directory: String,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    use_effect(move || {
        if show() {
            name.set(String::new());
            error_message.set(None);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let folder = name().trim().to_string();
        if folder.is_empty() {
            error_message.set(Some("A folder name is required.".to_string()));
            return;
        }

        is_submitting.set(true);

        #[cfg(feature = "web")]
        {
            let id = id.clone();
            let directory = directory.clone();
            spawn(async move {
                match create_directory(&id, &directory, &folder).send().await {
                    Ok(()) => {
                        refetch_trigger.set(refetch_trigger() + 1);
                        show.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to create folder: {}", err);
                        error_message.set(Some(err.message));
                    }
                }
                is_submitting.set(false);
            });
        }
    };

    rsx! {
        Modal {
            show,
            title: "Create Folder".to_string(),
            prevent_close: is_submitting(),
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    placeholder: "Folder name",
                    value: "{name}",
                    disabled: is_submitting(),
                    oninput: move |evt| name.set(evt.value()),
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

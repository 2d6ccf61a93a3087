use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        api::Paginated,
        component::{ConfirmationModal, FlashMessages, LoadingIndicator, Modal, Pagination},
        model::cache::Cache,
        store::{
            flash::{FlashKind, FlashState},
            server::ServerState,
        },
        util::format::bytes_to_string,
        validation::validate_backup_name,
    },
    model::backup::{BackupDto, CreateBackupDto},
};

#[cfg(feature = "web")]
use crate::client::api::backup::{
    create_backup, delete_backup, get_backup_download_url, get_backups, restore_backup,
    toggle_backup_lock,
};

const FLASH_KEY: &str = "backups";

/// Pending destructive action on a backup.
#[derive(Clone, PartialEq)]
enum BackupAction {
    Delete(BackupDto),
    Restore(BackupDto),
}

impl BackupAction {
    fn backup(&self) -> &BackupDto {
        match self {
            BackupAction::Delete(backup) | BackupAction::Restore(backup) => backup,
        }
    }
}

#[component]
pub fn ServerBackups(id: String) -> Element {
    let state = use_context::<Signal<ServerState>>();
    let mut flash = use_context::<Signal<FlashState>>();

    let mut page = use_signal(|| 1u64);
    let mut backups = use_signal(Cache::<Paginated<BackupDto>>::default);
    let mut loading = use_signal(|| false);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut show_create_modal = use_signal(|| false);
    let mut show_action_modal = use_signal(|| false);
    let mut pending_action = use_signal(|| None::<BackupAction>);
    let mut is_processing = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = {
        let server_id = id.clone();
        use_resource(use_reactive!(|(server_id,)| async move {
            let _ = refetch_trigger();
            let page = page();
            loading.set(true);
            get_backups(&server_id, page).send().await
        }))
    };

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch backups: {}", err);
            }
            backups.set(Cache::from(result.clone()));
            loading.set(false);
        }
    });

    let on_confirm = {
        let id = id.clone();
        move |_: ()| {
            let Some(action) = pending_action() else {
                return;
            };
            is_processing.set(true);

            #[cfg(feature = "web")]
            {
                let id = id.clone();
                spawn(async move {
                    let backup = action.backup().clone();
                    let result = match &action {
                        BackupAction::Delete(_) => delete_backup(&id, &backup.uuid).send().await,
                        BackupAction::Restore(_) => {
                            restore_backup(&id, &backup.uuid, false).send().await
                        }
                    };

                    match result {
                        Ok(()) => {
                            let message = match action {
                                BackupAction::Delete(_) => format!("Deleted backup {}.", backup.name),
                                BackupAction::Restore(_) => {
                                    format!("Restoring from backup {}.", backup.name)
                                }
                            };
                            flash.write().add(FLASH_KEY, FlashKind::Success, message);
                            refetch_trigger.set(refetch_trigger() + 1);
                        }
                        Err(err) => {
                            tracing::error!("Failed to update backup {}: {}", backup.uuid, err);
                            flash.write().error(FLASH_KEY, err.message);
                        }
                    }
                    is_processing.set(false);
                    show_action_modal.set(false);
                });
            }
        }
    };

    let can_create = state.read().can("backup.create");
    let backup_limit = state
        .read()
        .server
        .as_ref()
        .map(|server| server.feature_limits.backups)
        .unwrap_or_default();

    let listing = match &*backups.read() {
        Cache::NotFetched | Cache::Loading => rsx!(
            div { class: "flex justify-center py-8", span { class: "loading loading-spinner" } }
        ),
        Cache::Error(err) => rsx!(div { class: "alert alert-error", "{err.message}" }),
        Cache::Fetched(list) => {
            let at_limit = list.pagination.total >= backup_limit;
            rsx!(
                div {
                    class: "flex items-center justify-between gap-4 mb-4",
                    p {
                        class: "text-sm opacity-70",
                        "{list.pagination.total} of {backup_limit} backups used"
                    }
                    if can_create {
                        button {
                            class: "btn btn-primary btn-sm",
                            disabled: at_limit,
                            onclick: move |_| show_create_modal.set(true),
                            "Create Backup"
                        }
                    }
                }
                if list.items.is_empty() {
                    div { class: "text-center py-8 opacity-50", "There are no backups for this server." }
                } else {
                    div {
                        class: "flex flex-col gap-2",
                        for backup in list.items.clone() {
                            BackupRow {
                                key: "{backup.uuid}",
                                id: id.clone(),
                                backup: backup.clone(),
                                refetch_trigger,
                                on_action: move |action: BackupAction| {
                                    pending_action.set(Some(action));
                                    show_action_modal.set(true);
                                },
                            }
                        }
                    }
                }
                Pagination {
                    meta: list.pagination.clone(),
                    on_page_change: move |next| page.set(next),
                }
            )
        }
    };

    let (modal_title, confirm_text) = match pending_action() {
        Some(BackupAction::Restore(_)) => ("Restore Backup", "Restore"),
        _ => ("Delete Backup", "Delete"),
    };

    rsx! {
        div {
            class: "flex items-center gap-2 mb-4",
            h2 { class: "text-lg font-semibold", "Backups" }
            LoadingIndicator { loading }
        }
        FlashMessages { flash_key: FLASH_KEY.to_string() }
        div {
            class: "card bg-base-200",
            div { class: "card-body", {listing} }
        }

        CreateBackupModal {
            show: show_create_modal,
            id: id.clone(),
            refetch_trigger,
        }

        ConfirmationModal {
            show: show_action_modal,
            title: modal_title.to_string(),
            message: rsx!(
                if let Some(action) = pending_action() {
                    p {
                        class: "py-4",
                        match action {
                            BackupAction::Delete(backup) => rsx!(
                                "Are you sure you want to delete "
                                span { class: "font-bold", "\"{backup.name}\"" }
                                "? This cannot be undone."
                            ),
                            BackupAction::Restore(backup) => rsx!(
                                "The server will be stopped and restored from "
                                span { class: "font-bold", "\"{backup.name}\"" }
                                "."
                            ),
                        }
                    }
                }
            ),
            confirm_text: confirm_text.to_string(),
            confirm_class: "btn-warning".to_string(),
            is_processing: is_processing(),
            on_confirm,
        }
    }
}

#[component]
fn BackupRow(
    id: String,
    backup: BackupDto,
    mut refetch_trigger: Signal<u32>,
    on_action: EventHandler<BackupAction>,
) -> Element {
    let state = use_context::<Signal<ServerState>>();
    let mut flash = use_context::<Signal<FlashState>>();

    let on_toggle_lock = {
        let id = id.clone();
        let uuid = backup.uuid.clone();
        move |_: MouseEvent| {
            #[cfg(feature = "web")]
            {
                let id = id.clone();
                let uuid = uuid.clone();
                spawn(async move {
                    match toggle_backup_lock(&id, &uuid).send().await {
                        Ok(_) => refetch_trigger.set(refetch_trigger() + 1),
                        Err(err) => {
                            tracing::error!("Failed to toggle lock on backup {}: {}", uuid, err);
                            flash.write().error(FLASH_KEY, err.message);
                        }
                    }
                });
            }
        }
    };

    let on_download = {
        let id = id.clone();
        let uuid = backup.uuid.clone();
        move |_: MouseEvent| {
            #[cfg(feature = "web")]
            {
                let id = id.clone();
                let uuid = uuid.clone();
                spawn(async move {
                    match get_backup_download_url(&id, &uuid).send().await {
                        Ok(signed) => {
                            let target = serde_json::to_string(&signed.url).unwrap_or_default();
                            document::eval(&format!("window.location.href = {};", target));
                        }
                        Err(err) => {
                            tracing::error!("Failed to fetch backup download url: {}", err);
                            flash.write().error(FLASH_KEY, err.message);
                        }
                    }
                });
            }
        }
    };

    let created = backup.created_at.format("%Y-%m-%d %H:%M").to_string();
    let size = bytes_to_string(backup.bytes);
    let in_progress = backup.is_in_progress();
    let delete_target = backup.clone();
    let restore_target = backup.clone();

    rsx! {
        div {
            class: "flex flex-wrap items-center justify-between gap-4 p-3 rounded-box bg-base-100",
            div {
                class: "flex flex-col",
                div {
                    class: "flex items-center gap-2",
                    span { class: "font-semibold", "{backup.name}" }
                    if backup.is_locked {
                        span { class: "badge badge-sm badge-warning", "Locked" }
                    }
                    if in_progress {
                        span { class: "badge badge-sm badge-info", "In progress" }
                    } else if !backup.is_successful {
                        span { class: "badge badge-sm badge-error", "Failed" }
                    }
                }
                span {
                    class: "text-xs opacity-70",
                    if in_progress {
                        "Started {created}"
                    } else {
                        "{created} · {size}"
                    }
                }
            }
            if !in_progress {
                div {
                    class: "flex gap-2",
                    if state.read().can("backup.download") && backup.is_successful {
                        button { class: "btn btn-xs", onclick: on_download, "Download" }
                    }
                    if state.read().can("backup.restore") && backup.is_successful {
                        button {
                            class: "btn btn-xs",
                            onclick: move |_| on_action.call(BackupAction::Restore(restore_target.clone())),
                            "Restore"
                        }
                    }
                    if state.read().can("backup.delete") {
                        button {
                            class: "btn btn-xs",
                            onclick: on_toggle_lock,
                            if backup.is_locked { "Unlock" } else { "Lock" }
                        }
                        button {
                            class: "btn btn-xs btn-error",
                            disabled: backup.is_locked,
                            onclick: move |_| on_action.call(BackupAction::Delete(delete_target.clone())),
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CreateBackupModal(mut show: Signal<bool>, id: String, mut refetch_trigger: Signal<u32>) -> Element {
    let mut name = use_signal(String::new);
    let mut ignored = use_signal(String::new);
    let mut is_locked = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    use_effect(move || {
        if show() {
            name.set(String::new());
            ignored.set(String::new());
            is_locked.set(false);
            error_message.set(None);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if let Some(message) = validate_backup_name(&name()) {
            error_message.set(Some(message));
            return;
        }

        let non_empty = |value: String| {
            let value = value.trim().to_string();
            (!value.is_empty()).then_some(value)
        };
        let dto = CreateBackupDto {
            name: non_empty(name()),
            ignored: non_empty(ignored()),
            is_locked: is_locked(),
        };

        is_submitting.set(true);

        #[cfg(feature = "web")]
        {
            let id = id.clone();
            spawn(async move {
                match create_backup(&id, &dto).send().await {
                    Ok(_) => {
                        refetch_trigger.set(refetch_trigger() + 1);
                        show.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to create backup: {}", err);
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
            title: "Create Backup".to_string(),
            prevent_close: is_submitting(),
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                label {
                    class: "form-control",
                    span { class: "label-text mb-1", "Backup name" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        value: "{name}",
                        disabled: is_submitting(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text mb-1", "Ignored files" }
                    textarea {
                        class: "textarea textarea-bordered w-full font-mono text-sm",
                        rows: "4",
                        value: "{ignored}",
                        disabled: is_submitting(),
                        oninput: move |evt| ignored.set(evt.value()),
                    }
                }
                label {
                    class: "label cursor-pointer justify-start gap-2",
                    input {
                        class: "checkbox",
                        r#type: "checkbox",
                        checked: is_locked(),
                        disabled: is_submitting(),
                        onchange: move |evt| is_locked.set(evt.checked()),
                    }
                    span { class: "label-text", "Locked" }
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
                        "Start Backup"
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        api::Paginated,
        component::{
            ConfirmationModal, FlashMessages, LoadingIndicator, Modal, Page, Pagination,
        },
        config::ClientConfig,
        model::cache::Cache,
        route::admin::{AdminTab, AdminTabs},
        store::{
            flash::{FlashKind, FlashState},
            user::UserState,
        },
        validation::{
            validate_email, validate_password, validate_password_confirmation, validate_username,
        },
    },
    model::admin::{AdminUserDto, SaveUserDto},
};

#[cfg(feature = "web")]
use crate::client::api::admin::user::{create_user, delete_user, get_users};

const FLASH_KEY: &str = "admin:users";

#[derive(Clone, Debug, Default, PartialEq)]
struct UserForm {
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    password: String,
    password_confirmation: String,
    root_admin: bool,
}

impl UserForm {
    fn to_dto(&self) -> Result<SaveUserDto, String> {
        let problem = validate_username(self.username.trim())
            .or_else(|| validate_email(&self.email))
            .or_else(|| {
                if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
                    Some("First and last name are required.".to_string())
                } else {
                    None
                }
            })
            .or_else(|| validate_password(&self.password))
            .or_else(|| validate_password_confirmation(&self.password, &self.password_confirmation));

        if let Some(problem) = problem {
            return Err(problem);
        }

        Ok(SaveUserDto {
            external_id: None,
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            password: Some(self.password.clone()),
            root_admin: self.root_admin,
            language: None,
        })
    }
}

#[component]
pub fn AdminUsers() -> Element {
    let config = use_context::<ClientConfig>();
    let user_store = use_context::<Signal<UserState>>();
    let mut flash = use_context::<Signal<FlashState>>();
    let per_page = config.per_page;
    let current_user_id = user_store.read().user.as_ref().map(|u| u.id);

    let mut page = use_signal(|| 1u64);
    let mut search = use_signal(String::new);
    let mut email_filter = use_signal(String::new);
    let mut users = use_signal(Cache::<Paginated<AdminUserDto>>::default);
    let mut loading = use_signal(|| false);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut show_create_modal = use_signal(|| false);
    let mut show_delete_modal = use_signal(|| false);
    let mut user_to_delete = use_signal(|| None::<AdminUserDto>);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        let (page, email) = (page(), email_filter());
        loading.set(true);
        get_users(page, per_page, Some(email.as_str())).send().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch users: {}", err);
            }
            users.set(Cache::from(result.clone()));
            loading.set(false);
        }
    });

    let on_search = move |evt: Event<FormData>| {
        evt.prevent_default();
        page.set(1);
        email_filter.set(search().trim().to_string());
    };

    let on_delete = move |_: ()| {
        let Some(user) = user_to_delete() else {
            return;
        };
        is_deleting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match delete_user(user.id).send().await {
                Ok(()) => {
                    flash.write().add(
                        FLASH_KEY,
                        FlashKind::Success,
                        format!("Deleted user {}.", user.username),
                    );
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to delete user {}: {}", user.id, err);
                    flash.write().error(FLASH_KEY, err.message);
                }
            }
            is_deleting.set(false);
            show_delete_modal.set(false);
        });
    };

    let content = match &*users.read() {
        Cache::NotFetched | Cache::Loading => rsx!(
            div { class: "flex justify-center py-8", span { class: "loading loading-spinner" } }
        ),
        Cache::Error(err) => rsx!(div { class: "alert alert-error", "{err.message}" }),
        Cache::Fetched(list) => rsx!(
            if list.items.is_empty() {
                div { class: "text-center py-8 opacity-50", "No users found" }
            } else {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-zebra w-full",
                        thead {
                            tr {
                                th { "Username" }
                                th { "Email" }
                                th { "Name" }
                                th { class: "text-right", "Actions" }
                            }
                        }
                        tbody {
                            for user in list.items.clone() {
                                {
                                    let is_current_user = Some(user.id) == current_user_id;
                                    let target = user.clone();
                                    rsx! {
                                        tr {
                                            key: "{user.id}",
                                            td {
                                                div {
                                                    class: "flex items-center gap-2",
                                                    span { "{user.username}" }
                                                    if user.root_admin {
                                                        span { class: "badge badge-sm badge-primary", "Admin" }
                                                    }
                                                    if user.two_factor {
                                                        span { class: "badge badge-sm", "2FA" }
                                                    }
                                                    if is_current_user {
                                                        span { class: "badge badge-sm badge-secondary", "You" }
                                                    }
                                                }
                                            }
                                            td { "{user.email}" }
                                            td { "{user.first_name} {user.last_name}" }
                                            td {
                                                div {
                                                    class: "flex gap-2 justify-end",
                                                    button {
                                                        class: "btn btn-sm btn-error",
                                                        disabled: is_current_user,
                                                        onclick: move |_| {
                                                            user_to_delete.set(Some(target.clone()));
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
        Title { "Admin - Users | {config.site_name}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                AdminTabs { active_tab: AdminTab::Users }
                div {
                    class: "flex flex-wrap items-center justify-between gap-4 mb-6",
                    div {
                        class: "flex items-center gap-2",
                        h2 { class: "text-lg font-semibold", "Manage Users" }
                        LoadingIndicator { loading }
                    }
                    div {
                        class: "flex items-center gap-2",
                        form {
                            class: "join",
                            onsubmit: on_search,
                            input {
                                class: "input input-bordered input-sm join-item",
                                r#type: "search",
                                placeholder: "Filter by email...",
                                value: "{search}",
                                oninput: move |evt| search.set(evt.value()),
                            }
                            button { class: "btn btn-sm join-item", r#type: "submit", "Search" }
                        }
                        button {
                            class: "btn btn-primary btn-sm",
                            onclick: move |_| show_create_modal.set(true),
                            "Create User"
                        }
                    }
                }
                FlashMessages { flash_key: FLASH_KEY.to_string() }
                div {
                    class: "card bg-base-200",
                    div { class: "card-body", {content} }
                }
            }
        }

        CreateUserModal { show: show_create_modal, refetch_trigger }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete User".to_string(),
            message: rsx!(
                if let Some(user) = user_to_delete() {
                    p {
                        class: "py-4",
                        "Are you sure you want to delete "
                        span { class: "font-bold", "\"{user.username}\"" }
                        "? Users with active servers cannot be deleted."
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
fn CreateUserModal(mut show: Signal<bool>, mut refetch_trigger: Signal<u32>) -> Element {
    let mut form = use_signal(UserForm::default);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    use_effect(move || {
        if show() {
            form.set(UserForm::default());
            error_message.set(None);
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
            match create_user(&dto).send().await {
                Ok(_) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to create user: {}", err);
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
            title: "Create User".to_string(),
            prevent_close: is_submitting(),
            width: "max-w-2xl",
            form {
                class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                onsubmit: on_submit,
                label {
                    class: "form-control",
                    span { class: "label-text mb-1", "Username" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        value: "{current.username}",
                        oninput: move |evt| form.write().username = evt.value(),
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text mb-1", "Email" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "email",
                        value: "{current.email}",
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text mb-1", "First Name" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        value: "{current.first_name}",
                        oninput: move |evt| form.write().first_name = evt.value(),
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text mb-1", "Last Name" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        value: "{current.last_name}",
                        oninput: move |evt| form.write().last_name = evt.value(),
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text mb-1", "Password" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        value: "{current.password}",
                        oninput: move |evt| form.write().password = evt.value(),
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text mb-1", "Confirm Password" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        value: "{current.password_confirmation}",
                        oninput: move |evt| form.write().password_confirmation = evt.value(),
                    }
                }
                label {
                    class: "label cursor-pointer justify-start gap-2 sm:col-span-2",
                    input {
                        class: "checkbox",
                        r#type: "checkbox",
                        checked: current.root_admin,
                        onchange: move |evt| form.write().root_admin = evt.checked(),
                    }
                    span { class: "label-text", "Administrator" }
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
                        "Create User"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> UserForm {
        UserForm {
            username: "jane.doe".to_string(),
            email: "jane@example.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            password: "correct horse".to_string(),
            password_confirmation: "correct horse".to_string(),
            root_admin: false,
        }
    }

    /// Tests conversion of a valid user form.
    ///
    /// Expected: payload carries the password and trimmed fields
    #[test]
    fn builds_user_payload() {
        let dto = filled().to_dto().unwrap();
        assert_eq!(dto.username, "jane.doe");
        assert_eq!(dto.password.as_deref(), Some("correct horse"));
        assert!(!dto.root_admin);
    }

    /// Tests that mismatched passwords are rejected.
    ///
    /// Expected: the confirmation error
    #[test]
    fn rejects_mismatched_passwords() {
        let form = UserForm {
            password_confirmation: "wrong horse".to_string(),
            ..filled()
        };
        assert_eq!(
            form.to_dto().unwrap_err(),
            "Password confirmation does not match the password you entered."
        );
    }
}

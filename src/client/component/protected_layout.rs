use dioxus::prelude::*;

use crate::{
    client::{
        component::page::{ErrorPage, LoadingPage},
        router::Route,
        store::user::UserState,
    },
    model::account::AccountDto,
};

#[derive(PartialEq, Clone)]
pub enum Permission {
    LoggedIn,
    Admin,
}

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::LoggedIn] }
    }
}

#[component]
pub fn RequiresAdmin() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::LoggedIn, Permission::Admin] }
    }
}

fn check_permissions(user: Option<&AccountDto>, required_permissions: &[Permission]) -> bool {
    let Some(user) = user else {
        return false;
    };

    required_permissions.iter().all(|perm| match perm {
        Permission::LoggedIn => true,
        Permission::Admin => user.admin,
    })
}

#[component]
pub fn ProtectedLayout(permissions: Vec<Permission>) -> Element {
    let user_store = use_context::<Signal<UserState>>();
    let nav = navigator();

    let fetch_completed = user_store.read().fetched;
    let user_logged_in = user_store.read().user.is_some();
    let has_required_permissions = check_permissions(user_store.read().user.as_ref(), &permissions);

    use_effect(use_reactive!(|(user_logged_in, fetch_completed)| {
        if fetch_completed && !user_logged_in {
            nav.push(Route::Login {});
        }
    }));

    rsx! {
        if !fetch_completed {
            LoadingPage {  }
        } else if user_logged_in && !has_required_permissions {
            ErrorPage { status: 403, message: "You do not have permission to access this page.".to_string() }
        } else if user_logged_in {
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(admin: bool) -> AccountDto {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "admin": admin,
            "username": "admin",
            "email": "admin@example.com",
            "firstName": "Ad",
            "lastName": "Min",
            "language": "en"
        }))
        .unwrap()
    }

    /// Tests route permission checks.
    ///
    /// Expected: admin routes need an admin account; nobody passes while signed out
    #[test]
    fn checks_route_permissions() {
        let user = account(false);
        let admin = account(true);

        assert!(!check_permissions(None, &[Permission::LoggedIn]));
        assert!(check_permissions(Some(&user), &[Permission::LoggedIn]));
        assert!(!check_permissions(Some(&user), &[Permission::Admin]));
        assert!(check_permissions(Some(&admin), &[Permission::LoggedIn, Permission::Admin]));
    }
}

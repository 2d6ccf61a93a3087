use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::{
    component::{page::LoadingPage, FlashMessages, Page},
    config::ClientConfig,
    router::Route,
    store::{flash::FlashState, user::UserState},
};

#[cfg(feature = "web")]
use crate::{
    client::{
        api::{
            account::get_account,
            auth::{get_csrf_cookie, login, login_checkpoint},
        },
        model::error::ApiError,
    },
    model::auth::{LoginCheckpointDto, LoginDto, LoginResponseDto},
};

const FLASH_KEY: &str = "auth:login";

/// Signs in, then loads the account into the session store.
#[cfg(feature = "web")]
async fn complete_login(
    response: LoginResponseDto,
    mut user_store: Signal<UserState>,
    mut confirmation_token: Signal<Option<String>>,
) -> Result<(), ApiError> {
    if !response.data.complete {
        confirmation_token.set(response.data.confirmation_token);
        return Ok(());
    }

    let account = get_account().send().await?;
    tracing::info!("Signed in as {}", account.username);
    user_store.set(UserState::signed_in(account));
    Ok(())
}

#[component]
pub fn Login() -> Element {
    let config = use_context::<ClientConfig>();
    let user_store = use_context::<Signal<UserState>>();
    let mut flash = use_context::<Signal<FlashState>>();
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut code = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let confirmation_token = use_signal(|| None::<String>);

    use_effect(move || {
        if user_store.read().user.is_some() {
            nav.push(Route::Dashboard {});
        }
    });

    let on_login = move |evt: Event<FormData>| {
        evt.prevent_default();
        if username().trim().is_empty() || password().is_empty() {
            flash.write().error(FLASH_KEY, "A username or email and a password are required.");
            return;
        }

        flash.write().clear_key(FLASH_KEY);
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let dto = LoginDto {
                user: username().trim().to_string(),
                password: password(),
                recaptcha_response: None,
            };

            let result = async {
                get_csrf_cookie().send().await?;
                let response = login(&dto).send().await?;
                complete_login(response, user_store, confirmation_token).await
            }
            .await;

            if let Err(err) = result {
                tracing::error!("Failed to log in: {}", err);
                flash.write().error(FLASH_KEY, err.message);
                password.set(String::new());
            }
            submitting.set(false);
        });
    };

    let on_checkpoint = move |evt: Event<FormData>| {
        evt.prevent_default();
        let Some(token) = confirmation_token() else {
            return;
        };

        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let dto = LoginCheckpointDto {
                confirmation_token: token,
                authentication_code: Some(code().trim().to_string()),
                recovery_token: None,
            };

            let result = async {
                let response = login_checkpoint(&dto).send().await?;
                complete_login(response, user_store, confirmation_token).await
            }
            .await;

            if let Err(err) = result {
                tracing::error!("Failed to complete login checkpoint: {}", err);
                flash.write().error(FLASH_KEY, err.message);
                code.set(String::new());
            }
            submitting.set(false);
        });
    };

    if !user_store.read().fetched || user_store.read().user.is_some() {
        return rsx!(LoadingPage {});
    }

    rsx! {
        Title { "Login | {config.site_name}" }
        Page {
            class: "flex flex-col gap-6 items-center justify-center w-full h-full",
            div {
                class: "card bg-base-200 w-full max-w-sm",
                div {
                    class: "card-body",
                    h1 {
                        class: "card-title text-2xl justify-center mb-2",
                        "{config.site_name}"
                    }
                    FlashMessages { flash_key: FLASH_KEY.to_string() }
                    if confirmation_token().is_some() {
                        form {
                            class: "flex flex-col gap-4",
                            onsubmit: on_checkpoint,
                            label {
                                class: "form-control",
                                span { class: "label-text mb-1", "Authentication code" }
                                input {
                                    class: "input input-bordered w-full",
                                    r#type: "text",
                                    autocomplete: "one-time-code",
                                    value: "{code}",
                                    disabled: submitting(),
                                    oninput: move |evt| code.set(evt.value()),
                                }
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                disabled: submitting(),
                                "Continue"
                            }
                        }
                    } else {
                        form {
                            class: "flex flex-col gap-4",
                            onsubmit: on_login,
                            label {
                                class: "form-control",
                                span { class: "label-text mb-1", "Username or Email" }
                                input {
                                    class: "input input-bordered w-full",
                                    r#type: "text",
                                    value: "{username}",
                                    disabled: submitting(),
                                    oninput: move |evt| username.set(evt.value()),
                                }
                            }
                            label {
                                class: "form-control",
                                span { class: "label-text mb-1", "Password" }
                                input {
                                    class: "input input-bordered w-full",
                                    r#type: "password",
                                    value: "{password}",
                                    disabled: submitting(),
                                    oninput: move |evt| password.set(evt.value()),
                                }
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                disabled: submitting(),
                                if submitting() {
                                    span { class: "loading loading-spinner loading-sm mr-2" }
                                }
                                "Login"
                            }
                        }
                    }
                }
            }
        }
    }
}

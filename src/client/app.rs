use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::{
    config::ClientConfig,
    constant::{STYLESHEET_URL, TAILWIND_SCRIPT_URL},
    router::Route,
    store::{flash::FlashState, user::UserState},
};

#[cfg(feature = "web")]
use crate::client::{api::account::get_account, constant::GLOBAL_FLASH_KEY};

#[component]
pub fn App() -> Element {
    let config = use_context_provider(ClientConfig::from_env);
    let mut user_store = use_context_provider(|| Signal::new(UserState::default()));
    let mut flash = use_context_provider(|| Signal::new(FlashState::default()));

    // Fetch the signed in account on first load; 401 means nobody is signed in
    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move { get_account().send().await });

        use_effect(move || match &*future.read_unchecked() {
            Some(Ok(account)) => user_store.set(UserState::signed_in(account.clone())),
            Some(Err(err)) => {
                if err.status != 401 {
                    tracing::error!("Failed to fetch account: {}", err);
                    flash.write().error(GLOBAL_FLASH_KEY, err.message.clone());
                }
                user_store.set(UserState::signed_out());
            }
            None => (),
        });
    }

    #[cfg(not(feature = "web"))]
    use_hook(move || user_store.set(UserState::signed_out()));

    rsx! {
        Title { "{config.site_name}" }
        document::Meta {
            name: "description",
            content: "Game server management panel"
        }
        document::Link { rel: "stylesheet", href: STYLESHEET_URL }
        document::Script { src: TAILWIND_SCRIPT_URL }
        Router::<Route> {}
    }
}

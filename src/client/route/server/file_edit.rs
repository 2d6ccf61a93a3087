use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::{
    component::{FlashMessages, LoadingIndicator},
    model::cache::Cache,
    router::Route,
    store::{
        flash::{FlashKind, FlashState},
        server::ServerState,
    },
    util::path::{decode_path, normalize_file_path, parent_directory},
};

#[cfg(feature = "web")]
use crate::client::api::file::{get_file_contents, save_file_contents};

const FLASH_KEY: &str = "files:edit";

#[component]
pub fn FileEdit(id: String, segments: Vec<String>) -> Element {
    let _ = segments;
    let state = use_context::<Signal<ServerState>>();
    let mut flash = use_context::<Signal<FlashState>>();
    let file = normalize_file_path(&decode_path(&use_route::<Route>().to_string()));

    let mut contents = use_signal(Cache::<String>::default);
    let mut draft = use_signal(String::new);
    let mut saving = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = {
        let (server_id, path) = (id.clone(), file.clone());
        use_resource(use_reactive!(|(server_id, path)| async move {
            get_file_contents(&server_id, &path).send().await
        }))
    };

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(text) => draft.set(text.clone()),
                Err(err) => tracing::error!("Failed to fetch file contents: {}", err),
            }
            contents.set(Cache::from(result.clone()));
        }
    });

    let on_save = {
        let id = id.clone();
        let file = file.clone();
        move |_: MouseEvent| {
            saving.set(true);

            #[cfg(feature = "web")]
            {
                let id = id.clone();
                let file = file.clone();
                spawn(async move {
                    match save_file_contents(&id, &file, &draft()).send().await {
                        Ok(()) => {
                            flash.write().clear_key(FLASH_KEY);
                            flash.write().add(FLASH_KEY, FlashKind::Success, "File saved.");
                        }
                        Err(err) => {
                            tracing::error!("Failed to save {}: {}", file, err);
                            flash.write().error(FLASH_KEY, err.message);
                        }
                    }
                    saving.set(false);
                });
            }
        }
    };

    let can_save = state.read().can("file.update");
    let parent = Route::directory(&id, &parent_directory(&file));

    let editor = match &*contents.read() {
        Cache::NotFetched | Cache::Loading => rsx!(
            div { class: "flex justify-center py-8", span { class: "loading loading-spinner" } }
        ),
        Cache::Error(err) => rsx!(
            div { class: "alert alert-error", "{err.message}" }
        ),
        Cache::Fetched(_) => rsx!(
            textarea {
                class: "textarea textarea-bordered w-full h-[60vh] font-mono text-sm",
                spellcheck: false,
                readonly: !can_save,
                value: "{draft}",
                oninput: move |evt| draft.set(evt.value()),
            }
        ),
    };

    rsx! {
        div {
            class: "flex flex-wrap items-center justify-between gap-4 mb-4",
            div {
                class: "flex items-center gap-2",
                Link { to: parent, class: "btn btn-sm btn-ghost", "Back" }
                code { class: "text-sm", "{file}" }
                LoadingIndicator { loading: saving }
            }
            if can_save {
                button {
                    class: "btn btn-primary btn-sm",
                    disabled: saving() || !contents.read().is_success(),
                    onclick: on_save,
                    "Save Content"
                }
            }
        }
        FlashMessages { flash_key: FLASH_KEY.to_string() }
        {editor}
    }
}

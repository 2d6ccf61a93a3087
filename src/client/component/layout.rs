use dioxus::prelude::*;

use crate::client::{
    component::{FlashMessages, Header},
    constant::GLOBAL_FLASH_KEY,
    router::Route,
    store::flash::FlashState,
};

/// Page chrome shared by every routed page. Page-wide flash messages are dropped on
/// navigation.
#[component]
pub fn Layout() -> Element {
    let route = use_route::<Route>();
    let mut flash = use_context::<Signal<FlashState>>();

    use_effect(use_reactive!(|(route,)| {
        let _ = route;
        flash.write().clear_key(GLOBAL_FLASH_KEY);
    }));

    rsx!(
        Header {}
        div {
            class: "fixed top-20 inset-x-0 z-40 container mx-auto px-4",
            FlashMessages { flash_key: GLOBAL_FLASH_KEY.to_string() }
        }
        Outlet::<Route> {}
    )
}

mod app;
mod colors;
mod fetch;
mod nav_menu;
mod roster;
mod time_format;

use leptos::mount::mount_to;
use leptos::prelude::*;
use std::any::Any;
use std::cell::RefCell;
use wasm_bindgen::JsCast;

use crate::app::App;
use crate::roster::RosterConfig;

thread_local! {
    static APP_MOUNT_HANDLE: RefCell<Option<Box<dyn Any>>> = RefCell::new(None);
}

fn main() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let mount_element = document.get_element_by_id("app");
    // The host page can point the roster at another endpoint via data-api-url.
    let config = RosterConfig::with_api_url(
        mount_element
            .as_ref()
            .and_then(|el| el.get_attribute("data-api-url")),
    );
    let mount_target = mount_element
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .or_else(|| document.body());
    let Some(target) = mount_target else {
        return;
    };

    APP_MOUNT_HANDLE.with(move |slot| {
        // Drop any previous mount so its listeners stop touching the page.
        let _old = slot.borrow_mut().take();
        let handle = mount_to(target, move || view! { <App config=config /> });
        *slot.borrow_mut() = Some(Box::new(handle));
    });
}

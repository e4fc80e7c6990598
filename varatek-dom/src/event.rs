//! Listening to the live page.

use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use crate::{
    async_task,
    backend::{DomBackend, PageBackend},
    binding::LANG_SWITCH_ATTR,
    effects,
    fetch::FetchTransport,
    log_js_error,
    site::Site,
};

/// The site over the live page.
pub type DomSite = Site<DomBackend, FetchTransport>;

fn listen(target: &web_sys::Element, ty: &str, f: impl 'static + FnMut(web_sys::Event)) {
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(f);
    if let Err(err) = target.add_event_listener_with_callback(ty, cb.as_ref().unchecked_ref()) {
        log_js_error(&err);
    }
    // listeners live as long as the page
    cb.forget();
}

/// Install all event listeners of the site.
pub fn bind_events(site: Rc<DomSite>) {
    let backend = site.backend().clone();
    let config = site.config().clone();

    if let Some(toggle) = backend.first_with_class(&config.menu_toggle_class) {
        let site = site.clone();
        listen(&toggle, "click", move |_| {
            site.toggle_menu();
        });
    }

    for link in effects::anchor_links(&*backend) {
        let site = site.clone();
        let target = link.clone();
        listen(&link, "click", move |ev| {
            if site.follow_anchor(&target) {
                ev.prevent_default();
            }
        });
    }

    for button in backend.elements_with_attr(LANG_SWITCH_ATTR) {
        let site = site.clone();
        let target = button.clone();
        listen(&button, "click", move |_| {
            let Some(code) = target.get_attribute(LANG_SWITCH_ATTR) else {
                return;
            };
            if let Err(err) = site.switch_language(&code) {
                log::warn!("{}", err);
            }
        });
    }

    if let Some(form) = site.form() {
        let site = site.clone();
        listen(form.form(), "submit", move |ev| {
            ev.prevent_default();
            let site = site.clone();
            async_task(async move {
                site.submit_form().await;
            });
        });
    }

    observe_reveal(site);
}

fn observe_reveal(site: Rc<DomSite>) {
    let backend = site.backend().clone();
    let elements = backend.elements_with_class(&site.config().reveal_class);
    if elements.is_empty() {
        return;
    }
    let threshold = site.config().reveal_threshold;
    let visible_class = site.config().visible_class.clone();
    let cb = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if site.reveal(&target, entry.is_intersecting()) {
                    observer.unobserve(&target);
                }
            }
        },
    );
    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        match web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init) {
            Ok(x) => x,
            Err(err) => {
                // without observers, show everything at once
                log_js_error(&err);
                for elem in elements.iter() {
                    backend.toggle_class(elem, &visible_class, Some(true));
                }
                return;
            }
        };
    cb.forget();
    for elem in elements.iter() {
        observer.observe(elem);
    }
}

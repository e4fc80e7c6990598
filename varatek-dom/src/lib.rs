//! The DOM binding of the VaraTek site.
//!
//! The site logic is written against `backend::PageBackend` ,
//! so that it runs on the live page ( `DomBackend` ) as well as on an in-memory document ( `MemBackend` ).
//!
//! ### Quick Start
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use varatek_dom::{prelude::*, event::bind_events};
//!
//! fn start() -> Result<(), varatek_dom::Error> {
//!     let backend = Rc::new(DomBackend::new()?);
//!     let site = Site::start(backend, FetchTransport::new()?, SiteConfig::default())?;
//!     bind_events(Rc::new(site));
//!     Ok(())
//! }
//! ```
//!
//! The same logic over an in-memory document:
//!
//! ```rust
//! use std::rc::Rc;
//! use varatek_dom::prelude::*;
//!
//! let backend = Rc::new(MemBackend::new());
//! let h1 = MemElement::new("h1").with_attr("data-i18n", "hero.title");
//! backend.body().append_child(&h1);
//! let ctx = LangContext::new(Dictionary::builtin().unwrap(), Lang::Fi);
//! apply_translations(&*backend, &ctx, "is-active");
//! assert_eq!(h1.text_content(), "Rakennamme modernit avaimet käteen -kodit");
//! ```

#![warn(missing_docs)]

use wasm_bindgen::{JsCast, JsValue};

pub mod applier;
pub mod backend;
pub mod binding;
pub mod config;
pub mod effects;
mod error;
pub use error::Error;
pub mod event;
pub mod fetch;
pub mod form;
pub mod lang_switch;
pub mod site;

/// The types that should usually be imported.
pub mod prelude {
    pub use crate::applier::apply_translations;
    pub use crate::backend::{DomBackend, MemBackend, MemElement, PageBackend};
    pub use crate::config::SiteConfig;
    pub use crate::fetch::{FetchTransport, Transport};
    pub use crate::form::{FormState, SubmitOutcome};
    pub use crate::site::Site;
    pub use varatek_i18n::{Dictionary, Lang, LangContext};
}

pub(crate) fn log_js_error(err: &JsValue) {
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        log::error!("{}", String::from(err.message()));
    } else {
        log::error!("(JavaScript Error)");
    }
}

/// A common async runner for DOM environment
#[inline]
pub fn async_task(fut: impl 'static + std::future::Future<Output = ()>) {
    wasm_bindgen_futures::spawn_local(fut);
}

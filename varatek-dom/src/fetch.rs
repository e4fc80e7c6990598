//! Network and timer access for the contact form.

use std::future::Future;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::{error::Error, log_js_error};

/// The asynchronous capabilities the contact form needs.
pub trait Transport: 'static {
    /// POST the fields to `action` as form data, resolving to the HTTP status.
    ///
    /// Failing to get any response at all is an `Err` .
    fn post_form(
        &self,
        action: &str,
        fields: Vec<(String, String)>,
    ) -> impl Future<Output = Result<u16, Error>>;

    /// Resolve after `ms` milliseconds.
    fn sleep(&self, ms: u32) -> impl Future<Output = ()>;
}

/// A transport using `fetch` and `setTimeout` of the page.
#[derive(Debug, Clone)]
pub struct FetchTransport {
    window: web_sys::Window,
}

impl FetchTransport {
    /// Create a transport for the current page.
    pub fn new() -> Result<Self, Error> {
        let window = web_sys::window().ok_or_else(|| Error::BackendError {
            msg: "Cannot init fetch outside web page environment".into(),
            err: None,
        })?;
        Ok(Self { window })
    }
}

impl Transport for FetchTransport {
    async fn post_form(&self, action: &str, fields: Vec<(String, String)>) -> Result<u16, Error> {
        let form_data =
            web_sys::FormData::new().map_err(|err| Error::from_js("Cannot create form data", &err))?;
        for (name, value) in fields.iter() {
            form_data
                .append_with_str(name, value)
                .map_err(|err| Error::from_js("Cannot create form data", &err))?;
        }
        let init = web_sys::RequestInit::new();
        init.set_method("POST");
        init.set_body(&form_data);
        let resp = JsFuture::from(self.window.fetch_with_str_and_init(action, &init))
            .await
            .map_err(|err| Error::from_js("Network request failed", &err))?;
        let resp: web_sys::Response = resp
            .dyn_into()
            .map_err(|err| Error::from_js("Network request failed", &err))?;
        Ok(resp.status())
    }

    async fn sleep(&self, ms: u32) {
        let window = self.window.clone();
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let ret = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                &resolve,
                ms.min(i32::MAX as u32) as i32,
            );
            if let Err(err) = ret {
                log_js_error(&err);
                let _ = resolve.call0(&JsValue::UNDEFINED);
            }
        });
        if let Err(err) = JsFuture::from(promise).await {
            log_js_error(&err);
        }
    }
}

use wasm_bindgen::{JsCast, JsValue};

use super::PageBackend;
use crate::{error::Error, log_js_error};

/// A backend over the live web page.
#[derive(Debug, Clone)]
pub struct DomBackend {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl DomBackend {
    /// Create a backend for the current page.
    pub fn new() -> Result<Self, Error> {
        let window = web_sys::window().ok_or_else(|| Error::BackendError {
            msg: "Cannot init DOM backend outside web page environment".into(),
            err: None,
        })?;
        let document = window.document().ok_or_else(|| Error::BackendError {
            msg: "Cannot init DOM backend when document is not ready".into(),
            err: None,
        })?;
        Ok(Self { window, document })
    }

    /// The window of the page.
    pub fn window(&self) -> &web_sys::Window {
        &self.window
    }

    /// The document of the page.
    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }

    fn query_all(&self, selector: &str) -> Vec<web_sys::Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => node_list_elements(&list),
            Err(err) => {
                log_js_error(&err);
                vec![]
            }
        }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        // accessing `localStorage` throws in some privacy modes
        match self.window.local_storage() {
            Ok(x) => x,
            Err(err) => {
                log_js_error(&err);
                None
            }
        }
    }
}

fn node_list_elements(list: &web_sys::NodeList) -> Vec<web_sys::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web_sys::Element>().ok())
        .collect()
}

fn log_result(ret: Result<(), JsValue>) {
    if let Err(err) = ret {
        log_js_error(&err);
    }
}

impl PageBackend for DomBackend {
    type Element = web_sys::Element;

    fn set_document_lang(&self, lang: &str) {
        if let Some(root) = self.document.document_element() {
            log_result(root.set_attribute("lang", lang));
        }
    }

    fn set_title(&self, title: &str) {
        self.document.set_title(title);
    }

    fn set_meta_description(&self, content: &str) {
        match self.document.query_selector(r#"meta[name="description"]"#) {
            Ok(Some(meta)) => log_result(meta.set_attribute("content", content)),
            Ok(None) => {}
            Err(err) => log_js_error(&err),
        }
    }

    fn elements_with_attr(&self, name: &str) -> Vec<Self::Element> {
        self.query_all(&format!("[{}]", name))
    }

    fn elements_with_class(&self, class_name: &str) -> Vec<Self::Element> {
        self.query_all(&format!(".{}", class_name))
    }

    fn element_by_id(&self, id: &str) -> Option<Self::Element> {
        self.document.get_element_by_id(id)
    }

    fn tag_name(&self, elem: &Self::Element) -> String {
        elem.tag_name().to_ascii_lowercase()
    }

    fn attr(&self, elem: &Self::Element, name: &str) -> Option<String> {
        elem.get_attribute(name)
    }

    fn has_attr(&self, elem: &Self::Element, name: &str) -> bool {
        elem.has_attribute(name)
    }

    fn set_attr(&self, elem: &Self::Element, name: &str, value: &str) {
        log_result(elem.set_attribute(name, value));
    }

    fn set_text(&self, elem: &Self::Element, text: &str) {
        elem.set_text_content(Some(text));
    }

    fn set_inner_html(&self, elem: &Self::Element, html: &str) {
        elem.set_inner_html(html);
    }

    fn toggle_class(&self, elem: &Self::Element, class_name: &str, force: Option<bool>) -> bool {
        let class_list = elem.class_list();
        let ret = match force {
            None => class_list.toggle(class_name),
            Some(force) => class_list.toggle_with_force(class_name, force),
        };
        match ret {
            Ok(x) => x,
            Err(err) => {
                log_js_error(&err);
                class_list.contains(class_name)
            }
        }
    }

    fn has_class(&self, elem: &Self::Element, class_name: &str) -> bool {
        elem.class_list().contains(class_name)
    }

    fn scroll_into_view(&self, elem: &Self::Element) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        elem.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn form_fields(&self, form: &Self::Element) -> Vec<(String, String)> {
        let Some(form) = form.dyn_ref::<web_sys::HtmlFormElement>() else {
            return vec![];
        };
        let form_data = match web_sys::FormData::new_with_form(form) {
            Ok(x) => x,
            Err(err) => {
                log_js_error(&err);
                return vec![];
            }
        };
        let iter = match js_sys::try_iter(&form_data) {
            Ok(Some(x)) => x,
            Ok(None) => return vec![],
            Err(err) => {
                log_js_error(&err);
                return vec![];
            }
        };
        let mut ret = vec![];
        for entry in iter {
            let entry = match entry {
                Ok(x) => js_sys::Array::from(&x),
                Err(err) => {
                    log_js_error(&err);
                    continue;
                }
            };
            // file inputs yield `File` values, which are not sent
            if let (Some(name), Some(value)) = (entry.get(0).as_string(), entry.get(1).as_string()) {
                ret.push((name, value));
            }
        }
        ret
    }

    fn reset_form(&self, form: &Self::Element) {
        if let Some(form) = form.dyn_ref::<web_sys::HtmlFormElement>() {
            form.reset();
        }
    }

    fn set_submit_disabled(&self, form: &Self::Element, disabled: bool) {
        let controls = match form.query_selector_all(r#"button:not([type]), [type="submit" i]"#) {
            Ok(list) => node_list_elements(&list),
            Err(err) => {
                log_js_error(&err);
                return;
            }
        };
        for control in controls {
            if disabled {
                log_result(control.set_attribute("disabled", ""));
            } else {
                log_result(control.remove_attribute("disabled"));
            }
        }
    }

    fn storage_item(&self, key: &str) -> Option<String> {
        let storage = self.storage()?;
        match storage.get_item(key) {
            Ok(x) => x,
            Err(err) => {
                log_js_error(&err);
                None
            }
        }
    }

    fn set_storage_item(&self, key: &str, value: &str) -> Result<(), Error> {
        let storage = self.storage().ok_or_else(|| Error::BackendError {
            msg: "Local storage is not available".into(),
            err: None,
        })?;
        storage
            .set_item(key, value)
            .map_err(|err| Error::from_js("Cannot write local storage", &err))
    }

    fn current_year(&self) -> i32 {
        js_sys::Date::new_0().get_full_year() as i32
    }
}

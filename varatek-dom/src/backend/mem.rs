use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use chrono::Datelike;
use rustc_hash::FxHashMap;

use super::PageBackend;
use crate::error::Error;

const VOID_ELEMENTS: [&str; 8] = ["area", "br", "hr", "img", "input", "link", "meta", "source"];

enum MemNode {
    Element(MemElement),
    Text(String),
    Html(String),
}

struct MemElementData {
    tag_name: String,
    attrs: Vec<(String, String)>,
    children: Vec<MemNode>,
    value: Option<String>,
}

/// An element of `MemBackend` .
///
/// Cloning an element gives another handle to the same element.
#[derive(Clone)]
pub struct MemElement {
    inner: Rc<RefCell<MemElementData>>,
}

impl PartialEq for MemElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for MemElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.inner.borrow().tag_name)
    }
}

impl MemElement {
    /// Create a detached element.
    pub fn new(tag_name: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemElementData {
                tag_name: tag_name.to_ascii_lowercase(),
                attrs: vec![],
                children: vec![],
                value: None,
            })),
        }
    }

    /// Set an attribute and return the element (for building trees).
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append a text node and return the element (for building trees).
    pub fn with_text(self, text: &str) -> Self {
        self.inner
            .borrow_mut()
            .children
            .push(MemNode::Text(text.to_string()));
        self
    }

    /// Append a child element and return the element (for building trees).
    pub fn with_child(self, child: MemElement) -> Self {
        self.append_child(&child);
        self
    }

    /// Append a child element.
    pub fn append_child(&self, child: &MemElement) {
        self.inner
            .borrow_mut()
            .children
            .push(MemNode::Element(child.clone()));
    }

    /// The lower-cased tag name.
    pub fn tag_name(&self) -> String {
        self.inner.borrow().tag_name.clone()
    }

    /// Get an attribute value.
    pub fn attr(&self, name: &str) -> Option<String> {
        self.inner
            .borrow()
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    /// Set an attribute value.
    pub fn set_attr(&self, name: &str, value: &str) {
        let attrs = &mut self.inner.borrow_mut().attrs;
        match attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => attrs.push((name.to_string(), value.to_string())),
        }
    }

    /// Remove an attribute.
    pub fn remove_attr(&self, name: &str) {
        self.inner.borrow_mut().attrs.retain(|(n, _)| n != name);
    }

    /// Whether the element has the class.
    pub fn has_class(&self, class_name: &str) -> bool {
        self.attr("class")
            .map(|x| x.split_ascii_whitespace().any(|c| c == class_name))
            .unwrap_or(false)
    }

    fn set_class(&self, class_name: &str, enabled: bool) {
        let mut classes: Vec<String> = self
            .attr("class")
            .map(|x| x.split_ascii_whitespace().map(|c| c.to_string()).collect())
            .unwrap_or_default();
        let pos = classes.iter().position(|c| c == class_name);
        match (pos, enabled) {
            (None, true) => classes.push(class_name.to_string()),
            (Some(pos), false) => {
                classes.remove(pos);
            }
            _ => return,
        }
        self.set_attr("class", &classes.join(" "));
    }

    /// The current value of a form field.
    ///
    /// It is the `value` attribute until the value is changed with `set_value` .
    pub fn value(&self) -> String {
        let live = self.inner.borrow().value.clone();
        live.or_else(|| self.attr("value")).unwrap_or_default()
    }

    /// Change the value of a form field, as a visitor typing into it.
    pub fn set_value(&self, value: &str) {
        self.inner.borrow_mut().value = Some(value.to_string());
    }

    fn replace_children(&self, node: MemNode) {
        self.inner.borrow_mut().children = vec![node];
    }

    /// The text content, with markup of HTML segments removed.
    pub fn text_content(&self) -> String {
        let mut ret = String::new();
        self.write_text_content(&mut ret);
        ret
    }

    fn write_text_content(&self, ret: &mut String) {
        for child in self.inner.borrow().children.iter() {
            match child {
                MemNode::Element(x) => x.write_text_content(ret),
                MemNode::Text(x) => ret.push_str(x),
                MemNode::Html(x) => {
                    let mut in_tag = false;
                    for c in x.chars() {
                        match c {
                            '<' => in_tag = true,
                            '>' if in_tag => in_tag = false,
                            c if !in_tag => ret.push(c),
                            _ => {}
                        }
                    }
                }
            }
        }
    }

    /// Serialize the children as HTML.
    ///
    /// Text is escaped, while HTML segments are written as is.
    pub fn inner_html(&self) -> String {
        let mut ret = String::new();
        self.write_inner_html(&mut ret);
        ret
    }

    /// Serialize the element as HTML.
    pub fn outer_html(&self) -> String {
        let mut ret = String::new();
        self.write_outer_html(&mut ret);
        ret
    }

    fn write_inner_html(&self, ret: &mut String) {
        for child in self.inner.borrow().children.iter() {
            match child {
                MemNode::Element(x) => x.write_outer_html(ret),
                MemNode::Text(x) => ret.push_str(&html_escape::encode_text(x)),
                MemNode::Html(x) => ret.push_str(x),
            }
        }
    }

    fn write_outer_html(&self, ret: &mut String) {
        let (tag_name, is_void) = {
            let inner = self.inner.borrow();
            ret.push('<');
            ret.push_str(&inner.tag_name);
            for (name, value) in inner.attrs.iter() {
                ret.push(' ');
                ret.push_str(name);
                ret.push_str("=\"");
                ret.push_str(&html_escape::encode_double_quoted_attribute(value));
                ret.push('"');
            }
            ret.push('>');
            (
                inner.tag_name.clone(),
                VOID_ELEMENTS.contains(&inner.tag_name.as_str()),
            )
        };
        if is_void {
            return;
        }
        self.write_inner_html(ret);
        ret.push_str("</");
        ret.push_str(&tag_name);
        ret.push('>');
    }

    fn child_elements(&self) -> Vec<MemElement> {
        self.inner
            .borrow()
            .children
            .iter()
            .filter_map(|x| match x {
                MemNode::Element(x) => Some(x.clone()),
                _ => None,
            })
            .collect()
    }

    /// All descendant elements in document order, excluding `self` .
    pub fn descendants(&self) -> Vec<MemElement> {
        let mut ret = vec![];
        self.collect_descendants(&mut ret);
        ret
    }

    fn collect_descendants(&self, ret: &mut Vec<MemElement>) {
        for child in self.child_elements() {
            ret.push(child.clone());
            child.collect_descendants(ret);
        }
    }
}

/// A backend that keeps the document in memory.
///
/// It starts as `<html><head><title></title></head><body></body></html>` ;
/// the page content is built under `body()` .
/// The result can be written as HTML with `write_html` .
pub struct MemBackend {
    html: MemElement,
    head: MemElement,
    title: MemElement,
    body: MemElement,
    storage: RefCell<FxHashMap<String, String>>,
    storage_available: Cell<bool>,
    scrolled: RefCell<Vec<MemElement>>,
    current_year: Cell<i32>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemBackend {
    /// Create an empty document.
    pub fn new() -> Self {
        let title = MemElement::new("title");
        let head = MemElement::new("head").with_child(title.clone());
        let body = MemElement::new("body");
        let html = MemElement::new("html")
            .with_child(head.clone())
            .with_child(body.clone());
        Self {
            html,
            head,
            title,
            body,
            storage: Default::default(),
            storage_available: Cell::new(true),
            scrolled: Default::default(),
            current_year: Cell::new(chrono::Local::now().year()),
        }
    }

    /// The `<html>` element.
    pub fn html(&self) -> &MemElement {
        &self.html
    }

    /// The `<head>` element.
    pub fn head(&self) -> &MemElement {
        &self.head
    }

    /// The `<body>` element.
    pub fn body(&self) -> &MemElement {
        &self.body
    }

    /// The document title.
    pub fn title(&self) -> String {
        self.title.text_content()
    }

    /// Make the storage fail on writes, like a browser in some privacy modes.
    pub fn set_storage_available(&self, available: bool) {
        self.storage_available.set(available);
    }

    /// Elements that have been scrolled into view, in order.
    pub fn scrolled(&self) -> Vec<MemElement> {
        self.scrolled.borrow().clone()
    }

    /// Override the current year.
    pub fn set_current_year(&self, year: i32) {
        self.current_year.set(year);
    }

    /// Write the whole document as HTML.
    pub fn write_html(&self, w: &mut impl std::io::Write) -> std::io::Result<()> {
        write!(w, "<!DOCTYPE html>{}", self.html.outer_html())
    }

    fn all_elements(&self) -> Vec<MemElement> {
        let mut ret = vec![self.html.clone()];
        self.html.collect_descendants(&mut ret);
        ret
    }
}

// a `<button>` without a `type` submits its form
fn is_submit_control(elem: &MemElement) -> bool {
    match elem.attr("type") {
        Some(ty) => ty.eq_ignore_ascii_case("submit"),
        None => elem.tag_name().eq_ignore_ascii_case("button"),
    }
}

impl PageBackend for MemBackend {
    type Element = MemElement;

    fn set_document_lang(&self, lang: &str) {
        self.html.set_attr("lang", lang);
    }

    fn set_title(&self, title: &str) {
        self.title.replace_children(MemNode::Text(title.to_string()));
    }

    fn set_meta_description(&self, content: &str) {
        let meta = self.head.descendants().into_iter().find(|x| {
            x.tag_name() == "meta" && x.attr("name").as_deref() == Some("description")
        });
        if let Some(meta) = meta {
            meta.set_attr("content", content);
        }
    }

    fn elements_with_attr(&self, name: &str) -> Vec<Self::Element> {
        self.all_elements()
            .into_iter()
            .filter(|x| x.attr(name).is_some())
            .collect()
    }

    fn elements_with_class(&self, class_name: &str) -> Vec<Self::Element> {
        self.all_elements()
            .into_iter()
            .filter(|x| x.has_class(class_name))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<Self::Element> {
        self.all_elements()
            .into_iter()
            .find(|x| x.attr("id").as_deref() == Some(id))
    }

    fn tag_name(&self, elem: &Self::Element) -> String {
        elem.tag_name().to_ascii_lowercase()
    }

    fn attr(&self, elem: &Self::Element, name: &str) -> Option<String> {
        elem.attr(name)
    }

    fn set_attr(&self, elem: &Self::Element, name: &str, value: &str) {
        elem.set_attr(name, value);
    }

    fn set_text(&self, elem: &Self::Element, text: &str) {
        elem.replace_children(MemNode::Text(text.to_string()));
    }

    fn set_inner_html(&self, elem: &Self::Element, html: &str) {
        elem.replace_children(MemNode::Html(html.to_string()));
    }

    fn toggle_class(&self, elem: &Self::Element, class_name: &str, force: Option<bool>) -> bool {
        let enabled = force.unwrap_or_else(|| !elem.has_class(class_name));
        elem.set_class(class_name, enabled);
        enabled
    }

    fn has_class(&self, elem: &Self::Element, class_name: &str) -> bool {
        elem.has_class(class_name)
    }

    fn scroll_into_view(&self, elem: &Self::Element) {
        self.scrolled.borrow_mut().push(elem.clone());
    }

    fn form_fields(&self, form: &Self::Element) -> Vec<(String, String)> {
        form.descendants()
            .into_iter()
            .filter(|x| x.attr("disabled").is_none())
            .filter_map(|x| {
                let name = x.attr("name")?;
                Some((name, x.value()))
            })
            .collect()
    }

    fn reset_form(&self, form: &Self::Element) {
        for field in form.descendants() {
            field.inner.borrow_mut().value = None;
        }
    }

    fn set_submit_disabled(&self, form: &Self::Element, disabled: bool) {
        let controls = form
            .descendants()
            .into_iter()
            .filter(is_submit_control);
        for control in controls {
            if disabled {
                control.set_attr("disabled", "");
            } else {
                control.remove_attr("disabled");
            }
        }
    }

    fn storage_item(&self, key: &str) -> Option<String> {
        self.storage.borrow().get(key).cloned()
    }

    fn set_storage_item(&self, key: &str, value: &str) -> Result<(), Error> {
        if !self.storage_available.get() {
            return Err(Error::BackendError {
                msg: "Local storage is not available".into(),
                err: None,
            });
        }
        self.storage
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn current_year(&self) -> i32 {
        self.current_year.get()
    }
}

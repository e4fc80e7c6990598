//! The document interface the site logic runs against.
//!
//! `DomBackend` drives the live page through `web-sys` ,
//! while `MemBackend` keeps an element tree in memory,
//! which is useful for native tests and for generating HTML ahead of time.

use crate::error::Error;

mod dom;
pub use dom::DomBackend;
mod mem;
pub use mem::{MemBackend, MemElement};

/// The interface that a document backend should implement.
///
/// Every lookup tolerates absent elements: a missing element is an empty result, never an error.
pub trait PageBackend: 'static {
    /// The element handle type.
    type Element: Clone;

    /// Set the `lang` attribute of the document element.
    fn set_document_lang(&self, lang: &str);

    /// Set the document title.
    fn set_title(&self, title: &str);

    /// Set the `content` of `<meta name="description">` if it exists.
    fn set_meta_description(&self, content: &str);

    /// All elements that carry the attribute, in document order.
    fn elements_with_attr(&self, name: &str) -> Vec<Self::Element>;

    /// All elements that have the class, in document order.
    fn elements_with_class(&self, class_name: &str) -> Vec<Self::Element>;

    /// The first element that has the class.
    fn first_with_class(&self, class_name: &str) -> Option<Self::Element> {
        self.elements_with_class(class_name).into_iter().next()
    }

    /// The element with the `id` .
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// The tag name, in lower case.
    fn tag_name(&self, elem: &Self::Element) -> String;

    /// Get an attribute value.
    fn attr(&self, elem: &Self::Element, name: &str) -> Option<String>;

    /// Whether the attribute exists.
    fn has_attr(&self, elem: &Self::Element, name: &str) -> bool {
        self.attr(elem, name).is_some()
    }

    /// Set an attribute value.
    fn set_attr(&self, elem: &Self::Element, name: &str, value: &str);

    /// Replace the content with a text node (no markup interpretation).
    fn set_text(&self, elem: &Self::Element, text: &str);

    /// Replace the content with an HTML segment.
    ///
    /// The segment is interpreted as markup, so it must come from a trusted source.
    fn set_inner_html(&self, elem: &Self::Element, html: &str);

    /// Toggle a class, or force it on or off.
    ///
    /// Returns whether the class is present afterwards.
    fn toggle_class(&self, elem: &Self::Element, class_name: &str, force: Option<bool>) -> bool;

    /// Whether the element has the class.
    fn has_class(&self, elem: &Self::Element, class_name: &str) -> bool;

    /// Smoothly scroll the element to the top of the viewport.
    fn scroll_into_view(&self, elem: &Self::Element);

    /// The name-value pairs a form would submit.
    fn form_fields(&self, form: &Self::Element) -> Vec<(String, String)>;

    /// Restore the form fields to their initial values.
    fn reset_form(&self, form: &Self::Element);

    /// Enable or disable the submit controls of a form.
    fn set_submit_disabled(&self, form: &Self::Element, disabled: bool);

    /// Read an item from the persistent storage.
    ///
    /// Unavailable storage reads as absent.
    fn storage_item(&self, key: &str) -> Option<String>;

    /// Write an item to the persistent storage.
    fn set_storage_item(&self, key: &str, value: &str) -> Result<(), Error>;

    /// The current calendar year.
    fn current_year(&self) -> i32;
}

//! Associations between page elements and dotted translation keys.
//!
//! An element opts into translation with a marker attribute holding the key:
//!
//! ```html
//! <h1 data-i18n="hero.title"></h1>
//! <p data-i18n-html="contact.subtitle"></p>
//! <input data-i18n-placeholder="form.namePlaceholder">
//! <figure data-i18n-dataset-title="projects.1"></figure>
//! ```

use crate::backend::PageBackend;

/// The attribute of a language switch button, holding the language code.
pub const LANG_SWITCH_ATTR: &str = "data-lang";

/// The attribute written by `BindingKind::DatasetTitle` .
pub const DATASET_TITLE_ATTR: &str = "data-title";

/// The part of an element a translation is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// The text content (escaped).
    Text,
    /// The inner HTML (markup interpreted).
    Html,
    /// The `placeholder` attribute.
    Placeholder,
    /// The `data-title` attribute.
    DatasetTitle,
}

impl BindingKind {
    /// All binding kinds, in applying order.
    pub const ALL: [BindingKind; 4] = [
        BindingKind::Text,
        BindingKind::Html,
        BindingKind::Placeholder,
        BindingKind::DatasetTitle,
    ];

    /// The marker attribute that selects the elements of this kind.
    pub const fn marker_attr(self) -> &'static str {
        match self {
            BindingKind::Text => "data-i18n",
            BindingKind::Html => "data-i18n-html",
            BindingKind::Placeholder => "data-i18n-placeholder",
            BindingKind::DatasetTitle => "data-i18n-dataset-title",
        }
    }
}

/// An element, the part of it to write, and the key of the translation.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding<E> {
    /// The element.
    pub target: E,
    /// The part to write.
    pub kind: BindingKind,
    /// The dotted translation key.
    pub key: String,
}

impl<E> Binding<E> {
    /// Write a translated string to the target.
    pub fn apply<B: PageBackend<Element = E>>(&self, backend: &B, value: &str) {
        match self.kind {
            BindingKind::Text => backend.set_text(&self.target, value),
            // only dictionary strings reach here, never visitor input
            BindingKind::Html => backend.set_inner_html(&self.target, value),
            BindingKind::Placeholder => backend.set_attr(&self.target, "placeholder", value),
            BindingKind::DatasetTitle => backend.set_attr(&self.target, DATASET_TITLE_ATTR, value),
        }
    }
}

/// Find all bindings of the document.
pub fn collect_bindings<B: PageBackend>(backend: &B) -> Vec<Binding<B::Element>> {
    let mut ret = vec![];
    for kind in BindingKind::ALL {
        for target in backend.elements_with_attr(kind.marker_attr()) {
            if let Some(key) = backend.attr(&target, kind.marker_attr()) {
                ret.push(Binding { target, kind, key });
            }
        }
    }
    ret
}

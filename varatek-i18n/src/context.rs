use std::cell::Cell;

use crate::{Dictionary, Lang};

/// The active language of a page, together with the dictionary it reads from.
///
/// A context is shared (usually through `Rc` ) by everything that renders text,
/// so that a language switch is seen by all of them.
#[derive(Debug)]
pub struct LangContext {
    dictionary: &'static Dictionary,
    current: Cell<Lang>,
}

impl LangContext {
    /// Create a context with an initial language.
    pub fn new(dictionary: &'static Dictionary, lang: Lang) -> Self {
        Self {
            dictionary,
            current: Cell::new(lang),
        }
    }

    /// The dictionary of this context.
    pub fn dictionary(&self) -> &'static Dictionary {
        self.dictionary
    }

    /// The active language.
    pub fn lang(&self) -> Lang {
        self.current.get()
    }

    /// Change the active language.
    ///
    /// Returns the previous one.
    pub fn set_lang(&self, lang: Lang) -> Lang {
        let old = self.current.replace(lang);
        if old != lang {
            log::debug!("language changed from {} to {}", old, lang);
        }
        old
    }

    /// Translate a dotted key in the active language.
    ///
    /// Missing translations come back as the key itself.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        let lang = self.lang();
        match self.dictionary.get(lang, key) {
            Some(s) => s,
            None => {
                log::warn!("no translation for {:?} in {}", key, lang);
                key
            }
        }
    }
}

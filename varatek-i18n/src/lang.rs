/// A language the site has translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lang {
    /// English, the default language.
    En,
    /// Finnish.
    Fi,
    /// Russian.
    ///
    /// The translations are kept, but it cannot be selected by visitors.
    Ru,
}

impl Default for Lang {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Lang {
    /// All languages with translations.
    pub const ALL: [Lang; 3] = [Lang::En, Lang::Fi, Lang::Ru];

    /// The languages a visitor can switch to.
    pub const SELECTABLE: [Lang; 2] = [Lang::En, Lang::Fi];

    /// The language used when no valid preference exists.
    pub const DEFAULT: Lang = Lang::En;

    /// The language code, as used in `lang` attributes and the stored preference.
    pub const fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fi => "fi",
            Lang::Ru => "ru",
        }
    }

    /// Parse a language code.
    ///
    /// Letter case is ignored; anything else must match exactly.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// Whether a visitor can switch to this language.
    pub fn is_selectable(self) -> bool {
        Self::SELECTABLE.contains(&self)
    }

    /// Parse a code and accept it only when it is selectable.
    pub fn selectable_from_code(code: &str) -> Option<Self> {
        Self::from_code(code).filter(|lang| lang.is_selectable())
    }

    /// Resolve a stored preference to the language in effect.
    ///
    /// Absent, unknown and non-selectable values all fall back to `Lang::DEFAULT` .
    pub fn resolve_preference(stored: Option<&str>) -> Self {
        stored
            .and_then(Self::selectable_from_code)
            .unwrap_or(Self::DEFAULT)
    }
}

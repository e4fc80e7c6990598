use crate::Lang;

/// An error raised while loading translation sources.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The TOML source of a language cannot be parsed.
    ParseFailed { lang: Lang, msg: String },
    /// A translation value is neither a string nor a table.
    InvalidValue { lang: Lang, key: String },
    /// The same language is provided more than once.
    DuplicatedLang { lang: Lang },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ParseFailed { lang, msg } => {
                write!(f, "parsing i18n TOML for {:?} failed: {}", lang.code(), msg)?;
            }
            Error::InvalidValue { lang, key } => {
                write!(
                    f,
                    "translation {:?} in {:?} is neither a string nor a table",
                    key,
                    lang.code()
                )?;
            }
            Error::DuplicatedLang { lang } => {
                write!(f, "translations for {:?} are provided twice", lang.code())?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

use wasm_bindgen::{JsCast, JsValue};

/// An error of the site runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The page environment refused an operation.
    BackendError {
        /// What was being done.
        msg: String,
        /// The message reported by the environment, if any.
        err: Option<String>,
    },
    /// The translations cannot be loaded.
    I18n(varatek_i18n::Error),
    /// The site configuration is not valid.
    Config(String),
    /// A language code that visitors cannot switch to.
    UnsupportedLanguage(String),
    /// The form endpoint answered with a non-2xx status.
    HttpStatus(u16),
    /// The form endpoint did not answer in time (milliseconds waited).
    Timeout(u32),
}

impl Error {
    pub(crate) fn from_js(msg: &str, err: &JsValue) -> Self {
        let err = if let Some(err) = err.dyn_ref::<js_sys::Error>() {
            Some(String::from(err.message()))
        } else {
            err.as_string()
        };
        Error::BackendError {
            msg: msg.to_string(),
            err,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::BackendError { msg, err } => {
                write!(f, "{}", msg)?;
                if let Some(err) = err {
                    write!(f, ": {}", err)?;
                }
            }
            Error::I18n(err) => {
                write!(f, "{}", err)?;
            }
            Error::Config(msg) => {
                write!(f, "illegal site config: {}", msg)?;
            }
            Error::UnsupportedLanguage(code) => {
                write!(f, "language {:?} is not supported", code)?;
            }
            Error::HttpStatus(status) => {
                write!(f, "the server responded with status {}", status)?;
            }
            Error::Timeout(ms) => {
                write!(f, "no response in {}ms", ms)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::I18n(err) => Some(err),
            _ => None,
        }
    }
}

impl From<varatek_i18n::Error> for Error {
    fn from(err: varatek_i18n::Error) -> Self {
        Error::I18n(err)
    }
}

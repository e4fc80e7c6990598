//! The translation store of the VaraTek site.
//!
//! Translations live in one TOML file per language under `i18n/` ,
//! and are addressed with dotted keys:
//!
//! ```rust
//! use varatek_i18n::{Dictionary, Lang, LangContext};
//!
//! let dictionary = Dictionary::builtin().unwrap();
//! assert_eq!(dictionary.lookup(Lang::En, "nav.services"), "Services");
//!
//! // a missing key is shown as is
//! assert_eq!(dictionary.lookup(Lang::Fi, "does.not.exist"), "does.not.exist");
//!
//! // the active language is carried by a context
//! let ctx = LangContext::new(dictionary, Lang::resolve_preference(Some("fi")));
//! assert_eq!(ctx.t("nav.services"), "Palvelut");
//! ```

#![warn(missing_docs)]

mod context;
pub use context::LangContext;
pub mod dictionary;
pub use dictionary::Dictionary;
mod error;
pub use error::Error;
mod lang;
pub use lang::Lang;

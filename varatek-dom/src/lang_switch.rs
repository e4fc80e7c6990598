use varatek_i18n::{Lang, LangContext};

use crate::{applier::apply_translations, backend::PageBackend, config::SiteConfig, error::Error};

/// The language in effect when the page loads, according to the stored preference.
pub fn initial_language<B: PageBackend>(backend: &B, config: &SiteConfig) -> Lang {
    let stored = backend.storage_item(&config.storage_key);
    let lang = Lang::resolve_preference(stored.as_deref());
    if let Some(stored) = stored {
        if Lang::selectable_from_code(&stored).is_none() {
            log::warn!("ignored stored language {:?}", stored);
        }
    }
    lang
}

/// Switch to the language of `code` , remember it, and re-translate the document.
///
/// Codes that visitors cannot select leave everything unchanged.
pub fn switch_language<B: PageBackend>(
    backend: &B,
    ctx: &LangContext,
    config: &SiteConfig,
    code: &str,
) -> Result<Lang, Error> {
    let lang = Lang::selectable_from_code(code)
        .ok_or_else(|| Error::UnsupportedLanguage(code.to_string()))?;
    ctx.set_lang(lang);
    if let Err(err) = backend.set_storage_item(&config.storage_key, lang.code()) {
        // the page still switches, the choice is just not remembered
        log::warn!("cannot remember the language: {}", err);
    }
    apply_translations(backend, ctx, &config.active_class);
    Ok(lang)
}

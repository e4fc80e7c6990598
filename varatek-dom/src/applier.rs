use varatek_i18n::LangContext;

use crate::{
    backend::PageBackend,
    binding::{collect_bindings, LANG_SWITCH_ATTR},
};

/// Rewrite every translated part of the document in the language of `ctx` .
///
/// This is a total rewrite, so calling it again with the same language changes nothing.
/// No storage or network is touched.
/// Returns the number of bindings written.
pub fn apply_translations<B: PageBackend>(backend: &B, ctx: &LangContext, active_class: &str) -> usize {
    let lang = ctx.lang();
    backend.set_document_lang(lang.code());
    backend.set_title(ctx.t("meta.title"));
    backend.set_meta_description(ctx.t("meta.description"));

    let bindings = collect_bindings(backend);
    for binding in bindings.iter() {
        binding.apply(backend, ctx.t(&binding.key));
    }

    for button in backend.elements_with_attr(LANG_SWITCH_ATTR) {
        let active = backend.attr(&button, LANG_SWITCH_ATTR).as_deref() == Some(lang.code());
        backend.toggle_class(&button, active_class, Some(active));
    }

    log::debug!("applied {} translations in {}", bindings.len(), lang);
    bindings.len()
}

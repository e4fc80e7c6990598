use std::rc::Rc;

use varatek_i18n::{Dictionary, Lang, LangContext};

use crate::{
    applier::apply_translations,
    backend::PageBackend,
    config::SiteConfig,
    effects,
    error::Error,
    fetch::Transport,
    form::{FormController, SubmitOutcome},
    lang_switch,
};

/// The site logic of one page.
///
/// Event handlers call into a shared `Rc<Site>` ;
/// the methods here are what each kind of event does.
pub struct Site<B: PageBackend, T: Transport> {
    backend: Rc<B>,
    config: Rc<SiteConfig>,
    lang: Rc<LangContext>,
    form: Option<Rc<FormController<B, T>>>,
}

impl<B: PageBackend, T: Transport> Site<B, T> {
    /// Initialize the page with the built-in dictionary.
    pub fn start(backend: Rc<B>, transport: T, config: SiteConfig) -> Result<Self, Error> {
        let dictionary = Dictionary::builtin()?;
        Ok(Self::start_with_dictionary(backend, transport, config, dictionary))
    }

    /// Initialize the page.
    ///
    /// The stored language is applied and the footer year is written.
    pub fn start_with_dictionary(
        backend: Rc<B>,
        transport: T,
        config: SiteConfig,
        dictionary: &'static Dictionary,
    ) -> Self {
        let config = Rc::new(config);
        let lang = lang_switch::initial_language(&*backend, &config);
        let lang = Rc::new(LangContext::new(dictionary, lang));
        apply_translations(&*backend, &lang, &config.active_class);
        effects::stamp_year(&*backend, &config);
        let form = backend.first_with_class(&config.form_class).map(|form| {
            let status = backend.first_with_class(&config.form_status_class);
            Rc::new(FormController::new(
                backend.clone(),
                transport,
                lang.clone(),
                &config,
                form,
                status,
            ))
        });
        log::info!("site started in {}", lang.lang());
        Self {
            backend,
            config,
            lang,
            form,
        }
    }

    /// The backend.
    pub fn backend(&self) -> &Rc<B> {
        &self.backend
    }

    /// The configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The language context.
    pub fn lang_context(&self) -> &Rc<LangContext> {
        &self.lang
    }

    /// The active language.
    pub fn lang(&self) -> Lang {
        self.lang.lang()
    }

    /// The contact form, if the page has one.
    pub fn form(&self) -> Option<&Rc<FormController<B, T>>> {
        self.form.as_ref()
    }

    /// A language button is clicked.
    pub fn switch_language(&self, code: &str) -> Result<Lang, Error> {
        let lang = lang_switch::switch_language(&*self.backend, &self.lang, &self.config, code)?;
        if let Some(form) = &self.form {
            form.render_status();
        }
        Ok(lang)
    }

    /// The contact form is submitted.
    ///
    /// Returns `None` if the page has no contact form.
    pub async fn submit_form(&self) -> Option<SubmitOutcome> {
        let form = self.form.clone()?;
        Some(form.submit().await)
    }

    /// The mobile menu button is clicked.
    pub fn toggle_menu(&self) -> bool {
        effects::toggle_menu(&*self.backend, &self.config)
    }

    /// An in-page link is clicked.
    pub fn follow_anchor(&self, link: &B::Element) -> bool {
        effects::follow_anchor(&*self.backend, &self.config, link)
    }

    /// A reveal element enters or leaves the viewport.
    pub fn reveal(&self, elem: &B::Element, is_intersecting: bool) -> bool {
        effects::reveal(&*self.backend, &self.config, elem, is_intersecting)
    }
}

//! The contact form submission.
//!
//! A form is submitted for real only when it declares an `action` and has no `data-simulate` attribute:
//!
//! ```html
//! <form class="contact-form" action="https://example.com/contact">
//!     <input name="name">
//!     <button type="submit" data-i18n="form.submit"></button>
//!     <p class="form-status"></p>
//! </form>
//! ```
//!
//! Otherwise the submission waits for a short delay and succeeds,
//! so that the page works without any backend.

use std::{cell::Cell, rc::Rc};

use futures::future::Either;
use varatek_i18n::LangContext;

use crate::{backend::PageBackend, config::SiteConfig, error::Error, fetch::Transport};

/// The attribute that forces simulated submissions.
pub const SIMULATE_ATTR: &str = "data-simulate";

/// The submission state of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Nothing has been submitted yet.
    Idle,
    /// A submission is in flight.
    Sending,
    /// The last submission succeeded.
    Success,
    /// The last submission failed.
    Error,
}

impl FormState {
    /// The translation key of the status message.
    pub const fn message_key(self) -> Option<&'static str> {
        match self {
            FormState::Idle => None,
            FormState::Sending => Some("form.sending"),
            FormState::Success => Some("form.success"),
            FormState::Error => Some("form.error"),
        }
    }
}

/// Where a submission goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    /// POST to the `action` URL.
    Endpoint(String),
    /// Wait and pretend it succeeded.
    Simulated,
}

/// What a `submit` call ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was in flight, so nothing happened.
    Ignored,
    /// The submission succeeded and the fields are cleared.
    Succeeded,
    /// The submission failed and the fields are kept.
    Failed,
}

/// Drives one contact form through `FormState` .
///
/// At most one submission is in flight;
/// the submit controls are disabled meanwhile.
pub struct FormController<B: PageBackend, T: Transport> {
    backend: Rc<B>,
    transport: T,
    lang: Rc<LangContext>,
    form: B::Element,
    status: Option<B::Element>,
    state: Cell<FormState>,
    simulate_delay_ms: u32,
    submit_timeout_ms: u32,
}

impl<B: PageBackend, T: Transport> FormController<B, T> {
    /// Create a controller for `form` , writing messages to `status` .
    pub fn new(
        backend: Rc<B>,
        transport: T,
        lang: Rc<LangContext>,
        config: &SiteConfig,
        form: B::Element,
        status: Option<B::Element>,
    ) -> Self {
        Self {
            backend,
            transport,
            lang,
            form,
            status,
            state: Cell::new(FormState::Idle),
            simulate_delay_ms: config.simulate_delay_ms,
            submit_timeout_ms: config.submit_timeout_ms,
        }
    }

    /// The form element.
    pub fn form(&self) -> &B::Element {
        &self.form
    }

    /// The current state.
    pub fn state(&self) -> FormState {
        self.state.get()
    }

    /// Where the next submission goes, according to the form attributes.
    pub fn target(&self) -> SubmitTarget {
        let action = self.backend.attr(&self.form, "action").unwrap_or_default();
        if action.trim().is_empty() || self.backend.has_attr(&self.form, SIMULATE_ATTR) {
            SubmitTarget::Simulated
        } else {
            SubmitTarget::Endpoint(action)
        }
    }

    /// Write the message of the current state in the current language.
    ///
    /// Nothing is written while idle.
    pub fn render_status(&self) {
        let Some(key) = self.state.get().message_key() else {
            return;
        };
        if let Some(status) = &self.status {
            self.backend.set_text(status, self.lang.t(key));
        }
    }

    fn enter(&self, state: FormState) {
        log::debug!("contact form {:?} -> {:?}", self.state.get(), state);
        self.state.set(state);
        self.render_status();
        self.backend
            .set_submit_disabled(&self.form, state == FormState::Sending);
    }

    /// Submit the form and wait for the result.
    ///
    /// The status message is looked up at each transition,
    /// so it follows a language switch that happens meanwhile.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.state.get() == FormState::Sending {
            log::debug!("contact form is already sending");
            return SubmitOutcome::Ignored;
        }
        self.enter(FormState::Sending);
        let ret = match self.target() {
            SubmitTarget::Endpoint(action) => {
                let fields = self.backend.form_fields(&self.form);
                self.post(&action, fields).await
            }
            SubmitTarget::Simulated => {
                self.transport.sleep(self.simulate_delay_ms).await;
                Ok(())
            }
        };
        match ret {
            Ok(()) => {
                self.enter(FormState::Success);
                self.backend.reset_form(&self.form);
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                log::warn!("contact form submission failed: {}", err);
                self.enter(FormState::Error);
                SubmitOutcome::Failed
            }
        }
    }

    async fn post(&self, action: &str, fields: Vec<(String, String)>) -> Result<(), Error> {
        let post = self.transport.post_form(action, fields);
        let timeout = self.transport.sleep(self.submit_timeout_ms);
        futures::pin_mut!(post, timeout);
        match futures::future::select(post, timeout).await {
            Either::Left((ret, _)) => {
                let status = ret?;
                if (200..300).contains(&status) {
                    Ok(())
                } else {
                    Err(Error::HttpStatus(status))
                }
            }
            Either::Right(_) => Err(Error::Timeout(self.submit_timeout_ms)),
        }
    }
}

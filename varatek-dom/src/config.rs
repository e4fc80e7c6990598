//! The site configuration.
//!
//! The configuration is a TOML document, and every field is optional:
//!
//! ```toml
//! storage-key = "lang"
//! simulate-delay-ms = 700
//! submit-timeout-ms = 15000
//! reveal-threshold = 0.15
//! ```

use crate::error::Error;

/// Class names, ids and timings the site logic depends on.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SiteConfig {
    /// The storage key of the language preference.
    pub storage_key: String,
    /// The class of the mobile menu button.
    pub menu_toggle_class: String,
    /// The class of the navigation link container.
    pub nav_links_class: String,
    /// The class added to the navigation when the mobile menu is open.
    pub menu_open_class: String,
    /// The class of elements revealed on scroll.
    pub reveal_class: String,
    /// The class added to revealed elements.
    pub visible_class: String,
    /// The visible ratio that triggers revealing.
    pub reveal_threshold: f64,
    /// The class of the contact form.
    pub form_class: String,
    /// The class of the contact form status line.
    pub form_status_class: String,
    /// The class of the active language button.
    pub active_class: String,
    /// The id of the footer year.
    pub year_id: String,
    /// How long a simulated submission takes.
    pub simulate_delay_ms: u32,
    /// How long to wait for the form endpoint.
    pub submit_timeout_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: "lang".into(),
            menu_toggle_class: "menu-toggle".into(),
            nav_links_class: "nav-links".into(),
            menu_open_class: "is-open".into(),
            reveal_class: "reveal".into(),
            visible_class: "is-visible".into(),
            reveal_threshold: 0.15,
            form_class: "contact-form".into(),
            form_status_class: "form-status".into(),
            active_class: "is-active".into(),
            year_id: "year".into(),
            simulate_delay_ms: 700,
            submit_timeout_ms: 15000,
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document.
    pub fn from_toml(src: &str) -> Result<Self, Error> {
        let ret: Self = toml::from_str(src).map_err(|x| Error::Config(x.to_string()))?;
        if !(0. ..=1.).contains(&ret.reveal_threshold) {
            return Err(Error::Config(format!(
                "reveal-threshold {} is out of 0..=1",
                ret.reveal_threshold
            )));
        }
        if ret.storage_key.is_empty() {
            return Err(Error::Config("storage-key is empty".into()));
        }
        Ok(ret)
    }
}

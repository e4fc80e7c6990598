use std::rc::Rc;

use wasm_bindgen::prelude::*;

use varatek_dom::{event::bind_events, prelude::*, Error};

const SITE_CONFIG: &str = include_str!("../site.toml");

fn start() -> Result<(), Error> {
    let config = SiteConfig::from_toml(SITE_CONFIG)?;
    let dictionary = Dictionary::builtin()?;
    if cfg!(debug_assertions) {
        for lang in Lang::ALL {
            for key in dictionary.missing_keys(Lang::DEFAULT, lang) {
                log::warn!("{} has no translation for {:?}", lang, key);
            }
        }
    }
    let backend = Rc::new(DomBackend::new()?);
    let transport = FetchTransport::new()?;
    let site = Site::start_with_dictionary(backend, transport, config, dictionary);
    bind_events(Rc::new(site));
    Ok(())
}

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // fails only if a logger is already installed
    let _ = console_log::init_with_level(level);
    if let Err(err) = start() {
        log::error!("cannot start the site: {}", err);
    }
}

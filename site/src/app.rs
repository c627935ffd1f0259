//! Module entry point: logging, config, mount and teardown.
//!
//! DESIGN
//! ======
//! `start` runs once when the wasm module is instantiated. A missing required
//! element aborts the whole mount, which leaves the page static but usable;
//! the reason is logged to the console.

use std::cell::RefCell;
use std::rc::Rc;

use page::config::SiteConfig;
use page::consts::BANNER;
use page::menu::MobileMenu;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::behaviors;
use crate::dom::{self, Elements};
use crate::error::Result;
use crate::listeners::Listeners;
use crate::selectors::CONFIG_SCRIPT_ID;

thread_local! {
    static MOUNTED: RefCell<Option<Listeners>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = load_config();
    let level = config.as_ref().map_or("info", |c| c.log_level.as_str());
    init_logging(level);
    let config = config.unwrap_or_else(|err| {
        log::error!("ignoring site config: {err}");
        SiteConfig::default()
    });

    log::info!("{BANNER}");

    match mount(config) {
        Ok(listeners) => {
            log::debug!("page behaviors mounted ({} listeners)", listeners.len());
            MOUNTED.with(|mounted| *mounted.borrow_mut() = Some(listeners));
        }
        Err(err) => log::error!("page behaviors disabled: {err}"),
    }
}

/// Detach every listener and observer installed by [`start`].
#[wasm_bindgen]
pub fn teardown() {
    let listeners = MOUNTED.with(|mounted| mounted.borrow_mut().take());
    if let Some(mut listeners) = listeners {
        listeners.teardown();
        log::info!("page behaviors detached");
    }
}

fn init_logging(level: &str) {
    let level = level.parse::<log::Level>().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
}

fn load_config() -> Result<SiteConfig> {
    let document = dom::document(&dom::window()?)?;
    let Some(script) = document.get_element_by_id(CONFIG_SCRIPT_ID) else {
        return Ok(SiteConfig::default());
    };
    let raw = script.text_content().unwrap_or_default();
    Ok(SiteConfig::from_json(&raw)?)
}

fn mount(config: SiteConfig) -> Result<Listeners> {
    let elements = Rc::new(Elements::resolve(dom::window()?)?);
    let mut listeners = Listeners::default();
    if let Err(err) = install_all(&elements, Rc::new(config), &mut listeners) {
        listeners.teardown();
        return Err(err);
    }
    Ok(listeners)
}

fn install_all(elements: &Rc<Elements>, config: Rc<SiteConfig>, listeners: &mut Listeners) -> Result<()> {
    let menu = Rc::new(RefCell::new(MobileMenu::new()));

    behaviors::theme::install(elements, &config, listeners)?;
    behaviors::menu::install(elements, &menu, listeners)?;
    behaviors::scroll::install(elements, &config, listeners)?;
    let reveal = behaviors::reveal::install(elements, &config, listeners)?;
    behaviors::counter::install(elements, &config, listeners)?;
    behaviors::hover::install(elements, &config, listeners)?;
    behaviors::lifecycle::install(elements, &config, &menu, &reveal, listeners)
}

//! Client-side behavior for the portfolio page, compiled to WebAssembly.
//!
//! Five independent units are mounted when the module loads. Each one is a
//! plain state machine that can be driven and tested natively; the
//! `hydrate` feature adds the web-sys layer that binds it to the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`typewriter`] | Character-by-character heading reveal |
//! | [`theme`] | Persisted light/dark mode |
//! | [`color_game`] | Accent picker with themed background |
//! | [`confetti`] | Particle burst fired by the color game |
//! | [`anchor`] | Smooth scrolling for in-page links |
//! | [`reveal`] | Fade/slide-in on first scroll into view |
//! | [`color`] | Hex parsing and lightness heuristic |
//! | [`config`] | DOM hooks and typewriter text |
//! | [`consts`] | Timings, palette, default colors |
//! | [`error`] | Mount and config errors |

pub mod anchor;
pub mod color;
pub mod color_game;
pub mod confetti;
pub mod config;
pub mod consts;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod reveal;
pub mod theme;
pub mod typewriter;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Page config from the embedded JSON block, or defaults when there is none.
#[cfg(feature = "hydrate")]
fn load_config(document: &web_sys::Document) -> Result<config::PageConfig, error::PageError> {
    let Some(block) = document.get_element_by_id(config::CONFIG_ELEMENT_ID) else {
        return Ok(config::PageConfig::default());
    };
    let raw = block.text_content().unwrap_or_default();
    Ok(config::PageConfig::from_json(&raw)?)
}

/// Entry point: mount every unit. A unit that cannot mount is skipped.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"portfolio: logger already installed".into());
    }

    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            log::warn!("nothing mounted: {e}");
            return;
        }
    };
    let config = load_config(&document).unwrap_or_else(|e| {
        log::warn!("{e}; using defaults");
        config::PageConfig::default()
    });
    let hooks = &config.hooks;

    if let Err(e) = typewriter::mount(&document, &hooks.typewriter_id, &config.typewriter_text) {
        log::warn!("typewriter disabled: {e}");
    }

    let shared_theme = theme::mount(&document, hooks);

    if let Err(e) = color_game::mount(&document, hooks, shared_theme) {
        log::warn!("color game disabled: {e}");
    }

    match anchor::mount(&document, &hooks.anchor_selector) {
        Ok(n) => log::debug!("{n} anchor links intercepted"),
        Err(e) => log::warn!("anchor scrolling disabled: {e}"),
    }

    match reveal::mount(&document, &hooks.reveal_query()) {
        Ok(n) => log::debug!("{n} elements tracked for reveal"),
        Err(e) => log::warn!("scroll reveal disabled: {e}"),
    }
}

//! Page configuration: typewriter text and the DOM hooks each unit binds to.
//!
//! Defaults match the shipped portfolio markup. A page may override any
//! subset by embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="portfolio-config">
//!   { "typewriter_text": "Ada Lovelace" }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{REVEAL_SELECTORS, TYPEWRITER_TEXT};
use crate::error::ConfigError;

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Element ids and selectors used to find the page controls.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DomHooks {
    pub typewriter_id: String,
    pub theme_toggle_id: String,
    pub color_input_id: String,
    pub play_button_id: String,
    pub picker_container_selector: String,
    pub confirmation_selector: String,
    pub reset_button_selector: String,
    pub anchor_selector: String,
    pub reveal_selectors: Vec<String>,
}

impl Default for DomHooks {
    fn default() -> Self {
        Self {
            typewriter_id: "typewriter".to_owned(),
            theme_toggle_id: "theme-toggle".to_owned(),
            color_input_id: "color-picker".to_owned(),
            play_button_id: "play-game".to_owned(),
            picker_container_selector: ".color-div".to_owned(),
            confirmation_selector: ".color-message".to_owned(),
            reset_button_selector: ".reset-button".to_owned(),
            anchor_selector: "a[href^=\"#\"]".to_owned(),
            reveal_selectors: REVEAL_SELECTORS.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl DomHooks {
    /// Reveal selectors joined into one selector list for `querySelectorAll`.
    #[must_use]
    pub fn reveal_query(&self) -> String {
        self.reveal_selectors.join(", ")
    }
}

/// Full page configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub typewriter_text: String,
    pub hooks: DomHooks,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self { typewriter_text: TYPEWRITER_TEXT.to_owned(), hooks: DomHooks::default() }
    }
}

impl PageConfig {
    /// Parse an embedded config block. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields,
    /// and [`ConfigError::EmptyText`] when the typewriter text is blank.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.typewriter_text.trim().is_empty() {
            return Err(ConfigError::EmptyText);
        }
        Ok(config)
    }
}

//! Kiosk display settings.
//!
//! Read once at startup from the `data-config` attribute of the mount anchor;
//! anything missing falls back to the defaults below.

use serde::Deserialize;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use crate::error::KioskError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Id of the element the view tree is mounted into.
pub const MOUNT_ANCHOR_ID: &str = "app";
/// Attribute on the anchor holding the JSON config.
pub const CONFIG_ATTRIBUTE: &str = "data-config";

const MAX_TICK_INTERVAL_MS: u32 = 1000;
/// Locale value meaning "whatever the browser uses".
const BROWSER_LOCALE: &str = "default";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    // Throws RangeError for tags the browser's Intl cannot use.
    #[wasm_bindgen(catch, js_namespace = Intl, js_name = getCanonicalLocales)]
    fn canonical_locales(locale: &str) -> Result<JsValue, JsValue>;
}

/// Structural BCP 47 check: alphanumeric subtags of 1..=8 chars joined by
/// `-`, led by a 2..=3 or 5..=8 letter language subtag.
fn is_locale_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let Some(language) = subtags.next() else {
        return false;
    };
    let language_ok = matches!(language.len(), 2..=3 | 5..=8)
        && language.chars().all(|c| c.is_ascii_alphabetic());
    language_ok
        && subtags.all(|s| (1..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric()))
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KioskConfig {
    /// Header text.
    pub title: String,
    /// Label of the touch-test control.
    pub button_label: String,
    /// BCP 47 tag for clock/date formatting; "default" uses the browser's.
    pub locale: String,
    /// Clock refresh period. Must stay at or below one second.
    pub tick_interval_ms: u32,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            title: "Raspberry Pi Kiosk".to_string(),
            button_label: "Touch Test".to_string(),
            locale: "default".to_string(),
            tick_interval_ms: MAX_TICK_INTERVAL_MS,
        }
    }
}

impl KioskConfig {
    pub fn from_json(raw: &str) -> Result<Self, KioskError> {
        let config: KioskConfig = serde_json::from_str(raw)?;
        config.validate()?;
        #[cfg(target_arch = "wasm32")]
        config.check_locale_with_browser()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), KioskError> {
        if self.tick_interval_ms == 0 || self.tick_interval_ms > MAX_TICK_INTERVAL_MS {
            return Err(KioskError::InvalidTickInterval {
                ms: self.tick_interval_ms,
            });
        }
        if self.locale != BROWSER_LOCALE && !is_locale_tag(&self.locale) {
            return Err(KioskError::InvalidLocale {
                locale: self.locale.clone(),
            });
        }
        Ok(())
    }

    /// Asks `Intl` whether the locale is usable; a well-formed tag can still
    /// be refused, and formatting with it would throw during render.
    #[cfg(target_arch = "wasm32")]
    fn check_locale_with_browser(&self) -> Result<(), KioskError> {
        if self.locale == BROWSER_LOCALE {
            return Ok(());
        }
        canonical_locales(&self.locale)
            .map(|_| ())
            .map_err(|_| KioskError::InvalidLocale {
                locale: self.locale.clone(),
            })
    }

    /// Parses the anchor attribute if present, keeping defaults on any error.
    pub fn from_attribute(raw: Option<String>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring {CONFIG_ATTRIBUTE}: {err}");
                Self::default()
            }
        }
    }
}

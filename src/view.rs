//! Pure derivation of what the kiosk shows from its state.
//!
//! Components only copy strings out of [`Screen`], so every visible piece of
//! text can be checked without a browser.

use wasm_bindgen::JsValue;

use crate::config::KioskConfig;
use crate::model::{KioskState, Timestamp};

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

pub const DIALOG_TITLE: &str = "Touch Registered";
pub const DIALOG_ACK_LABEL: &str = "OK";
/// How long a dismissed dialog stays mounted while it fades out.
pub const DIALOG_LEAVE_MS: u32 = 200;

/// Renders timestamps as clock and calendar text.
pub trait TimeFormat {
    fn time(&self, ts: Timestamp) -> String;
    fn date(&self, ts: Timestamp) -> String;
}

/// Browser locale formatting (`toLocaleTimeString` / `toLocaleDateString`).
#[derive(Clone, Debug, PartialEq)]
pub struct LocaleFormat {
    locale: String,
}

impl LocaleFormat {
    pub fn new(locale: impl Into<String>) -> Self {
        Self { locale: locale.into() }
    }

    fn js_date(ts: Timestamp) -> js_sys::Date {
        js_sys::Date::new(&JsValue::from_f64(ts.millis()))
    }
}

impl TimeFormat for LocaleFormat {
    fn time(&self, ts: Timestamp) -> String {
        Self::js_date(ts).to_locale_time_string(&self.locale).into()
    }

    fn date(&self, ts: Timestamp) -> String {
        Self::js_date(ts)
            .to_locale_date_string(&self.locale, &JsValue::UNDEFINED)
            .into()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DialogView {
    pub title: String,
    pub message: String,
    /// "at <time>" when a touch time is known.
    pub caption: Option<String>,
    pub ack_label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogStage {
    Open,
    Leaving,
}

/// Picks the dialog to draw: the live one, or the last one shown while it
/// plays its leave effect.
pub fn dialog_stage<'a>(
    current: Option<&'a DialogView>,
    retained: Option<&'a DialogView>,
) -> Option<(&'a DialogView, DialogStage)> {
    match (current, retained) {
        (Some(dialog), _) => Some((dialog, DialogStage::Open)),
        (None, Some(dialog)) => Some((dialog, DialogStage::Leaving)),
        (None, None) => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Screen {
    pub title: String,
    pub button_label: String,
    pub clock: String,
    pub touch_count: u64,
    pub last_touch: Option<String>,
    pub date: String,
    pub dialog: Option<DialogView>,
}

pub fn screen(state: &KioskState, config: &KioskConfig, fmt: &impl TimeFormat) -> Screen {
    let last_touch_time = state.last_touch.map(|ts| fmt.time(ts));
    let dialog = state.show_dialog().then(|| DialogView {
        title: DIALOG_TITLE.to_string(),
        message: format!("Touch {} detected", state.touch_count),
        caption: last_touch_time.as_ref().map(|t| format!("at {t}")),
        ack_label: DIALOG_ACK_LABEL.to_string(),
    });
    Screen {
        title: config.title.clone(),
        button_label: config.button_label.clone(),
        clock: fmt.time(state.current_time),
        touch_count: state.touch_count,
        last_touch: last_touch_time.map(|t| format!("Last Touch: {t}")),
        date: fmt.date(state.current_time),
        dialog,
    }
}

use yew::Renderer;

mod components;
mod config;
mod error;
mod model;
mod util;
mod view;

use components::{KioskView, KioskViewProps};
use config::{CONFIG_ATTRIBUTE, KioskConfig, MOUNT_ANCHOR_ID};
use error::KioskError;

/// Finds the anchor and hands it the view tree. Runs once per page load.
fn mount() -> Result<(), KioskError> {
    let window = web_sys::window().ok_or(KioskError::NoWindow)?;
    let document = window.document().ok_or(KioskError::NoDocument)?;
    let anchor = document
        .get_element_by_id(MOUNT_ANCHOR_ID)
        .ok_or_else(|| KioskError::MissingAnchor {
            id: MOUNT_ANCHOR_ID.to_string(),
        })?;
    let config = KioskConfig::from_attribute(anchor.get_attribute(CONFIG_ATTRIBUTE));
    log::info!("mounting kiosk view into #{MOUNT_ANCHOR_ID}");
    Renderer::<KioskView>::with_root_and_props(anchor, KioskViewProps { config }).render();
    Ok(())
}

fn main() {
    console_error_panic_hook::set_once();
    util::init_logging();
    if let Err(err) = mount() {
        log::error!("startup aborted: {err}");
        wasm_bindgen::throw_str(&err.to_string());
    }
}

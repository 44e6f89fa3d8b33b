pub mod clock_display;
pub mod confirm_dialog;
pub mod kiosk_view;
pub mod touch_panel;

pub use clock_display::ClockDisplay;
pub use confirm_dialog::ConfirmDialog;
pub use kiosk_view::{KioskView, KioskViewProps};
pub use touch_panel::TouchPanel;

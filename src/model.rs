//! Kiosk view state and its transitions.
//! Wall-clock readings travel inside the actions so `reduce` stays pure.

use std::rc::Rc;
use yew::Reducible;

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

/// Milliseconds since the Unix epoch, as reported by the browser clock.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Timestamp(pub f64);

impl Timestamp {
    pub fn now() -> Self {
        Timestamp(js_sys::Date::now())
    }

    pub fn millis(self) -> f64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Dialog hidden.
    #[default]
    Idle,
    /// Dialog visible, waiting for acknowledgement.
    ConfirmingTouch,
}

#[derive(Clone, Debug, PartialEq)]
pub struct KioskState {
    /// Touches registered since the view was created.
    pub touch_count: u64,
    /// Time of the most recent touch; `None` until the first one.
    pub last_touch: Option<Timestamp>,
    /// Drives the clock and the footer date.
    pub current_time: Timestamp,
    pub phase: Phase,
}

impl KioskState {
    pub fn new(now: Timestamp) -> Self {
        Self {
            touch_count: 0,
            last_touch: None,
            current_time: now,
            phase: Phase::Idle,
        }
    }

    pub fn show_dialog(&self) -> bool {
        self.phase == Phase::ConfirmingTouch
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KioskAction {
    /// Periodic clock refresh.
    Tick { now: Timestamp },
    /// The touch-test control was activated.
    Touch { at: Timestamp },
    /// The dialog was acknowledged or closed.
    Dismiss,
}

impl Reducible for KioskState {
    type Action = KioskAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use KioskAction::*;
        if action == Dismiss && self.phase == Phase::Idle {
            return self;
        }
        let mut new = (*self).clone();
        match action {
            Tick { now } => { new.current_time = now; }
            Touch { at } => {
                new.touch_count = new.touch_count.saturating_add(1);
                new.last_touch = Some(at);
                new.phase = Phase::ConfirmingTouch;
            }
            Dismiss => { new.phase = Phase::Idle; }
        }
        Rc::new(new)
    }
}

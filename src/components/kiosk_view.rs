use gloo_timers::callback::Interval;
use yew::prelude::*;

use super::{ClockDisplay, ConfirmDialog, TouchPanel};
use crate::config::KioskConfig;
use crate::model::{KioskAction, KioskState, Timestamp};
use crate::view::{self, LocaleFormat};

#[derive(Properties, PartialEq, Clone)]
pub struct KioskViewProps {
    pub config: KioskConfig,
}

#[function_component(KioskView)]
pub fn kiosk_view(props: &KioskViewProps) -> Html {
    let state = use_reducer(|| KioskState::new(Timestamp::now()));

    // Clock tick. Dropping the Interval in teardown cancels it, so no tick
    // outlives this view.
    {
        let state = state.clone();
        use_effect_with(props.config.tick_interval_ms, move |&ms| {
            log::debug!("clock timer started ({ms}ms)");
            let ticker = Interval::new(ms, move || {
                state.dispatch(KioskAction::Tick { now: Timestamp::now() });
            });
            move || {
                drop(ticker);
                log::debug!("clock timer stopped");
            }
        });
    }

    let on_touch = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            state.dispatch(KioskAction::Touch { at: Timestamp::now() });
            log::debug!("touch registered");
        })
    };
    let on_close = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            state.dispatch(KioskAction::Dismiss);
            log::debug!("dialog dismissed");
        })
    };

    let fmt = LocaleFormat::new(props.config.locale.clone());
    let screen = view::screen(&state, &props.config, &fmt);

    html! {
        <div class="kiosk-root" style="min-height:100vh; display:flex; flex-direction:column; color:#fff;">
            <header style="padding:24px; text-align:center; background:rgba(0,0,0,0.2); backdrop-filter:blur(4px);">
                <h1 style="margin:0 0 8px 0; font-size:30px; font-weight:700;">{ screen.title }</h1>
            </header>
            <main style="flex:1; display:flex; flex-direction:column; align-items:center; justify-content:center; padding:24px; gap:32px;">
                <ClockDisplay clock={screen.clock} />
                <TouchPanel
                    label={screen.button_label}
                    touch_count={screen.touch_count}
                    last_touch={screen.last_touch}
                    on_touch={on_touch}
                />
            </main>
            <footer style="padding:16px; text-align:center; background:rgba(0,0,0,0.2); backdrop-filter:blur(4px);">
                <div style="font-size:14px; opacity:0.8;">{ screen.date }</div>
            </footer>
            <ConfirmDialog dialog={screen.dialog} on_close={on_close} />
        </div>
    }
}

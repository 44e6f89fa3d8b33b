use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::view::{DIALOG_LEAVE_MS, DialogStage, DialogView, dialog_stage};

#[derive(Properties, PartialEq, Clone)]
pub struct ConfirmDialogProps {
    /// `None` hides the dialog.
    pub dialog: Option<DialogView>,
    /// Fired by the OK button, a click outside the panel, or Escape.
    pub on_close: Callback<()>,
}

#[function_component]
pub fn ConfirmDialog(props: &ConfirmDialogProps) -> Html {
    let show = props.dialog.is_some();
    // Last dialog shown, kept through the leave effect.
    let retained = use_state(|| None::<DialogView>);

    {
        let retained = retained.clone();
        use_effect_with(props.dialog.clone(), move |dialog| {
            let mut leave_timer = None;
            match dialog {
                Some(dialog) => retained.set(Some(dialog.clone())),
                None if retained.is_some() => {
                    leave_timer = Some(Timeout::new(DIALOG_LEAVE_MS, move || retained.set(None)));
                }
                None => {}
            }
            move || drop(leave_timer)
        });
    }

    // Escape closes; the listener only exists while the dialog is up.
    {
        let on_close = props.on_close.clone();
        use_effect_with(show, move |&show| {
            let mut registered: Option<(web_sys::Window, Closure<dyn FnMut(KeyboardEvent)>)> = None;
            if show {
                if let Some(window) = web_sys::window() {
                    let keydown_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            on_close.emit(());
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>);
                    match window.add_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    ) {
                        Ok(()) => registered = Some((window, keydown_cb)),
                        Err(err) => log::warn!("escape listener not attached: {err:?}"),
                    }
                }
            }
            move || {
                if let Some((window, keydown_cb)) = registered {
                    if let Err(err) = window.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("escape listener not removed: {err:?}");
                    }
                }
            }
        });
    }

    let Some((dialog, stage)) = dialog_stage(props.dialog.as_ref(), (*retained).as_ref()) else {
        return html! {};
    };
    let dialog = dialog.clone();
    let (leave_class, pointer_events) = match stage {
        DialogStage::Open => (None, "auto"),
        DialogStage::Leaving => (Some("kiosk-leaving"), "none"),
    };

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    // Clicks inside the panel must not reach the overlay.
    let swallow_cb = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {<div style={format!("position:relative; z-index:50; pointer-events:{pointer_events};")} role="dialog" aria-modal="true">
        <div class={classes!("kiosk-backdrop", leave_class)} style="position:fixed; inset:0; background:rgba(0,0,0,0.5); backdrop-filter:blur(4px);"></div>
        <div onclick={close_cb.clone()} style={format!("position:fixed; inset:0; display:flex; align-items:center; justify-content:center; padding:16px; pointer-events:{pointer_events};")}>
            <div class={classes!("kiosk-dialog-panel", leave_class)} onclick={swallow_cb} style="background:#fff; color:#111827; padding:32px; border-radius:16px; max-width:28rem; width:100%; display:flex; flex-direction:column; gap:16px;">
                <h2 style="margin:0; font-size:24px; font-weight:700; text-align:center;">{ dialog.title }</h2>
                <div style="text-align:center; display:flex; flex-direction:column; gap:8px;">
                    <p style="margin:0; font-size:18px;">{ dialog.message }</p>
                    {
                        match dialog.caption {
                            Some(caption) => html! { <p style="margin:0; font-size:14px; color:#4b5563;">{ caption }</p> },
                            None => html! {},
                        }
                    }
                </div>
                <div style="display:flex; justify-content:center;">
                    <button class="kiosk-ack-button" onclick={close_cb}>{ dialog.ack_label }</button>
                </div>
            </div>
        </div>
    </div>}
}

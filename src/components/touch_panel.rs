use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TouchPanelProps {
    pub label: String,
    pub touch_count: u64,
    /// Pre-formatted "Last Touch: ..." line, absent before the first touch.
    pub last_touch: Option<String>,
    pub on_touch: Callback<()>,
}

#[function_component(TouchPanel)]
pub fn touch_panel(props: &TouchPanelProps) -> Html {
    let touch_cb = {
        let cb = props.on_touch.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {<div style="text-align:center; display:flex; flex-direction:column; align-items:center; gap:16px;">
        <button class="kiosk-touch-button" onclick={touch_cb}>{ props.label.clone() }</button>
        <div style="display:flex; flex-direction:column; gap:8px;">
            <div style="font-size:18px; font-weight:600;">
                {"Touches: "}<span style="color:#facc15;">{ props.touch_count.to_string() }</span>
            </div>
            {
                if let Some(caption) = &props.last_touch {
                    html! { <div style="font-size:14px; opacity:0.8;">{ caption.clone() }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    </div>}
}

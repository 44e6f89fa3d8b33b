use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ClockDisplayProps {
    pub clock: String,
}

#[function_component(ClockDisplay)]
pub fn clock_display(props: &ClockDisplayProps) -> Html {
    html! {<div style="text-align:center;">
        <div class="kiosk-clock" style="font-size:36px; font-family:monospace; font-weight:700; margin-bottom:8px;">{ props.clock.clone() }</div>
    </div>}
}

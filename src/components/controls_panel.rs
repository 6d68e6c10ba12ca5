use yew::prelude::*;

#[function_component]
pub fn ControlsPanel() -> Html {
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:170px; display:flex; flex-direction:column; gap:4px; font-size:12px;">
        <div style="font-weight:600;">{"Controls"}</div>
        <div>{"W A S D: move"}</div>
        <div>{"Click a slot: roll new gear"}</div>
        <div style="font-size:11px; opacity:0.7;">{"Legendary pieces pulse."}</div>
    </div>}
}

use yew::prelude::*;

use crate::model::Slot;
use crate::state::SlotIndicator;

#[derive(Properties, PartialEq, Clone)]
pub struct GearSlotProps {
    pub slot: Slot,
    pub indicator: SlotIndicator,
    pub on_select: Callback<Slot>,
}

#[function_component(GearSlot)]
pub fn gear_slot(props: &GearSlotProps) -> Html {
    let onclick = {
        let cb = props.on_select.clone();
        let slot = props.slot;
        Callback::from(move |_: MouseEvent| cb.emit(slot))
    };
    let ind = &props.indicator;
    let rarity_label = ind.rarity.map(|r| r.label()).unwrap_or("Empty");
    html! {
        <div class="gear-slot" data-slot={props.slot.id()} {onclick}
            style={format!("width:84px; height:64px; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:4px; background:#161b22; border:2px solid {}; border-radius:8px; box-shadow:{}; cursor:pointer; user-select:none;", ind.border_color, ind.glow)}>
            <span style="font-weight:600;">{ props.slot.label() }</span>
            <span style={format!("font-size:11px; color:{};", ind.border_color)}>{ rarity_label }</span>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct GearPanelProps {
    /// One indicator per slot, in `Slot::ALL` order.
    pub indicators: Vec<SlotIndicator>,
    pub on_select: Callback<Slot>,
}

#[function_component]
pub fn GearPanel(props: &GearPanelProps) -> Html {
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px;">
        <div style="font-weight:600; margin-bottom:6px;">{"Gear"}</div>
        <div style="display:grid; grid-template-columns:repeat(2, 84px); gap:8px;">
            { for Slot::ALL.iter().zip(props.indicators.iter()).map(|(slot, ind)| html! {
                <GearSlot slot={*slot} indicator={ind.clone()} on_select={props.on_select.clone()} />
            }) }
        </div>
    </div>}
}

use super::legend::LegendRow;
use crate::model::Rarity;
use yew::prelude::*;

#[function_component]
pub fn LegendPanel() -> Html {
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:170px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Rarity"}</div>
        { for Rarity::ALL.iter().map(|r| html!{ <LegendRow rarity={*r} /> }) }
    </div>}
}

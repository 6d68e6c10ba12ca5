use yew::prelude::*;

use crate::config;
use crate::model::Rarity;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendRowProps {
    pub rarity: Rarity,
}

/// Swatch in the rarity color, haloed the way equipped gear of that rarity is.
#[function_component(LegendRow)]
pub fn legend_row(props: &LegendRowProps) -> Html {
    let rarity = props.rarity;
    let swatch = format!(
        "width:14px; height:14px; border-radius:3px; background:{}; box-shadow:{};",
        rarity.color(),
        rarity.box_shadow(config::SWATCH_GLOW_PX)
    );
    html! {
        <div class="legend-row" data-rarity={rarity.id()} style="display:flex; align-items:center; gap:10px; padding:2px 0;">
            <span style={swatch}></span>
            <span style={format!("color:{};", rarity.color())}>{ rarity.label() }</span>
        </div>
    }
}

use super::game_view::GameView;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div id="root" style="min-height:100vh; background:#0e1116; color:#c9d1d9; font-family:sans-serif;">
            <GameView />
        </div>
    }
}

use gear_glow::App;
use gear_glow::util::init_logging;

fn main() {
    init_logging(log::Level::Info);
    log::info!("gear glow starting");
    yew::Renderer::<App>::new().render();
}

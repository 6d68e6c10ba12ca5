pub mod app;
pub mod controls_panel;
pub mod game_view;
pub mod gear_panel;
pub mod legend;
pub mod legend_panel;

pub use app::App;

//! Gear Glow: a square player on a checkerboard canvas that equips random
//! gear in four slots, with legendary pieces pulsing a glow.

pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod state;
pub mod util;

pub use components::App;
pub use error::GearError;

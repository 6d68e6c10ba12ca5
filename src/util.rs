// Browser helpers: console logging and the rarity dice.

use log::Level;

use crate::model::Rarity;

/// Route `log` records to the browser console. Safe to call more than once.
pub fn init_logging(level: Level) {
    if let Err(e) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {}", e);
    }
}

/// Uniform rarity from `Math.random()`.
pub fn roll_rarity() -> Rarity {
    Rarity::from_roll(js_sys::Math::random())
}

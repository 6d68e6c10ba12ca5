use std::str::FromStr;

use crate::error::GearError;

/// Movement keys, matched on `KeyboardEvent.key`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
}

impl FromStr for Key {
    type Err = GearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "w" => Ok(Key::W),
            "a" => Ok(Key::A),
            "s" => Ok(Key::S),
            "d" => Ok(Key::D),
            other => Err(GearError::UnknownKey(other.to_string())),
        }
    }
}

/// Currently held movement keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
}

impl InputState {
    pub fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::W => self.up = held,
            Key::A => self.left = held,
            Key::S => self.down = held,
            Key::D => self.right = held,
        }
    }

    /// Apply a raw key string from a keydown/keyup event.
    pub fn apply_raw(&mut self, raw: &str, held: bool) -> Result<Key, GearError> {
        let key = raw.parse()?;
        self.set(key, held);
        Ok(key)
    }
}

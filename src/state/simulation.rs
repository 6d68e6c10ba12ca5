use crate::config::{self, GameConfig};
use crate::model::{GearPiece, PlayerState, Rarity, Slot};
use crate::render::{self, DrawSurface};
use crate::state::InputState;

/// Visual state pushed to a slot widget after an equip.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotIndicator {
    pub border_color: &'static str,
    /// CSS box-shadow value.
    pub glow: String,
    pub rarity: Option<Rarity>,
}

impl Default for SlotIndicator {
    fn default() -> Self {
        Self {
            border_color: config::EMPTY_SLOT_BORDER,
            glow: "none".to_string(),
            rarity: None,
        }
    }
}

impl SlotIndicator {
    pub fn for_piece(piece: &GearPiece) -> Self {
        Self {
            border_color: piece.color(),
            glow: piece.widget_glow_style(),
            rarity: Some(piece.rarity()),
        }
    }
}

/// Everything one running demo owns; passed by reference to the frame driver
/// and UI callbacks.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub config: GameConfig,
    pub player: PlayerState,
    pub input: InputState,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Simulation {
    pub fn new(config: GameConfig) -> Self {
        Self {
            player: PlayerState::new(&config),
            input: InputState::default(),
            config,
        }
    }

    /// One display tick: draw the current state, then advance it.
    pub fn frame<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        render::render_scene(surface, &self.player, &self.config);
        self.update();
    }

    /// Movement from held input, then glow animation.
    pub fn update(&mut self) {
        self.player.advance(&self.input, &self.config);
        self.player.gear.advance_glow();
    }

    /// Replace whatever is in `slot` with a fresh piece of `rarity`.
    pub fn equip(&mut self, slot: Slot, rarity: Rarity) -> SlotIndicator {
        let piece = GearPiece::new(slot, rarity);
        let indicator = SlotIndicator::for_piece(&piece);
        match self.player.gear.equip(piece) {
            Some(old) => log::debug!("{}: {} replaced by {}", slot, old.rarity(), rarity),
            None => log::debug!(
                "{}: equipped {} ({}/{} slots filled)",
                slot,
                rarity,
                self.player.gear.equipped_count(),
                Slot::ALL.len()
            ),
        }
        if log::log_enabled!(log::Level::Trace) {
            if let Ok(json) = serde_json::to_string(&self.player.gear) {
                log::trace!("loadout {}", json);
            }
        }
        indicator
    }

    /// Indicator for the slot's current contents.
    pub fn indicator(&self, slot: Slot) -> SlotIndicator {
        self.player.gear.get(slot).map(SlotIndicator::for_piece).unwrap_or_default()
    }

    /// Indicators for every slot, in `Slot::ALL` order.
    pub fn indicators(&self) -> [SlotIndicator; 4] {
        Slot::ALL.map(|slot| self.indicator(slot))
    }

    pub fn key_down(&mut self, raw: &str) {
        if let Err(e) = self.input.apply_raw(raw, true) {
            log::trace!("ignored: {}", e);
        }
    }

    pub fn key_up(&mut self, raw: &str) {
        if let Err(e) = self.input.apply_raw(raw, false) {
            log::trace!("ignored: {}", e);
        }
    }
}

//! Core data models: slots, rarities, gear pieces and the player.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{self, GameConfig};
use crate::error::GearError;
use crate::state::InputState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Helmet,
    Shoulder,
    Leg,
    Boot,
}

impl Slot {
    /// All slots, in loadout and drawing order.
    pub const ALL: [Slot; 4] = [Slot::Helmet, Slot::Shoulder, Slot::Leg, Slot::Boot];

    pub fn id(self) -> &'static str {
        match self {
            Slot::Helmet => "helmet",
            Slot::Shoulder => "shoulder",
            Slot::Leg => "leg",
            Slot::Boot => "boot",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slot::Helmet => "Helmet",
            Slot::Shoulder => "Shoulder",
            Slot::Leg => "Leg",
            Slot::Boot => "Boot",
        }
    }

    /// Quadrant of the player sprite as (column, row), each 0 or 1.
    pub fn quadrant(self) -> (u32, u32) {
        match self {
            Slot::Helmet => (0, 0),
            Slot::Shoulder => (1, 0),
            Slot::Leg => (0, 1),
            Slot::Boot => (1, 1),
        }
    }

    /// Position in `Slot::ALL`.
    pub fn index(self) -> usize {
        match self {
            Slot::Helmet => 0,
            Slot::Shoulder => 1,
            Slot::Leg => 2,
            Slot::Boot => 3,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Slot {
    type Err = GearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slot::ALL
            .into_iter()
            .find(|slot| slot.id() == s)
            .ok_or_else(|| GearError::UnknownSlot(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 3] = [Rarity::Common, Rarity::Rare, Rarity::Legendary];

    pub fn id(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Static rarity -> color table.
    pub fn color(self) -> &'static str {
        match self {
            Rarity::Common => config::COMMON_COLOR,
            Rarity::Rare => config::RARE_COLOR,
            Rarity::Legendary => config::LEGENDARY_COLOR,
        }
    }

    /// Only legendary gear glows.
    pub fn glows(self) -> bool {
        matches!(self, Rarity::Legendary)
    }

    /// CSS box-shadow of the given spread, or `"none"` when the rarity doesn't glow.
    pub fn box_shadow(self, px: u32) -> String {
        if self.glows() {
            format!("0 0 {}px {}", px, self.color())
        } else {
            "none".to_string()
        }
    }

    /// Uniform pick from a roll in [0, 1), e.g. `Math.random()`.
    pub fn from_roll(roll: f64) -> Self {
        let n = Rarity::ALL.len();
        let idx = ((roll * n as f64).floor().max(0.0) as usize).min(n - 1);
        Rarity::ALL[idx]
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Rarity {
    type Err = GearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .into_iter()
            .find(|r| r.id() == s)
            .ok_or_else(|| GearError::UnknownRarity(s.to_string()))
    }
}

// ---------------- Glow animation -----------------

// Slack for accumulated float error so the flip lands on the 14th step.
const GLOW_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlowDirection {
    Increasing,
    Decreasing,
}

/// Ping-pong glow state of a legendary piece.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlowState {
    pub intensity: f64,
    pub direction: GlowDirection,
}

impl Default for GlowState {
    fn default() -> Self {
        Self {
            intensity: config::GLOW_MIN,
            direction: GlowDirection::Increasing,
        }
    }
}

impl GlowState {
    /// One animation tick of the triangle wave between GLOW_MIN and GLOW_MAX.
    pub fn next(self) -> Self {
        match self.direction {
            GlowDirection::Increasing => {
                let intensity = self.intensity + config::GLOW_STEP;
                if intensity >= config::GLOW_MAX - GLOW_EPSILON {
                    Self { intensity: config::GLOW_MAX, direction: GlowDirection::Decreasing }
                } else {
                    Self { intensity, ..self }
                }
            }
            GlowDirection::Decreasing => {
                let intensity = self.intensity - config::GLOW_STEP;
                if intensity <= config::GLOW_MIN + GLOW_EPSILON {
                    Self { intensity: config::GLOW_MIN, direction: GlowDirection::Increasing }
                } else {
                    Self { intensity, ..self }
                }
            }
        }
    }

    /// Canvas shadow blur for the current intensity.
    pub fn blur(&self) -> f64 {
        config::GLOW_BASE_BLUR + self.intensity * config::GLOW_BLUR_RANGE
    }
}

// ---------------- Gear -----------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GearPiece {
    slot: Slot,
    rarity: Rarity,
    /// Present only for legendary pieces.
    glow: Option<GlowState>,
}

impl GearPiece {
    pub fn new(slot: Slot, rarity: Rarity) -> Self {
        let glow = rarity.glows().then(GlowState::default);
        Self { slot, rarity, glow }
    }

    /// Build a piece from string ids; unknown ids are rejected.
    pub fn from_ids(slot: &str, rarity: &str) -> Result<Self, GearError> {
        Ok(Self::new(slot.parse()?, rarity.parse()?))
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn color(&self) -> &'static str {
        self.rarity.color()
    }

    pub fn glow(&self) -> Option<GlowState> {
        self.glow
    }

    pub fn advance_glow(&mut self) {
        if let Some(g) = self.glow {
            self.glow = Some(g.next());
        }
    }

    /// CSS box-shadow for the slot widget; legendary only.
    pub fn widget_glow_style(&self) -> String {
        self.rarity.box_shadow(config::WIDGET_GLOW_PX)
    }
}

/// One optional piece per slot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    pieces: [Option<GearPiece>; 4],
}

impl Loadout {
    pub fn get(&self, slot: Slot) -> Option<&GearPiece> {
        self.pieces[slot.index()].as_ref()
    }

    /// Put a piece in its slot, returning whatever it displaced.
    pub fn equip(&mut self, piece: GearPiece) -> Option<GearPiece> {
        self.pieces[piece.slot().index()].replace(piece)
    }

    /// Equipped pieces in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &GearPiece> {
        self.pieces.iter().flatten()
    }

    pub fn equipped_count(&self) -> usize {
        self.iter().count()
    }

    pub fn advance_glow(&mut self) {
        for piece in self.pieces.iter_mut().flatten() {
            piece.advance_glow();
        }
    }
}

// ---------------- Player -----------------

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Top-left corner of the sprite in canvas pixels.
    pub position: Position,
    pub speed: f64,
    pub gear: Loadout,
}

impl PlayerState {
    /// Centered on the canvas with every slot empty.
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            position: Position {
                x: cfg.canvas_width / 2.0 - cfg.player_size / 2.0,
                y: cfg.canvas_height / 2.0 - cfg.player_size / 2.0,
            },
            speed: cfg.player_speed,
            gear: Loadout::default(),
        }
    }

    /// Sprite centre; the quadrant dividers pass through it.
    pub fn center(&self, cfg: &GameConfig) -> Position {
        Position {
            x: self.position.x + cfg.player_size / 2.0,
            y: self.position.y + cfg.player_size / 2.0,
        }
    }

    /// Move by one tick of held input. Axes are independent and not normalised,
    /// so diagonals travel speed * sqrt(2).
    pub fn advance(&mut self, input: &InputState, cfg: &GameConfig) {
        let p = &mut self.position;
        if input.left {
            p.x = (p.x - self.speed).clamp(0.0, cfg.max_x());
        }
        if input.right {
            p.x = (p.x + self.speed).clamp(0.0, cfg.max_x());
        }
        if input.up {
            p.y = (p.y - self.speed).clamp(0.0, cfg.max_y());
        }
        if input.down {
            p.y = (p.y + self.speed).clamp(0.0, cfg.max_y());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Key;

    fn held(keys: &[Key]) -> InputState {
        let mut input = InputState::default();
        for k in keys {
            input.set(*k, true);
        }
        input
    }

    #[test]
    fn slot_and_rarity_ids_parse() {
        for slot in Slot::ALL {
            assert_eq!(slot.id().parse::<Slot>(), Ok(slot));
        }
        for rarity in Rarity::ALL {
            assert_eq!(rarity.id().parse::<Rarity>(), Ok(rarity));
        }
        assert_eq!("chest".parse::<Slot>(), Err(GearError::UnknownSlot("chest".into())));
        assert_eq!("epic".parse::<Rarity>(), Err(GearError::UnknownRarity("epic".into())));
    }

    #[test]
    fn rarity_roll_is_uniform_over_thirds() {
        assert_eq!(Rarity::from_roll(0.0), Rarity::Common);
        assert_eq!(Rarity::from_roll(0.33), Rarity::Common);
        assert_eq!(Rarity::from_roll(0.34), Rarity::Rare);
        assert_eq!(Rarity::from_roll(0.66), Rarity::Rare);
        assert_eq!(Rarity::from_roll(0.67), Rarity::Legendary);
        assert_eq!(Rarity::from_roll(0.999_999), Rarity::Legendary);
        // Out-of-range rolls stay inside the table.
        assert_eq!(Rarity::from_roll(1.0), Rarity::Legendary);
        assert_eq!(Rarity::from_roll(-0.5), Rarity::Common);
    }

    #[test]
    fn piece_color_comes_from_rarity_table() {
        let legendary = GearPiece::from_ids("helmet", "legendary").unwrap();
        assert_eq!(legendary.color(), config::LEGENDARY_COLOR);
        let rare = GearPiece::from_ids("boot", "rare").unwrap();
        assert_eq!(rare.color(), config::RARE_COLOR);
        let common = GearPiece::from_ids("leg", "common").unwrap();
        assert_eq!(common.color(), config::COMMON_COLOR);
    }

    #[test]
    fn from_ids_fails_fast_on_unknown_ids() {
        let err = GearPiece::from_ids("gloves", "rare").unwrap_err();
        assert_eq!(err, GearError::UnknownSlot("gloves".into()));
        assert_eq!(
            GearPiece::from_ids("helmet", "mythic"),
            Err(GearError::UnknownRarity("mythic".into()))
        );
    }

    #[test]
    fn only_legendary_pieces_carry_glow() {
        assert!(GearPiece::new(Slot::Helmet, Rarity::Common).glow().is_none());
        assert!(GearPiece::new(Slot::Helmet, Rarity::Rare).glow().is_none());
        assert_eq!(
            GearPiece::new(Slot::Helmet, Rarity::Legendary).glow(),
            Some(GlowState { intensity: 0.3, direction: GlowDirection::Increasing })
        );
    }

    #[test]
    fn glow_reaches_max_after_14_ticks_and_returns_after_28() {
        let mut g = GlowState::default();
        for _ in 0..13 {
            g = g.next();
            assert_eq!(g.direction, GlowDirection::Increasing);
        }
        g = g.next();
        assert_eq!(g, GlowState { intensity: 1.0, direction: GlowDirection::Decreasing });
        for _ in 0..13 {
            g = g.next();
            assert_eq!(g.direction, GlowDirection::Decreasing);
        }
        g = g.next();
        assert_eq!(g, GlowState { intensity: 0.3, direction: GlowDirection::Increasing });
    }

    #[test]
    fn glow_never_leaves_range() {
        let mut g = GlowState::default();
        for _ in 0..1000 {
            g = g.next();
            assert!(g.intensity >= config::GLOW_MIN && g.intensity <= config::GLOW_MAX);
        }
    }

    #[test]
    fn advancing_non_legendary_glow_is_a_no_op() {
        let mut rare = GearPiece::new(Slot::Leg, Rarity::Rare);
        for _ in 0..50 {
            rare.advance_glow();
        }
        assert!(rare.glow().is_none());
    }

    #[test]
    fn widget_glow_only_for_legendary() {
        assert_eq!(
            GearPiece::new(Slot::Boot, Rarity::Legendary).widget_glow_style(),
            "0 0 10px #FFB700"
        );
        assert_eq!(GearPiece::new(Slot::Boot, Rarity::Rare).widget_glow_style(), "none");
    }

    #[test]
    fn box_shadow_follows_glow_policy() {
        assert_eq!(Rarity::Legendary.box_shadow(6), "0 0 6px #FFB700");
        assert_eq!(Rarity::Common.box_shadow(6), "none");
        assert_eq!(Rarity::Rare.box_shadow(10), "none");
    }

    #[test]
    fn equipping_twice_keeps_only_second_piece() {
        let mut loadout = Loadout::default();
        assert!(loadout.equip(GearPiece::new(Slot::Helmet, Rarity::Common)).is_none());
        let old = loadout.equip(GearPiece::new(Slot::Helmet, Rarity::Legendary));
        assert_eq!(old.map(|p| p.rarity()), Some(Rarity::Common));
        assert_eq!(loadout.get(Slot::Helmet).map(|p| p.rarity()), Some(Rarity::Legendary));
        assert_eq!(loadout.equipped_count(), 1);
    }

    #[test]
    fn player_starts_centered_and_empty() {
        let player = PlayerState::new(&GameConfig::default());
        assert_eq!(player.position, Position { x: 380.0, y: 280.0 });
        assert_eq!(player.speed, 2.0);
        assert_eq!(player.gear.equipped_count(), 0);
    }

    #[test]
    fn moving_right_ten_ticks() {
        let cfg = GameConfig::default();
        let mut player = PlayerState::new(&cfg);
        let input = held(&[Key::D]);
        for _ in 0..10 {
            player.advance(&input, &cfg);
        }
        assert_eq!(player.position.x, 400.0);
        assert_eq!(player.position.y, 280.0);
    }

    #[test]
    fn movement_is_clamped_to_canvas() {
        let cfg = GameConfig::default();
        for keys in [[Key::D, Key::S], [Key::A, Key::W]] {
            let mut player = PlayerState::new(&cfg);
            let input = held(&keys);
            for _ in 0..1000 {
                player.advance(&input, &cfg);
                assert!(player.position.x >= 0.0 && player.position.x <= cfg.max_x());
                assert!(player.position.y >= 0.0 && player.position.y <= cfg.max_y());
            }
        }
    }

    #[test]
    fn clamp_handles_speed_that_overshoots_edge() {
        let cfg = GameConfig { player_speed: 7.0, ..Default::default() };
        let mut player = PlayerState::new(&cfg);
        let input = held(&[Key::D]);
        for _ in 0..100 {
            player.advance(&input, &cfg);
        }
        assert_eq!(player.position.x, 760.0);
    }

    #[test]
    fn opposite_keys_cancel_away_from_edges() {
        let cfg = GameConfig::default();
        let mut player = PlayerState::new(&cfg);
        player.advance(&held(&[Key::A, Key::D]), &cfg);
        assert_eq!(player.position.x, 380.0);
    }

    #[test]
    fn opposite_keys_at_edge_let_later_branch_win() {
        let cfg = GameConfig::default();
        let mut player = PlayerState::new(&cfg);
        player.position.x = 0.0;
        player.advance(&held(&[Key::A, Key::D]), &cfg);
        assert_eq!(player.position.x, 2.0);
    }

    #[test]
    fn loadout_serializes_with_lowercase_ids() {
        let mut loadout = Loadout::default();
        loadout.equip(GearPiece::new(Slot::Shoulder, Rarity::Rare));
        let json = serde_json::to_string(&loadout).unwrap();
        assert!(json.contains("\"shoulder\""));
        assert!(json.contains("\"rare\""));
    }
}

/// Errors raised at the string and browser boundaries of the demo.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GearError {
    #[error("invalid argument: unknown gear slot '{0}'")]
    UnknownSlot(String),

    #[error("invalid argument: unknown rarity '{0}'")]
    UnknownRarity(String),

    #[error("invalid argument: unknown movement key '{0}'")]
    UnknownKey(String),

    #[error("browser setup failed: {0}")]
    Dom(String),
}

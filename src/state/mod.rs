pub mod input;
pub mod simulation;

pub use input::{InputState, Key};
pub use simulation::{Simulation, SlotIndicator};

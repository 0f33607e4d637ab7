//! Click sessions: the state machine and the registry that drives it.

mod controller;
mod manager;

pub use controller::*;
pub use manager::*;

/// Words collected before a sentence is requested.
pub const THRESHOLD: usize = 10;

pub const LOADING_MESSAGE: &str = "Génération de la phrase...";
pub const CONTINUE_HINT: &str = "Cliquez pour continuer";

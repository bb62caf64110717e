//! Core primitives: reversible action records and deterministic RNG.

pub mod action;
pub mod rng;

pub use action::{Action, ActionLog};
pub use rng::GameRng;

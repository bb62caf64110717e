//! The rules layer: move legality and execution, selection, and undo.
//!
//! - `moves`: the sole mutator of board state during play
//! - `selection`: the two-click move-registration state machine
//! - `undo`: exact inverse application of logged actions

pub mod moves;
pub mod selection;
pub mod undo;

pub use selection::{PendingSelection, SelectOutcome, SelectionProtocol};

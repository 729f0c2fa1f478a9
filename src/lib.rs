//! Pure tic-tac-toe game core.
//!
//! The crate has no UI dependency: [`game::tic_tac_toe::GameState`] is an immutable value and
//! every transition returns a new one. Presentation layers drive it through
//! [`game::session::Session`], which also owns the celebration trigger.

pub mod game;

//! Pause overlay library
//!
//! A modal pause menu for Bevy games: suspends the simulation, captures
//! input, presents Resume / Settings / Main Menu / Quit, and tears itself down
//! after its close transition.  The lifecycle state machine lives in
//! [`overlay`] and does not depend on the ECS; [`menu`] hosts it in Bevy.

pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod menu;
pub mod overlay;
pub mod simulation;

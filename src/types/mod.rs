//! Core types for the kaiwa library
//!
//! This module contains the fundamental types that form the public API:
//! - Message: one node of the dialogue tree, with its outgoing edges
//! - Choice: a player-facing option attached to a branch point
//! - Speaker/Sender: who a line belongs to
//! - PacingConfig: the timing constants driving auto-advance
//! - SessionState: mutable playback state for one playthrough

pub mod config;
pub mod message;
pub mod state;

pub use config::PacingConfig;
pub use message::{Choice, Message, NextTarget, Sender, Speaker};
pub use state::{Cursor, SessionState};

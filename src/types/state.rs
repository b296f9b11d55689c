//! Mutable playback state for one playthrough

use crate::types::message::Choice;
use serde::{Deserialize, Serialize};

/// Position of playback within the dialogue graph
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum Cursor {
    /// Nothing has been shown yet
    #[default]
    NotStarted,
    /// Index of the current message in the graph
    At(usize),
    /// A lookup failed; nothing is current and playback is frozen
    Ended,
}

/// Session state owned by the playback controller
///
/// Lives for one playthrough of a scene and is discarded on restart.
/// Serializable so a session can be saved and resumed against the same
/// script.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SessionState {
    /// Where playback currently is
    pub cursor: Cursor,
    /// Uid of the last message requested; empty until the first reveal.
    /// Kept even when the lookup failed.
    pub current_uid: String,
    /// Seconds accumulated toward the current reading-time threshold
    pub speech_timer: f64,
    /// Seconds accumulated since controller start, for the warm-up gate
    pub begin_timer: f64,
    /// Choices currently offered to the player, empty otherwise
    pub visible_options: Vec<Choice>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether playback is waiting on a choice
    pub fn awaiting_choice(&self) -> bool {
        !self.visible_options.is_empty()
    }
}

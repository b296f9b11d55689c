//! Message tree representation of a parsed script

use serde::{Deserialize, Serialize};

/// One node in the dialogue tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Unique identifier within the script
    pub uid: String,
    /// The line of dialogue (may be empty for pure-choice nodes)
    pub text: String,
    /// Where playback goes when this message is not a branch point
    pub next: NextTarget,
    /// Who this line belongs to
    pub speaker: Speaker,
    /// Player-facing choices, empty for linear messages
    pub options: Vec<Choice>,
    /// Whitespace-separated word count of `text`, fixed at construction
    pub word_count: usize,
}

impl Message {
    pub fn new(
        uid: impl Into<String>,
        text: impl Into<String>,
        next: NextTarget,
        speaker: Speaker,
        options: Vec<Choice>,
    ) -> Self {
        let text = text.into();
        let word_count = text.split_whitespace().count();
        Self {
            uid: uid.into(),
            text,
            next,
            speaker,
            options,
            word_count,
        }
    }

    /// Whether playback should stop here and wait for a choice
    pub fn is_branch_point(&self) -> bool {
        !self.options.is_empty()
    }
}

/// Jump target read from a message's next-uid cell
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum NextTarget {
    /// Uid of the message to show next
    Uid(String),
    /// The `"-1"` sentinel: no linear successor, defer to options or end
    NoNext,
}

impl NextTarget {
    /// Literal cell value marking "no next message"
    pub const SENTINEL: &'static str = "-1";

    /// Interpret a raw cell. The sentinel is matched as a string, exactly
    /// as scripts author it; any other value is taken as a uid.
    pub fn from_cell(cell: &str) -> Self {
        if cell == Self::SENTINEL {
            Self::NoNext
        } else {
            Self::Uid(cell.to_string())
        }
    }
}

/// Speaker identity of a message
///
/// The player is a distinct variant rather than a sender with a special
/// name, so "whose bubble is this" is an exhaustive match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Speaker {
    /// A line written by the player
    Player,
    /// A line from the conversation partner
    Counterpart(Sender),
}

impl Speaker {
    pub fn is_player(&self) -> bool {
        matches!(self, Self::Player)
    }

    /// The counterpart identity, if any
    pub fn sender(&self) -> Option<&Sender> {
        match self {
            Self::Player => None,
            Self::Counterpart(sender) => Some(sender),
        }
    }
}

/// Display identity of the non-player side of the conversation
///
/// Opaque to the engine; the presentation layer decides what the name
/// resolves to (label, avatar key, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sender {
    pub name: String,
}

impl Sender {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A player-facing choice attached to a branch point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Choice {
    /// Display text for the choice
    pub label: String,
    /// Uid of the message reached if this choice is taken
    pub response_uid: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, response_uid: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            response_uid: response_uid.into(),
        }
    }
}

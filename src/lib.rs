//! # kaiwa
//!
//! A branching-dialogue engine for messenger-style scenes. A scene is
//! authored as a tab-separated script; kaiwa parses it into an in-memory
//! dialogue graph and plays it back, reporting the current message to
//! whatever presentation layer sits on top. Linear messages auto-advance
//! once their reading time has elapsed; branch points wait for a choice.
//!
//! ## Quick Start
//!
//! ```rust
//! use kaiwa::{DialogueGraph, PlaybackController, Sender, parser};
//!
//! let script = "tag\tuid\tnext\ttext\n\
//!               \tm0\tm1\tHey, you made it!\n\
//!               $player\tm1\t-1\tBarely.";
//!
//! let sender = Sender::new("Jo");
//! let graph = DialogueGraph::new(parser::parse(script, &sender));
//! let mut playback = PlaybackController::new(graph);
//!
//! // the first advance reveals the entry message
//! playback.advance();
//! assert_eq!(playback.current_message().unwrap().uid, "m0");
//!
//! // feed frame deltas; once the reading time elapses, the next message shows
//! for _ in 0..4 {
//!     playback.tick(0.5);
//! }
//! assert_eq!(playback.current_message().unwrap().uid, "m1");
//! ```
//!
//! Loading from the file system goes through [`script::ScriptSource`]:
//!
//! ```rust,no_run
//! use kaiwa::script::{FileScriptSource, load_dialogue};
//! use kaiwa::Sender;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), kaiwa::ScriptError> {
//! let source = FileScriptSource::new("scripts");
//! let graph = load_dialogue(&source, "act0scene0", &Sender::new("Jo")).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod graph;
pub mod parser;
pub mod playback;
pub mod script;
pub mod storage;
pub mod types;

pub use graph::DialogueGraph;
pub use parser::parse as parse_script;
pub use playback::PlaybackController;
pub use script::{FileScriptSource, InMemoryScriptSource, ScriptError, ScriptSource, load_dialogue};
pub use types::{
    Choice, Cursor, Message, NextTarget, PacingConfig, Sender, SessionState, Speaker,
};

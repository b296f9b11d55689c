//! Playback state machine for a dialogue graph
//!
//! Drives the conversation forward on a frame tick: linear messages
//! auto-advance once their reading time has elapsed, branch points
//! suspend the timer until a choice arrives. A lookup that fails (a
//! dangling next uid, typically the end of the conversation) freezes
//! playback with nothing current rather than raising an error.

use crate::graph::DialogueGraph;
use crate::types::{Choice, Cursor, Message, NextTarget, PacingConfig, SessionState};


/// Tracks the current message and decides when to move on
#[derive(Debug, Clone)]
pub struct PlaybackController {
    graph: DialogueGraph,
    config: PacingConfig,
    session: SessionState,
}

impl PlaybackController {
    pub fn new(graph: DialogueGraph) -> Self {
        Self::with_config(graph, PacingConfig::default())
    }

    pub fn with_config(graph: DialogueGraph, config: PacingConfig) -> Self {
        Self {
            graph,
            config,
            session: SessionState::new(),
        }
    }

    /// Move to the next message
    ///
    /// The first call reveals the entry message; afterwards it follows the
    /// current message's next uid. A no-op while choices are visible and
    /// once playback has frozen.
    pub fn advance(&mut self) {
        if self.session.awaiting_choice() {
            log::trace!("advance ignored while awaiting a choice");
            return;
        }

        match self.session.cursor {
            Cursor::NotStarted => match self.graph.entry() {
                Some(entry) => {
                    let uid = entry.uid.clone();
                    self.goto(&uid);
                }
                None => {
                    log::warn!("advance on an empty graph, nothing to play");
                    self.session.cursor = Cursor::Ended;
                }
            },
            Cursor::At(pos) => {
                let next = self.graph.get(pos).map(|message| message.next.clone());
                match next {
                    Some(NextTarget::Uid(uid)) => self.goto(&uid),
                    Some(NextTarget::NoNext) | None => {
                        log::debug!(
                            "message {:?} has no successor, playback ends",
                            self.session.current_uid
                        );
                        self.session.cursor = Cursor::Ended;
                    }
                }
            }
            Cursor::Ended => {}
        }
    }

    /// Take a choice
    ///
    /// Jumps to the option's response uid and clears the visible options.
    /// Ignored when no options are on screen. Resets the speech timer, so
    /// a pending timer-driven advance in the same frame is suppressed.
    pub fn choose(&mut self, option: &Choice) {
        if !self.session.awaiting_choice() {
            log::trace!("choose ignored, no options visible");
            return;
        }
        log::debug!("chose {:?} -> {}", option.label, option.response_uid);
        let uid = option.response_uid.clone();
        self.goto(&uid);
    }

    /// Advance the internal timers by a wall-clock delta
    ///
    /// Deltas above `max_frame_delta` (a resumed clock after a suspend)
    /// are discarded outright. Nothing fires before `start_delay` has
    /// accumulated, and the speech timer holds still while options are
    /// visible. At most one message transition happens per tick.
    pub fn tick(&mut self, dt: f64) {
        if dt > self.config.max_frame_delta {
            log::trace!("discarding oversized tick delta {dt}");
            return;
        }

        self.session.begin_timer += dt;
        if self.session.begin_timer < self.config.start_delay {
            return;
        }

        if self.session.awaiting_choice() {
            return;
        }

        let Some(word_count) = self.pacing_word_count() else {
            return;
        };

        self.session.speech_timer += dt;
        if self.session.speech_timer > self.config.threshold(word_count) {
            self.advance();
            self.session.speech_timer = 0.0;
        }
    }

    /// The message currently on screen, if any
    pub fn current_message(&self) -> Option<&Message> {
        match self.session.cursor {
            Cursor::At(pos) => self.graph.get(pos),
            Cursor::NotStarted | Cursor::Ended => None,
        }
    }

    /// The choices currently offered to the player
    pub fn current_options(&self) -> &[Choice] {
        &self.session.visible_options
    }

    /// Whether playback has frozen with nothing current
    pub fn has_ended(&self) -> bool {
        matches!(self.session.cursor, Cursor::Ended)
    }

    pub fn graph(&self) -> &DialogueGraph {
        &self.graph
    }

    pub fn config(&self) -> &PacingConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Replace the session state, e.g. one loaded from storage
    ///
    /// The state must come from a session over the same script; a cursor
    /// pointing past the graph simply reads as nothing current.
    pub fn restore(&mut self, session: SessionState) {
        self.session = session;
    }

    /// Jump to `uid`, clearing options and the speech timer
    ///
    /// An unknown uid freezes playback; `current_uid` still records what
    /// was asked for.
    fn goto(&mut self, uid: &str) {
        self.session.speech_timer = 0.0;
        self.session.visible_options.clear();
        self.session.current_uid = uid.to_string();

        match self.graph.lookup(uid) {
            Some((pos, message)) => {
                log::debug!("showing message {uid:?}");
                self.session.cursor = Cursor::At(pos);
                self.session.visible_options = message.options.clone();
            }
            None => {
                log::debug!("no message with uid {uid:?}, playback ends");
                self.session.cursor = Cursor::Ended;
            }
        }
    }

    /// Word count gating the next auto-advance: the current message, or
    /// the entry message before the first reveal.
    fn pacing_word_count(&self) -> Option<usize> {
        let message = match self.session.cursor {
            Cursor::NotStarted => self.graph.entry(),
            Cursor::At(pos) => self.graph.get(pos),
            Cursor::Ended => None,
        };
        message.map(|message| message.word_count)
    }
}

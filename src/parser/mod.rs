//! Tab-separated script parser
//!
//! This module converts the tabular script format into an ordered sequence
//! of messages. The first row is a column header and is discarded; every
//! row after it becomes one message, in file order, so the first parsed
//! message is the conversation's entry point.

use crate::types::{Choice, Message, NextTarget, Sender, Speaker};


/// Row tag marking a line written by the player
const PLAYER_TAG: &str = "$player";

const COL_TAG: usize = 0;
const COL_UID: usize = 1;
const COL_NEXT: usize = 2;
const COL_TEXT: usize = 3;

/// Label columns of the three option pairs; the response uid sits one
/// column to the right of each
const OPTION_LABEL_COLS: [usize; 3] = [5, 7, 9];

/// Parse script text into messages
///
/// `sender` is the scene's single counterpart identity; it is attached to
/// every non-player row. Parsing never fails: a row missing cells yields a
/// message with those fields absent rather than an error.
pub fn parse(text: &str, sender: &Sender) -> Vec<Message> {
    let mut messages = Vec::new();

    for row in text.lines().skip(1) {
        let cells: Vec<&str> = row.split('\t').collect();
        messages.push(parse_row(&cells, sender));
    }

    log::debug!("parsed {} messages", messages.len());
    messages
}

fn parse_row(cells: &[&str], sender: &Sender) -> Message {
    let cell = |col: usize| cells.get(col).copied().unwrap_or_default();

    let uid = cell(COL_UID);
    let text = cell(COL_TEXT);

    if cell(COL_NEXT) == NextTarget::SENTINEL {
        // Branch point: gather its option pairs. These rows always carry
        // the scene sender, whatever their tag says.
        let options = collect_options(cells);
        log::trace!("branch row {uid:?} with {} options", options.len());
        Message::new(
            uid,
            text,
            NextTarget::NoNext,
            Speaker::Counterpart(sender.clone()),
            options,
        )
    } else if cell(COL_TAG) == PLAYER_TAG {
        Message::new(
            uid,
            text,
            NextTarget::from_cell(cell(COL_NEXT)),
            Speaker::Player,
            Vec::new(),
        )
    } else {
        Message::new(
            uid,
            text,
            NextTarget::from_cell(cell(COL_NEXT)),
            Speaker::Counterpart(sender.clone()),
            Vec::new(),
        )
    }
}

/// A pair is kept only when its response cell exists and its label cell is
/// non-empty; anything short of that is skipped, never an error.
fn collect_options(cells: &[&str]) -> Vec<Choice> {
    let mut options = Vec::new();

    for &label_col in &OPTION_LABEL_COLS {
        let response_col = label_col + 1;
        if response_col < cells.len() && !cells[label_col].is_empty() {
            options.push(Choice::new(cells[label_col], cells[response_col]));
        }
    }

    options
}

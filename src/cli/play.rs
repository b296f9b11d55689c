//! Player mode for running scripts in the terminal
//!
//! Drives the playback controller with a wall-clock tick loop: messages
//! appear on their reading-time schedule, branch points pause for input.

use crate::graph::DialogueGraph;
use crate::parser;
use crate::playback::PlaybackController;
use crate::types::{Choice, Message, Sender, Speaker};
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(50);

/// Run the player mode
pub fn run_play(script_text: &str, sender_name: &str) -> anyhow::Result<()> {
    let sender = Sender::new(sender_name);
    let graph = DialogueGraph::new(parser::parse(script_text, &sender));
    if graph.is_empty() {
        println!("(script has no messages)");
        return Ok(());
    }

    let mut playback = PlaybackController::new(graph);

    println!("=== kaiwa player ===");
    println!();
    println!("Messages arrive on their own. Pick options with 1-9, q quits.");
    println!();

    let mut shown_uid = String::new();
    let mut prev = Instant::now();

    loop {
        let now = Instant::now();
        let dt = now.duration_since(prev).as_secs_f64();
        prev = now;
        playback.tick(dt);

        if playback.session().current_uid != shown_uid {
            shown_uid = playback.session().current_uid.clone();
            if let Some(message) = playback.current_message() {
                show_message(message);
            }
        }

        if !playback.current_options().is_empty() {
            match prompt_choice(playback.current_options())? {
                Some(choice) => playback.choose(&choice),
                None => {
                    println!("Goodbye!");
                    return Ok(());
                }
            }
            // the blocking prompt stalled the clock; the controller will
            // discard the oversized delta of the next tick
            continue;
        }

        if playback.has_ended() {
            println!();
            println!("(end of conversation)");
            return Ok(());
        }

        thread::sleep(FRAME);
    }
}

fn show_message(message: &Message) {
    if message.text.is_empty() {
        return;
    }
    match &message.speaker {
        Speaker::Player => {
            println!("{:>72}", format!("you: {}", message.text));
        }
        Speaker::Counterpart(sender) => {
            println!("{}: {}", sender.name, message.text);
        }
    }
}

fn prompt_choice(options: &[Choice]) -> anyhow::Result<Option<Choice>> {
    println!();
    for (i, option) in options.iter().enumerate() {
        println!("  {}) {}", i + 1, option.label);
    }

    loop {
        print!("Select (1-{}): ", options.len());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input == "q" {
            return Ok(None);
        }
        if let Ok(n) = input.parse::<usize>()
            && n >= 1
            && n <= options.len()
        {
            println!();
            return Ok(Some(options[n - 1].clone()));
        }
        println!("Please enter a number between 1 and {}.", options.len());
    }
}

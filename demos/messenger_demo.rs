//! Plays a small messenger scene with a simulated 50 ms frame clock,
//! picking the first option at every branch.
//!
//! Run with: cargo run --example messenger_demo

use kaiwa::{DialogueGraph, PlaybackController, Sender, Speaker, parser};

const SCRIPT: &str = "tag\tuid\tnext\ttext\tnotes\topt1\tresp1\topt2\tresp2\topt3\tresp3
\tm0\tm1\tHey. You up?
$player\tm1\tm2\tYeah. What's going on?
\tm2\t-1\tSomething happened at the station. Can you come?\t\tI'm on my way\tm3\tTell me more first\tm4
$player\tm3\tm5\tGive me ten minutes.
$player\tm4\tm6\tNot until you tell me what this is.
\tm5\t-1\tThank you. Hurry.
\tm6\tm7\tThe power's out on the whole line.
\tm7\t-1\tI'd rather show you. Please.\t\tFine, coming now\tm3
";

fn main() {
    let sender = Sender::new("Alex");
    let graph = DialogueGraph::new(parser::parse(SCRIPT, &sender));
    let mut playback = PlaybackController::new(graph);

    let mut shown = String::new();
    for _ in 0..2000 {
        playback.tick(0.05);

        if playback.session().current_uid != shown {
            shown = playback.session().current_uid.clone();
            if let Some(message) = playback.current_message() {
                match &message.speaker {
                    Speaker::Player => println!("        you | {}", message.text),
                    Speaker::Counterpart(sender) => {
                        println!("{:>11} | {}", sender.name, message.text)
                    }
                }
            }
        }

        if let Some(choice) = playback.current_options().first().cloned() {
            println!("            > {}", choice.label);
            playback.choose(&choice);
        }

        if playback.has_ended() {
            break;
        }
    }

    println!("(end of conversation)");
}

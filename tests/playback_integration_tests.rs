//! End-to-end playback over parsed scripts
//!
//! Exercises the full path: script text -> parser -> graph -> controller.

use kaiwa::{DialogueGraph, PlaybackController, Sender, parser, storage};

const HEADER: &str = "tag\tuid\tnext\ttext\tnotes\topt1\tresp1\topt2\tresp2\topt3\tresp3";

fn script(rows: &[&str]) -> String {
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text
}

fn playback_for(rows: &[&str]) -> PlaybackController {
    let graph = DialogueGraph::new(parser::parse(&script(rows), &Sender::new("Jo")));
    PlaybackController::new(graph)
}

#[test]
fn every_row_after_the_header_becomes_a_message() {
    let rows = [
        "\tm0\tm1\tOne",
        "$player\tm1\tm2\tTwo",
        "\tm2\t-1\tThree",
        "\tm3",
    ];
    let graph = DialogueGraph::new(parser::parse(&script(&rows), &Sender::new("Jo")));

    assert_eq!(graph.len(), rows.len());
}

#[test]
fn branch_round_trip_choice_lands_on_target() {
    let mut playback = playback_for(&[
        "$player\tm0\t-1\tHi\t\tYes\tm1\tNo\tm2",
        "\tm1\tm3\tGreat",
        "\tm2\t-1\tOkay",
    ]);

    playback.advance();
    let options = playback.current_options().to_vec();
    assert_eq!(options.len(), 2);

    // every offered response resolves to a real node
    for option in &options {
        assert!(playback.graph().lookup(&option.response_uid).is_some());
    }

    playback.choose(&options[0]);
    assert_eq!(playback.session().current_uid, "m1");
    assert_eq!(playback.current_message().unwrap().text, "Great");
}

#[test]
fn linear_script_plays_through_and_freezes_at_the_dangling_tail() {
    let mut playback = playback_for(&["\tm0\tm1\tHi", "\tm1\t-1\tBye"]);

    playback.advance();
    assert_eq!(playback.session().current_uid, "m0");

    playback.tick(0.5);
    assert_eq!(playback.session().current_uid, "m1");

    playback.tick(0.5);
    assert!(playback.current_message().is_none());
    assert!(playback.has_ended());

    // end of conversation is quiet, not an error
    playback.tick(0.5);
    playback.advance();
}

#[test]
fn timer_holds_at_a_branch_and_resumes_after_the_choice() {
    let mut playback = playback_for(&[
        "\tm0\t-1\tComing?\t\tYes\tm1",
        "\tm1\tm2\tGood",
        "\tm2\t-1\t",
    ]);

    playback.advance();
    for _ in 0..30 {
        playback.tick(0.9);
    }
    assert_eq!(playback.session().current_uid, "m0");

    let choice = playback.current_options()[0].clone();
    playback.choose(&choice);
    assert_eq!(playback.session().current_uid, "m1");

    playback.tick(0.5);
    assert_eq!(playback.session().current_uid, "m2");
}

#[test]
fn duplicate_uid_resolves_to_its_first_definition() {
    let mut playback = playback_for(&[
        "\tm0\tdup\tStart",
        "\tdup\t-1\tFirst version",
        "\tdup\t-1\tSecond version",
    ]);

    playback.advance();
    playback.tick(0.5);

    assert_eq!(playback.current_message().unwrap().text, "First version");
}

#[test]
fn saved_session_resumes_in_a_fresh_controller() {
    let rows = ["\tm0\tm1\tHi", "\tm1\tm2\tStill with me?", "\tm2\t-1\tGood"];

    let mut playback = playback_for(&rows);
    playback.advance();
    playback.tick(0.5);
    assert_eq!(playback.session().current_uid, "m1");

    let bytes = storage::save(playback.session()).unwrap();

    let mut resumed = playback_for(&rows);
    resumed.restore(storage::load(&bytes).unwrap());

    assert_eq!(resumed.session().current_uid, "m1");
    assert_eq!(resumed.current_message().unwrap().text, "Still with me?");
}

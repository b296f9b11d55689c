//! Script loading behavior at the resource seam

use kaiwa::Sender;
use kaiwa::script::{
    FileScriptSource, InMemoryScriptSource, ScriptError, ScriptSource, load_dialogue,
};

const SCRIPT: &str = "tag\tuid\tnext\ttext\n\tm0\t-1\tHello";

#[tokio::test]
async fn in_memory_source_round_trips() {
    let mut source = InMemoryScriptSource::new();
    source.add_script("act0scene0", SCRIPT);

    let text = source.load_script_text("act0scene0").await.unwrap();
    assert_eq!(text, SCRIPT);
}

#[tokio::test]
async fn unknown_name_reports_missing() {
    let source = InMemoryScriptSource::new();

    let err = source.load_script_text("nonexistent").await.unwrap_err();
    assert!(matches!(err, ScriptError::Missing { ref name } if name == "nonexistent"));
}

#[tokio::test]
async fn missing_file_reports_missing() {
    let source = FileScriptSource::new("/definitely/not/here");

    let err = source.load_script_text("act0scene0").await.unwrap_err();
    assert!(matches!(err, ScriptError::Missing { .. }));
}

#[tokio::test]
async fn undecodable_file_reports_malformed() {
    let dir = std::env::temp_dir().join(format!("kaiwa-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("broken.tsv"), [0xff, 0xfe, 0xfd]).unwrap();

    let source = FileScriptSource::new(&dir);
    let err = source.load_script_text("broken").await.unwrap_err();
    assert!(matches!(err, ScriptError::Malformed { .. }));

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn load_dialogue_builds_the_graph() {
    let mut source = InMemoryScriptSource::new();
    source.add_script("scene", SCRIPT);

    let graph = load_dialogue(&source, "scene", &Sender::new("Jo"))
        .await
        .unwrap();

    assert_eq!(graph.len(), 1);
    assert!(graph.lookup("m0").is_some());
}

#[tokio::test]
async fn load_dialogue_on_a_missing_script_builds_nothing() {
    let source = InMemoryScriptSource::new();

    let result = load_dialogue(&source, "scene", &Sender::new("Jo")).await;
    assert!(matches!(result, Err(ScriptError::Missing { .. })));
}

//! CLI entry point for kaiwa
//!
//! Plays a tab-separated dialogue script in the terminal.

use kaiwa::cli;
use kaiwa::script::{FileScriptSource, ScriptSource};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "play" => {
            if args.len() < 3 {
                eprintln!("Error: Missing script file path");
                eprintln!();
                print_usage();
                process::exit(1);
            }
            let path = PathBuf::from(&args[2]);
            let sender_name = args
                .iter()
                .position(|arg| arg == "--sender")
                .and_then(|i| args.get(i + 1))
                .cloned()
                .unwrap_or_else(|| "them".to_string());

            if let Err(err) = run_play(&path, &sender_name).await {
                eprintln!("Error: {err}");
                process::exit(1);
            }
        }
        "--help" | "-h" => {
            print_usage();
        }
        other => {
            eprintln!("Error: Unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    }
}

async fn run_play(path: &Path, sender_name: &str) -> anyhow::Result<()> {
    let base = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| anyhow::anyhow!("script path has no file name"))?;

    let source = FileScriptSource::new(base);
    let text = source.load_script_text(name).await?;

    cli::play::run_play(&text, sender_name)
}

fn print_usage() {
    println!("kaiwa - branching dialogue player");
    println!();
    println!("USAGE:");
    println!("    kaiwa play <script.tsv> [--sender NAME]");
    println!();
    println!("COMMANDS:");
    println!("    play <file> [--sender NAME]    Play a script in the terminal");
    println!();
    println!("Set RUST_LOG=debug for engine logs.");
}

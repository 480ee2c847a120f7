//! Evil Termo - CLI
//!
//! Portuguese word-guessing game with board penalties, sacrificial hints and
//! a timed anagram challenge on loss. TUI and line-based CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use evil_termo::{
    commands::run_simple,
    core::Word,
    hint::{GeminiHint, HintService},
    words::{PALAVRAS, loader::words_from_slice},
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "evil_termo",
    about = "Termo with a mean streak: penalties, sacrificial hints, anagram bonus round",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based CLI mode
    Simple,
}

/// Load the answer list based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    use evil_termo::words::loader::load_from_file;

    let words = match wordlist_mode {
        "embedded" => words_from_slice(PALAVRAS),
        path => load_from_file(path)?,
    };

    if words.is_empty() {
        anyhow::bail!("wordlist '{wordlist_mode}' contains no valid 5-letter words");
    }
    Ok(words)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let words = load_wordlist(&cli.wordlist)?;
    let hint_service: Arc<dyn HintService> = Arc::new(GeminiHint::from_env());

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(words, hint_service),
        Commands::Simple => run_simple(words, &hint_service).map_err(|e| anyhow::anyhow!(e)),
    }
}

fn run_play_command(words: Vec<Word>, hint_service: Arc<dyn HintService>) -> Result<()> {
    use evil_termo::interactive::{App, run_tui};

    let app = App::new(words, hint_service)?;
    run_tui(app)
}

//! Gallows - CLI
//!
//! Terminal hangman with TUI and line modes, plus a standalone dictionary
//! lookup command.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gallows::{
    commands::{define_word, list_words, run_simple},
    core::DEFAULT_LIVES,
    dictionary::{Dictionary, DictionaryApi},
    effects::EffectRunner,
    interactive::{App, run_tui},
    output::{print_definitions, print_word_index},
    persistence::{RestWordStore, STORE_URL_VAR, WordStore},
    wordlists::{RandomWordApi, WordSource},
};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "gallows",
    about = "Terminal hangman with dictionary lookup",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Misses allowed before the game is lost
    #[arg(short, long, global = true, default_value_t = DEFAULT_LIVES)]
    lives: u8,

    /// Skip all network calls: embedded word list, no dictionary, no
    /// persistence
    #[arg(long, global = true)]
    offline: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented, no TUI)
    Simple,

    /// Look up a word in the dictionary
    Define {
        /// Word to look up
        word: String,
    },

    /// Browse the words collected from won games
    Words {
        /// Only show words starting with this letter
        #[arg(short, long)]
        starts_with: Option<char>,

        /// Only show words containing this text
        #[arg(long)]
        search: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let lives = cli.lives.max(1);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(lives, cli.offline),
        Commands::Simple => run_simple_command(lives, cli.offline),
        Commands::Define { word } => run_define_command(&word),
        Commands::Words {
            starts_with,
            search,
        } => run_words_command(search.as_deref(), starts_with),
    }
}

fn run_play_command(lives: u8, offline: bool) -> Result<()> {
    let source: Option<Box<dyn WordSource>> = if offline {
        None
    } else {
        Some(Box::new(RandomWordApi::new()?))
    };

    let dictionary: Option<Arc<dyn Dictionary + Send + Sync>> = if offline {
        None
    } else {
        Some(Arc::new(DictionaryApi::new()?))
    };

    let store: Option<Arc<dyn WordStore + Send + Sync>> = if offline {
        None
    } else {
        RestWordStore::from_env()?.map(|s| Arc::new(s) as Arc<dyn WordStore + Send + Sync>)
    };

    let runner = EffectRunner::new(dictionary, store);
    let app = App::new(lives, source, runner);
    run_tui(app)
}

fn run_simple_command(lives: u8, offline: bool) -> Result<()> {
    let source = if offline {
        None
    } else {
        Some(RandomWordApi::new()?)
    };
    let dictionary = if offline {
        None
    } else {
        Some(DictionaryApi::new()?)
    };
    let store = if offline {
        None
    } else {
        RestWordStore::from_env()?
    };

    run_simple(
        lives,
        source.as_ref().map(|s| s as &dyn WordSource),
        dictionary.as_ref().map(|d| d as &dyn Dictionary),
        store.as_ref().map(|s| s as &dyn WordStore),
    )
    .map_err(|e| anyhow::anyhow!(e))
}

fn run_define_command(word: &str) -> Result<()> {
    let dictionary = DictionaryApi::new()?;
    let entries = define_word(word, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_definitions(&entries);
    Ok(())
}

fn run_words_command(search: Option<&str>, starts_with: Option<char>) -> Result<()> {
    let Some(store) = RestWordStore::from_env()? else {
        anyhow::bail!("no word store configured; set {STORE_URL_VAR} to browse collected words");
    };

    let words = list_words(&store, search, starts_with).map_err(|e| anyhow::anyhow!(e))?;
    print_word_index(&words);
    Ok(())
}

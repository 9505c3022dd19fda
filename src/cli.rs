use crate::dictionary::DEFAULT_LANGUAGE;
use crate::engine::{Accepted, Alert, GameSnapshot};
use crate::game_state::{GameInterface, UserAction};
use clap::Parser;
use std::io::{BufRead, ErrorKind};
use std::path::PathBuf;

/// Word Scramble: build words from the letters of a root word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of root words
    #[arg(short = 's', long = "start-words")]
    pub start_words_path: Option<PathBuf>,

    /// Path to a newline-delimited dictionary file
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Language tag of the dictionary
    #[arg(short = 'l', long = "language", default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Seed for reproducible root word selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

const NEW_GAME_COMMAND: &str = ":new";
const QUIT_COMMANDS: [&str; 2] = [":quit", ":q"];

pub fn read_action<R: BufRead>(reader: &mut R) -> UserAction {
    println!("\nEnter a word (':new' for a new game, ':quit' to exit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        // End of input behaves like quitting
        Ok(0) => return UserAction::Exit,
        Ok(_) => {}
        // The undecodable line is consumed; carry on with the next one
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            println!("Input is not valid UTF-8, please try again.");
            return UserAction::Submit(String::new());
        }
        Err(_) => return UserAction::Exit,
    }

    let command = input.trim();
    if command.eq_ignore_ascii_case(NEW_GAME_COMMAND) {
        UserAction::NewGame
    } else if QUIT_COMMANDS.iter().any(|q| command.eq_ignore_ascii_case(q)) {
        UserAction::Exit
    } else {
        UserAction::Submit(input.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[must_use]
pub fn format_used_word(word: &str) -> String {
    format!("({}) {}", word.chars().count(), word)
}

pub fn display_game(snapshot: &GameSnapshot) {
    println!("=== {} ===", snapshot.root_word);
    for word in &snapshot.used_words {
        println!("  {}", format_used_word(word));
    }
    println!("Score: {}", snapshot.score);
}

pub fn display_accepted(accepted: &Accepted) {
    println!("'{}' accepted for {} points.", accepted.word, accepted.points);
}

pub fn display_rejection(alert: &Alert) {
    println!("{}", alert.title);
    println!("{}", alert.message);
}

pub fn display_new_game(root_word: &str) {
    println!("New game started. Build words from '{root_word}'.");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_action(&mut self) -> Option<UserAction> {
        Some(read_action(&mut self.reader))
    }

    fn display_game(&mut self, snapshot: &GameSnapshot) {
        display_game(snapshot);
    }

    fn display_accepted(&mut self, accepted: &Accepted) {
        display_accepted(accepted);
    }

    fn display_rejection(&mut self, alert: &Alert) {
        display_rejection(alert);
    }

    fn display_new_game(&mut self, root_word: &str) {
        display_new_game(root_word);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}

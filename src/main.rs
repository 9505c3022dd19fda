use log::error;
use std::io;
use std::process::ExitCode;
use word_scramble::cli::{Cli, CliInterface, parse_cli};
use word_scramble::tui::TuiInterface;
use word_scramble::{
    GameEngine, StartWords, WordListDictionary, WordListError, game_loop, load_words_from_file,
    load_words_from_str, logging, wordbank::EMBEDDED_START_WORDS,
};

fn load_start_words(cli: &Cli) -> Result<StartWords, WordListError> {
    let words = match &cli.start_words_path {
        Some(path) => load_words_from_file(path)?,
        None => load_words_from_str(EMBEDDED_START_WORDS),
    };
    match cli.seed {
        Some(seed) => StartWords::with_seed(words, seed),
        None => StartWords::new(words),
    }
}

fn load_dictionary(cli: &Cli) -> Result<WordListDictionary, WordListError> {
    WordListDictionary::for_language(&cli.language, cli.dictionary_path.as_deref())
}

fn run(cli: &Cli) -> Result<(), String> {
    let start_words = load_start_words(cli).map_err(|e| format!("Failed to load root words: {e}"))?;
    let dictionary = load_dictionary(cli).map_err(|e| format!("Failed to load dictionary: {e}"))?;
    let mut engine = GameEngine::new(start_words, dictionary, &cli.language)
        .map_err(|e| format!("Failed to start game: {e}"))?;

    if cli.tui {
        let mut interface =
            TuiInterface::new().map_err(|e| format!("Failed to initialise terminal: {e}"))?;
        game_loop(&mut engine, &mut interface).map_err(|e| e.to_string())
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut engine, &mut interface).map_err(|e| e.to_string())
    }
}

fn main() -> ExitCode {
    let cli = parse_cli();
    match logging::init(cli.tui) {
        Ok(Some(path)) => log::info!("Logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("Failed to open log file: {e}"),
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

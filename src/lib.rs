// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod engine;
pub mod game_state;
pub mod logging;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use dictionary::{DictionaryChecker, WordListDictionary};
pub use engine::{Accepted, Alert, EngineError, GameEngine, GameEvent, GameSnapshot, Rejection};
pub use game_state::{GameInterface, UserAction, game_loop};
pub use wordbank::{
    RootWordSource, StartWords, WordListError, load_words_from_file, load_words_from_str,
};

//! Game engine for Word Scramble.
//!
//! The engine owns all state of a round (root word, accepted words, score and
//! the pending input) and runs every submission through the validation
//! pipeline. It renders nothing itself: callers read snapshots, react to the
//! returned [`Accepted`] / [`Rejection`] values, or subscribe to [`GameEvent`]s.

use crate::dictionary::DictionaryChecker;
use crate::wordbank::RootWordSource;
use crate::{debug_log, info_log};
use crossbeam_channel::{Receiver, Sender, unbounded};
use thiserror::Error;

/// Words shorter than this are never accepted.
pub const MIN_WORD_LENGTH: usize = 3;

/// Fatal errors: the engine cannot start a round without a root word.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("no root words available to start a game")]
    NoRootWords,
}

/// Why a submission was turned down. The engine stays fully usable afterwards.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Word used already")]
    DuplicateWord,
    #[error("Word not possible.")]
    NotComposable { root_word: String },
    #[error("Word not recognized.")]
    NotRecognized,
    #[error("Word not valid.")]
    TooShortOrTrivial,
}

impl Rejection {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::DuplicateWord => "Word used already",
            Self::NotComposable { .. } => "Word not possible.",
            Self::NotRecognized => "Word not recognized.",
            Self::TooShortOrTrivial => "Word not valid.",
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::DuplicateWord => "Be more original.".to_string(),
            Self::NotComposable { root_word } => {
                format!("You can't spell that word from '{root_word}'!")
            }
            Self::NotRecognized => "You can't just make them up, you know.".to_string(),
            Self::TooShortOrTrivial => {
                "Your word is either too short or the same as the given word.".to_string()
            }
        }
    }

    #[must_use]
    pub fn alert(&self) -> Alert {
        Alert {
            title: self.title().to_string(),
            message: self.message(),
        }
    }
}

/// Title/message pair shown to the player for a rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// A successfully accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub word: String,
    /// Points earned by this word: its length plus the number of words accepted before it.
    pub points: usize,
    /// Running total after this word.
    pub score: usize,
}

/// Emitted to subscribers after every successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted {
        root_word: String,
    },
    WordAccepted {
        word: String,
        points: usize,
        score: usize,
    },
}

/// Owned copy of the engine state for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub root_word: String,
    pub used_words: Vec<String>,
    pub score: usize,
    pub pending_input: String,
}

pub struct GameEngine<S: RootWordSource, D: DictionaryChecker> {
    source: S,
    dictionary: D,
    language: String,
    root_word: String,
    used_words: Vec<String>,
    score: usize,
    pending_input: String,
    subscribers: Vec<Sender<GameEvent>>,
}

impl<S: RootWordSource, D: DictionaryChecker> GameEngine<S, D> {
    /// Build an engine and start the first round.
    ///
    /// Fails with [`EngineError::NoRootWords`] when the source has nothing to offer.
    pub fn new(source: S, dictionary: D, language: &str) -> Result<Self, EngineError> {
        let mut engine = Self {
            source,
            dictionary,
            language: language.to_string(),
            root_word: String::new(),
            used_words: Vec::new(),
            score: 0,
            pending_input: String::new(),
            subscribers: Vec::new(),
        };
        engine.start_game()?;
        Ok(engine)
    }

    /// Draw a new root word and clear the round. State is untouched on error.
    pub fn start_game(&mut self) -> Result<(), EngineError> {
        let root_word = self
            .source
            .pick_random_root()
            .map(|word| normalize(&word))
            .filter(|word| !word.is_empty())
            .ok_or(EngineError::NoRootWords)?;

        info_log!("start_game() - root word '{}'", root_word);
        self.root_word = root_word;
        self.used_words.clear();
        self.score = 0;
        self.pending_input.clear();

        self.notify(&GameEvent::GameStarted {
            root_word: self.root_word.clone(),
        });
        Ok(())
    }

    /// Explicit "new game" action; same semantics as [`Self::start_game`].
    pub fn reset_for_new_game(&mut self) -> Result<(), EngineError> {
        self.start_game()
    }

    /// Run `raw_input` through the validation pipeline.
    ///
    /// Returns `Ok(None)` for blank input, which is ignored without a rejection.
    pub fn submit_word(&mut self, raw_input: &str) -> Result<Option<Accepted>, Rejection> {
        let word = normalize(raw_input);
        if word.is_empty() {
            debug_log!("submit_word() - ignoring blank submission");
            return Ok(None);
        }

        if let Err(rejection) = self.validate(&word) {
            debug_log!("submit_word() - '{}' rejected: {:?}", word, rejection);
            return Err(rejection);
        }

        let points = word.chars().count() + self.used_words.len();
        self.score += points;
        self.used_words.insert(0, word.clone());
        self.pending_input.clear();
        info_log!(
            "submit_word() - accepted '{}' for {} points, score {}",
            word,
            points,
            self.score
        );

        let accepted = Accepted {
            word,
            points,
            score: self.score,
        };
        self.notify(&GameEvent::WordAccepted {
            word: accepted.word.clone(),
            points,
            score: self.score,
        });
        Ok(Some(accepted))
    }

    fn validate(&self, word: &str) -> Result<(), Rejection> {
        if !self.is_original(word) {
            return Err(Rejection::DuplicateWord);
        }
        if !is_composable(word, &self.root_word) {
            return Err(Rejection::NotComposable {
                root_word: self.root_word.clone(),
            });
        }
        if !self.dictionary.is_recognized_word(word, &self.language) {
            return Err(Rejection::NotRecognized);
        }
        if word.chars().count() < MIN_WORD_LENGTH || word == self.root_word {
            return Err(Rejection::TooShortOrTrivial);
        }
        Ok(())
    }

    fn is_original(&self, word: &str) -> bool {
        !self.used_words.iter().any(|used| used == word)
    }

    /// Input-field binding. Cleared again by the next accepted submission.
    pub fn set_pending_input(&mut self, text: &str) {
        self.pending_input = text.to_string();
    }

    /// Receive a [`GameEvent`] after each successful mutation.
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self, event: &GameEvent) {
        // Drop subscribers whose receiver is gone
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first.
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            root_word: self.root_word.clone(),
            used_words: self.used_words.clone(),
            score: self.score,
            pending_input: self.pending_input.clone(),
        }
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True when `word` can be spelled from the letters of `root`, each letter
/// used at most as often as it occurs in `root`.
#[must_use]
pub fn is_composable(word: &str, root: &str) -> bool {
    let mut available: Vec<char> = root.chars().collect();
    for letter in word.chars() {
        match available.iter().position(|&c| c == letter) {
            Some(pos) => {
                available.swap_remove(pos);
            }
            None => return false,
        }
    }
    true
}

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

pub const EMBEDDED_START_WORDS: &str = include_str!("resources/start.txt");

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
    #[error("word list is empty")]
    Empty,
    #[error("no bundled dictionary for language '{0}', pass a dictionary file")]
    NoBundledDictionary(String),
}

/// Supplies the root word for each new game.
pub trait RootWordSource {
    /// `None` when no root word can be supplied.
    fn pick_random_root(&mut self) -> Option<String>;
}

fn parse_line(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    (!word.is_empty() && word.chars().all(char::is_alphabetic)).then_some(word)
}

pub fn load_words_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(parse_line).collect()
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = parse_line(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Root words drawn uniformly at random from a preloaded list.
#[derive(Debug, Clone)]
pub struct StartWords {
    words: Vec<String>,
    rng: ChaCha8Rng,
}

impl StartWords {
    pub fn new(words: Vec<String>) -> Result<Self, WordListError> {
        Self::with_rng(words, ChaCha8Rng::from_entropy())
    }

    /// Reproducible sequence of root words for a given seed.
    pub fn with_seed(words: Vec<String>, seed: u64) -> Result<Self, WordListError> {
        Self::with_rng(words, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(words: Vec<String>, rng: ChaCha8Rng) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words, rng })
    }

    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(load_words_from_str(EMBEDDED_START_WORDS))
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl RootWordSource for StartWords {
    fn pick_random_root(&mut self) -> Option<String> {
        self.words.choose(&mut self.rng).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_words_from_str_normalizes() {
        let words = load_words_from_str("Silkworm\n  listen  \n\nTEARDROP\n");
        assert_eq!(words, vec!["silkworm", "listen", "teardrop"]);
    }

    #[test]
    fn test_load_words_from_str_skips_blank_and_invalid_lines() {
        let words = load_words_from_str("\n\nsilk worm\nabc123\ngarden\n");
        assert_eq!(words, vec!["garden"]);
    }

    #[test]
    fn test_load_words_from_file() {
        let path = std::env::temp_dir().join("word_scramble_wordbank_test.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "Notebook").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "captains").unwrap();
        }
        let words = load_words_from_file(&path).unwrap();
        assert_eq!(words, vec!["notebook", "captains"]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_words_from_missing_file() {
        let path = std::env::temp_dir().join("word_scramble_no_such_file.txt");
        assert!(load_words_from_file(path).is_err());
    }

    #[test]
    fn test_embedded_start_words() {
        let start = StartWords::embedded().unwrap();
        assert!(start.words().len() >= 20);
        assert!(start.words().contains(&"silkworm".to_string()));
        assert!(start.words().iter().all(|w| w.len() == 8));
    }

    #[test]
    fn test_empty_list_is_an_error() {
        assert!(matches!(StartWords::new(Vec::new()), Err(WordListError::Empty)));
    }

    #[test]
    fn test_pick_random_root_draws_from_list() {
        let words = vec!["silkworm".to_string(), "listen".to_string()];
        let mut start = StartWords::new(words.clone()).unwrap();
        for _ in 0..20 {
            let root = start.pick_random_root().unwrap();
            assert!(words.contains(&root));
        }
    }

    #[test]
    fn test_seeded_picks_are_reproducible() {
        let words = load_words_from_str(EMBEDDED_START_WORDS);
        let mut first = StartWords::with_seed(words.clone(), 42).unwrap();
        let mut second = StartWords::with_seed(words, 42).unwrap();
        for _ in 0..10 {
            assert_eq!(first.pick_random_root(), second.pick_random_root());
        }
    }
}

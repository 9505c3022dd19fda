use crate::info_log;
use crate::wordbank::{WordListError, load_words_from_file, load_words_from_str};
use std::collections::HashSet;
use std::path::Path;

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");
pub const DEFAULT_LANGUAGE: &str = "en";

/// Answers whether a string is a real word in a given language.
pub trait DictionaryChecker {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool;
}

/// Dictionary backed by a newline-delimited word list for a single language.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: HashSet<String>,
}

impl WordListDictionary {
    pub fn from_words<I, W>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        Self {
            language: language.to_string(),
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Bundled English word list.
    #[must_use]
    pub fn embedded_english() -> Self {
        Self::from_words(DEFAULT_LANGUAGE, load_words_from_str(EMBEDDED_DICTIONARY))
    }

    /// Dictionary for `language`: loaded from `path` when given, otherwise the
    /// bundled list, which only exists for [`DEFAULT_LANGUAGE`].
    pub fn for_language(language: &str, path: Option<&Path>) -> Result<Self, WordListError> {
        match path {
            Some(path) => Self::load(language, path),
            None if language.eq_ignore_ascii_case(DEFAULT_LANGUAGE) => {
                Ok(Self::embedded_english())
            }
            None => Err(WordListError::NoBundledDictionary(language.to_string())),
        }
    }

    pub fn load<P: AsRef<Path>>(language: &str, path: P) -> Result<Self, WordListError> {
        let words = load_words_from_file(path)?;
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        let dictionary = Self::from_words(language, words);
        info_log!(
            "Loaded {} words into '{}' dictionary",
            dictionary.len(),
            dictionary.language
        );
        Ok(dictionary)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryChecker for WordListDictionary {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language) && self.words.contains(&word.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::is_composable;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_embedded_english_dictionary() {
        let dict = WordListDictionary::embedded_english();
        assert_eq!(dict.language(), "en");
        assert!(dict.len() > 500);
        assert!(dict.is_recognized_word("silk", "en"));
        assert!(dict.is_recognized_word("worm", "en"));
        assert!(dict.is_recognized_word("tin", "en"));
        assert!(!dict.is_recognized_word("wolk", "en"));
    }

    #[test]
    fn test_every_start_word_is_in_dictionary() {
        let dict = WordListDictionary::embedded_english();
        for root in load_words_from_str(crate::wordbank::EMBEDDED_START_WORDS) {
            assert!(dict.is_recognized_word(&root, "en"), "missing {root}");
        }
    }

    #[test]
    fn test_common_words_from_each_root_are_recognized() {
        let samples: [(&str, &[&str]); 30] = [
            ("silkworm", &["low", "silk", "worm", "milk", "slim", "risk", "slow"]),
            ("painters", &["ripe", "pest", "strap", "spine", "spite", "paint", "stripe"]),
            ("monsters", &["stern", "storm", "most", "rose", "note"]),
            ("gardener", &["garden", "anger", "range", "green", "dear"]),
            ("strained", &["stain", "trend", "drain", "tried", "strand"]),
            ("teardrop", &["tread", "drop", "rope", "trade", "report"]),
            ("notebook", &["book", "note", "boot", "token", "bent"]),
            ("captains", &["paint", "scant", "panic", "pact", "satin"]),
            ("dolphins", &["hold", "polish", "ship", "lion", "pond"]),
            ("hardware", &["hard", "wear", "draw", "head", "ward"]),
            ("lemonade", &["lemon", "model", "melon", "named", "lead"]),
            ("mountain", &["mount", "main", "unit", "nation", "atom"]),
            ("orchards", &["chord", "hard", "card", "road", "arch"]),
            ("parsnips", &["snip", "spin", "pair", "snap", "spar"]),
            ("reaction", &["action", "actor", "crate", "ocean", "notice"]),
            ("shoulder", &["should", "holder", "house", "older", "hero"]),
            ("sandwich", &["wand", "wash", "dish", "chain", "hand"]),
            ("triangle", &["tangle", "alert", "grain", "giant", "learn"]),
            ("whispers", &["whip", "ship", "wipe", "wish", "press"]),
            ("vineyard", &["vine", "dive", "yard", "ready", "raven"]),
            ("listened", &["listen", "silent", "tinsel", "lend", "tide"]),
            ("creature", &["create", "cure", "truce", "react", "crate"]),
            ("darkness", &["dark", "rank", "snake", "sneak", "desk"]),
            ("elephant", &["plant", "plane", "planet", "help", "leap"]),
            ("flounder", &["flour", "found", "fold", "under", "round"]),
            ("harmonic", &["charm", "chain", "minor", "macho", "iron"]),
            ("lanterns", &["learn", "slant", "rental", "stern", "lens"]),
            ("marigold", &["gold", "road", "grid", "mild", "radio"]),
            ("platinum", &["plant", "unit", "until", "tulip", "lamp"]),
            ("question", &["quest", "quiet", "quote", "suite", "unite"]),
        ];

        let dict = WordListDictionary::embedded_english();
        let roots = load_words_from_str(crate::wordbank::EMBEDDED_START_WORDS);
        assert_eq!(roots.len(), samples.len());
        for (root, words) in samples {
            assert!(roots.iter().any(|r| r == root), "{root} is not a start word");
            for word in words {
                assert!(is_composable(word, root), "{word} cannot be spelled from {root}");
                assert!(dict.is_recognized_word(word, "en"), "{word} not recognized");
            }
        }
    }

    #[test]
    fn test_embedded_dictionary_skips_proper_nouns() {
        let dict = WordListDictionary::embedded_english();
        assert!(!dict.is_recognized_word("aaron", "en"));
        assert!(dict.len() > 50_000);
    }

    #[test]
    fn test_for_language_uses_bundled_english() {
        let dict = WordListDictionary::for_language("EN", None).unwrap();
        assert_eq!(dict.language(), "en");
        assert!(dict.is_recognized_word("pest", "en"));
    }

    #[test]
    fn test_for_language_without_bundled_list_is_error() {
        assert!(matches!(
            WordListDictionary::for_language("de", None),
            Err(WordListError::NoBundledDictionary(lang)) if lang == "de"
        ));
    }

    #[test]
    fn test_for_language_loads_given_file() {
        let path = std::env::temp_dir().join("word_scramble_for_language_test.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "haus").unwrap();
        }
        let dict = WordListDictionary::for_language("de", Some(&path)).unwrap();
        assert!(dict.is_recognized_word("haus", "de"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dict = WordListDictionary::from_words("en", ["Listen", "silent"]);
        assert!(dict.is_recognized_word("LISTEN", "en"));
        assert!(dict.is_recognized_word("Silent", "EN"));
    }

    #[test]
    fn test_other_language_is_not_recognized() {
        let dict = WordListDictionary::from_words("en", ["listen"]);
        assert!(!dict.is_recognized_word("listen", "de"));
    }

    #[test]
    fn test_blank_entries_ignored() {
        let dict = WordListDictionary::from_words("en", ["", "  ", "tin"]);
        assert_eq!(dict.len(), 1);
        assert!(!dict.is_recognized_word("", "en"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("word_scramble_dictionary_test.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "Hund").unwrap();
            writeln!(file, "katze").unwrap();
        }
        let dict = WordListDictionary::load("de", &path).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.is_recognized_word("hund", "de"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_empty_file_is_error() {
        let path = std::env::temp_dir().join("word_scramble_empty_dictionary.txt");
        File::create(&path).unwrap();
        assert!(matches!(
            WordListDictionary::load("en", &path),
            Err(WordListError::Empty)
        ));
        std::fs::remove_file(&path).unwrap();
    }
}

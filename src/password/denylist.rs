// src/password/denylist.rs

use once_cell::sync::Lazy;
use std::{collections::HashSet, fs, path::Path};
use tracing::info;

use super::PolicyError;

/// Word list compiled into the binary, used when no list is configured.
const EMBEDDED_WORDS: &str = include_str!("../../assets/common-passwords.txt");

/// The four words the lab's baseline checks, case-sensitively.
pub const NAIVE_WORDS: [&str; 4] = ["password", "12345678", "qwerty", "letmein"];

static EMBEDDED: Lazy<HashSet<String>> =
    Lazy::new(|| parse_word_list(EMBEDDED_WORDS).map(str::to_lowercase).collect());

/// Passwords that are rejected outright regardless of their character mix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    words: HashSet<String>,
    case_insensitive: bool,
}

impl Denylist {
    /// Build a list from `words`. With `case_insensitive` every entry is stored lower-cased.
    pub fn from_words<I, S>(words: I, case_insensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| {
                if case_insensitive {
                    w.as_ref().to_lowercase()
                } else {
                    w.as_ref().to_string()
                }
            })
            .collect();
        Denylist {
            words,
            case_insensitive,
        }
    }

    pub fn naive() -> Self {
        Denylist::from_words(NAIVE_WORDS, false)
    }

    /// The bundled list of common passwords, matched case-insensitively.
    pub fn embedded() -> Self {
        Denylist {
            words: EMBEDDED.clone(),
            case_insensitive: true,
        }
    }

    /// Entries of the bundled list as written in the file.
    pub fn embedded_words() -> impl Iterator<Item = &'static str> {
        parse_word_list(EMBEDDED_WORDS)
    }

    /// Load a word list file: one password per line, `#` starts a comment line.
    pub fn load<P: AsRef<Path>>(path: P, case_insensitive: bool) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PolicyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Denylist::from_words(parse_word_list(&text), case_insensitive);
        info!(path = %path.display(), words = list.len(), "loaded denylist");
        Ok(list)
    }

    pub fn contains(&self, password: &str) -> bool {
        if self.case_insensitive {
            self.words.contains(&password.to_lowercase())
        } else {
            self.words.contains(password)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }
}

fn parse_word_list(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn naive_list_is_case_sensitive() {
        let list = Denylist::naive();
        assert_eq!(list.len(), 4);
        assert!(list.contains("password"));
        assert!(!list.contains("Password"));
        assert!(!list.is_case_insensitive());
    }

    #[test]
    fn embedded_list_is_larger_and_ignores_case() {
        let list = Denylist::embedded();
        assert!(list.len() > 100);
        for word in NAIVE_WORDS {
            assert!(list.contains(word), "{word} should be denied");
        }
        assert!(list.contains("PASSWORD"));
        assert!(list.contains("Qwerty123"));
        assert!(!list.contains("CorrectHorse1!"));
    }

    #[test]
    fn load_skips_comments_and_blank_lines() -> anyhow::Result<()> {
        let mut tmp = NamedTempFile::new()?;
        writeln!(tmp, "# house list\n\nHunter2\n  trustno1  \n")?;
        let list = Denylist::load(tmp.path(), true)?;
        assert_eq!(list.len(), 2);
        assert!(list.contains("hunter2"));
        assert!(list.contains("TRUSTNO1"));
        Ok(())
    }

    #[test]
    fn load_missing_file_fails() {
        let err = Denylist::load("/definitely/not/here.txt", true).unwrap_err();
        assert!(matches!(err, PolicyError::Io { .. }));
    }
}

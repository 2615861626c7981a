// src/password/policy.rs

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use super::{denylist::Denylist, verdict::Verdict, PolicyError};

/// What counts as a "symbol" for the special-character class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "chars")]
pub enum SymbolClass {
    /// Only the listed characters.
    Listed(String),
    /// Any printable character that is neither alphanumeric nor whitespace.
    Printable,
}

impl SymbolClass {
    pub fn naive() -> Self {
        SymbolClass::Listed("_!@#$".into())
    }

    pub fn matches(&self, c: char) -> bool {
        match self {
            SymbolClass::Listed(chars) => chars.contains(c),
            SymbolClass::Printable => {
                !c.is_alphanumeric() && !c.is_whitespace() && !c.is_control()
            }
        }
    }
}

/// On-disk form of a [`PasswordPolicy`]. Every field is optional in YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    pub trim_input: bool,
    pub min_length: usize,
    pub strong_length: usize,
    pub strong_score: u8,
    pub ok_score: u8,
    pub symbols: SymbolClass,
    /// Word list file; relative paths resolve against the config file's directory.
    /// The embedded list is used when unset.
    pub denylist_path: Option<PathBuf>,
    pub denylist_case_insensitive: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig {
            trim_input: false,
            min_length: 8,
            strong_length: 12,
            strong_score: 3,
            ok_score: 2,
            symbols: SymbolClass::Printable,
            denylist_path: None,
            denylist_case_insensitive: true,
        }
    }
}

impl PolicyConfig {
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PolicyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&text).map_err(|source| PolicyError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Per-class breakdown of one evaluation, mostly for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assessment {
    /// Length in characters of the value actually evaluated.
    pub length: usize,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    pub denylisted: bool,
    pub score: u8,
    pub verdict: Verdict,
}

impl Assessment {
    fn absent() -> Self {
        Assessment {
            length: 0,
            has_upper: false,
            has_lower: false,
            has_digit: false,
            has_symbol: false,
            denylisted: false,
            score: 0,
            verdict: Verdict::Weak,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub trim_input: bool,
    pub min_length: usize,
    pub strong_length: usize,
    pub strong_score: u8,
    pub ok_score: u8,
    pub symbols: SymbolClass,
    pub denylist: Denylist,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        let cfg = PolicyConfig::default();
        PasswordPolicy {
            trim_input: cfg.trim_input,
            min_length: cfg.min_length,
            strong_length: cfg.strong_length,
            strong_score: cfg.strong_score,
            ok_score: cfg.ok_score,
            symbols: cfg.symbols,
            denylist: Denylist::embedded(),
        }
    }
}

impl PasswordPolicy {
    /// The lab's flawed baseline: trims input, four-word case-sensitive list,
    /// symbols limited to `_ ! @ # $`.
    pub fn naive() -> Self {
        PasswordPolicy {
            trim_input: true,
            symbols: SymbolClass::naive(),
            denylist: Denylist::naive(),
            ..PasswordPolicy::default()
        }
    }

    /// Build a policy from `cfg`, resolving a relative `denylist_path` against `base_dir`.
    pub fn from_config(cfg: PolicyConfig, base_dir: &Path) -> Result<Self, PolicyError> {
        let denylist = match &cfg.denylist_path {
            Some(p) => Denylist::load(base_dir.join(p), cfg.denylist_case_insensitive)?,
            None if cfg.denylist_case_insensitive => Denylist::embedded(),
            None => Denylist::from_words(
                Denylist::embedded_words(),
                cfg.denylist_case_insensitive,
            ),
        };
        Ok(PasswordPolicy {
            trim_input: cfg.trim_input,
            min_length: cfg.min_length,
            strong_length: cfg.strong_length,
            strong_score: cfg.strong_score,
            ok_score: cfg.ok_score,
            symbols: cfg.symbols,
            denylist,
        })
    }

    /// Load a YAML policy file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let cfg = PolicyConfig::from_yaml_file(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let policy = PasswordPolicy::from_config(cfg, base_dir)?;
        info!(path = %path.display(), denylist = policy.denylist.len(), "loaded password policy");
        Ok(policy)
    }

    pub fn classify(&self, password: Option<&str>) -> Verdict {
        self.assess(password).verdict
    }

    /// Evaluate `password` without touching it. Only a policy with
    /// `trim_input` looks at a trimmed view of the value.
    pub fn assess(&self, password: Option<&str>) -> Assessment {
        let Some(password) = password else {
            return Assessment::absent();
        };
        let evaluated = if self.trim_input {
            password.trim()
        } else {
            password
        };

        let length = evaluated.chars().count();
        let has_upper = evaluated.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = evaluated.chars().any(|c| c.is_ascii_lowercase());
        let has_digit = evaluated.chars().any(|c| c.is_ascii_digit());
        let has_symbol = evaluated.chars().any(|c| self.symbols.matches(c));
        let denylisted = self.denylist.contains(evaluated);
        let score = [has_upper, has_lower, has_digit, has_symbol]
            .iter()
            .filter(|&&hit| hit)
            .count() as u8;

        let verdict = if length < self.min_length || denylisted {
            Verdict::Weak
        } else if length >= self.strong_length && score >= self.strong_score {
            Verdict::Strong
        } else if score >= self.ok_score {
            Verdict::Ok
        } else {
            Verdict::Weak
        };
        debug!(length, score, denylisted, verdict = verdict.as_str(), "assessed password");

        Assessment {
            length,
            has_upper,
            has_lower,
            has_digit,
            has_symbol,
            denylisted,
            score,
            verdict,
        }
    }
}

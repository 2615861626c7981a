// src/password/mod.rs
pub mod denylist;
pub mod policy;
pub mod verdict;

use std::{io, path::PathBuf};

pub use denylist::Denylist;
pub use policy::{Assessment, PasswordPolicy, PolicyConfig, SymbolClass};
pub use verdict::Verdict;

#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid policy file {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Classify `password` with the default policy.
pub fn classify(password: Option<&str>) -> Verdict {
    PasswordPolicy::default().classify(password)
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Strength label handed back by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Weak,
    Ok,
    Strong,
}

impl Verdict {
    pub fn as_str(&self) -> &str {
        match self {
            Verdict::Weak => "WEAK",
            Verdict::Ok => "OK",
            Verdict::Strong => "STRONG",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weak" => Some(Verdict::Weak),
            "ok" => Some(Verdict::Ok),
            "strong" => Some(Verdict::Strong),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

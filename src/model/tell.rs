use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Tell {
    pub en: String,
    pub ch: String,
}

impl Tell {
    pub fn new(en: impl Into<String>, ch: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ch: ch.into(),
        }
    }
}

/// Top-level `tells.json` document.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct TellBook {
    #[serde(default)]
    pub tells: Vec<Tell>,
}

impl From<Vec<Tell>> for TellBook {
    fn from(tells: Vec<Tell>) -> Self {
        Self { tells }
    }
}

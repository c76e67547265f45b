use serde::{Deserialize, Serialize};

/// Slot count of the trinket dataset the converter was first written for.
pub const DEFAULT_CAPACITY: usize = 189;

/// Largest slot count a table may be built with.
pub const MAX_CAPACITY: usize = 65_536;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Trinket {
    pub id: String,

    pub name: String,

    #[serde(rename = "des")]
    pub description: String,
}

/// Fixed-size `trinkets.json` document. Slot `n - 1` holds the trinket with id `n`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TrinketTable {
    pub trinkets: Vec<Option<Trinket>>,
}

impl TrinketTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            trinkets: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.trinkets.len()
    }

    pub fn filled(&self) -> usize {
        self.trinkets.iter().filter(|t| t.is_some()).count()
    }

    /// 1-based ids of the slots no input line populated.
    pub fn empty_ids(&self) -> Vec<usize> {
        self.trinkets
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_none())
            .map(|(i, _)| i + 1)
            .collect()
    }
}

/// A trinket replaced by a later line with the same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overwritten {
    /// Line of the replacing record.
    pub line: usize,
    pub id: usize,
    pub previous: Trinket,
}

/// What to do when two lines carry the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Later line wins.
    #[default]
    Overwrite,
    Reject,
}

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Output attached to an automaton node: which source sequence the node came
/// from and the nucleotide offset it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Label {
    pub source_id: u32,
    pub position: usize,
}

impl Label {
    pub fn new(source_id: u32, position: usize) -> Self {
        Self {
            source_id,
            position,
        }
    }
}

impl From<(u32, usize)> for Label {
    fn from(value: (u32, usize)) -> Self {
        Label::new(value.0, value.1)
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.source_id, self.position)
    }
}

use thiserror::Error;

use pepscan_core::errors::GeneticCodeError;

use super::config::BuildConfigError;

#[derive(Error, Debug)]
pub enum AutomatonError {
    #[error("Unknown symbol '{symbol}' at position {position}")]
    UnknownSymbol { symbol: char, position: usize },
    #[error("Window size must be at least 1, got {0}")]
    InvalidWindowSize(usize),
    #[error("Window {start}..{start}+{window_size} is past the end of a {len}-residue peptide")]
    WindowOutOfRange {
        start: usize,
        window_size: usize,
        len: usize,
    },
    #[error("Automaton depth {depth} exceeds the maximum of {max_depth}")]
    DepthExceeded { depth: usize, max_depth: usize },
    #[error(transparent)]
    GeneticCode(GeneticCodeError),
    #[error(transparent)]
    Config(#[from] BuildConfigError),
}

impl From<GeneticCodeError> for AutomatonError {
    fn from(value: GeneticCodeError) -> Self {
        match value {
            GeneticCodeError::UnknownSymbol { symbol, position } => {
                AutomatonError::UnknownSymbol { symbol, position }
            }
            other => AutomatonError::GeneticCode(other),
        }
    }
}

pub type AutomatonResult<T> = std::result::Result<T, AutomatonError>;

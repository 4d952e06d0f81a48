use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneticCodeError {
    #[error("Unknown symbol '{symbol}' at position {position}")]
    UnknownSymbol { symbol: char, position: usize },

    #[error("Invalid codon: {0}. Codons must be exactly three of A, C, G, T (or U)")]
    InvalidCodon(String),

    #[error("Invalid amino acid key: {0}. Keys must be a single character")]
    InvalidAminoAcid(String),

    #[error("No codons given for amino acid '{0}'")]
    EmptyCodonSet(char),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type GeneticCodeResult<T> = std::result::Result<T, GeneticCodeError>;

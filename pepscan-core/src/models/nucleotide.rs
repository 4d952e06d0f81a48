use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GeneticCodeError;

/// Sentinel for bytes that are not a nucleotide.
const INVALID: u8 = 0xFF;

/// A lookup table that maps ASCII characters representing DNA bases
/// (and their lowercase counterparts) to the slot index used by automaton
/// nodes. `U` is folded onto `T` so RNA input scans the same way.
const NUCLEOTIDE_ENCODING_ARRAY: [u8; 256] = {
    let mut arr = [INVALID; 256];
    arr[b'A' as usize] = 0;
    arr[b'a' as usize] = 0;
    arr[b'C' as usize] = 1;
    arr[b'c' as usize] = 1;
    arr[b'G' as usize] = 2;
    arr[b'g' as usize] = 2;
    arr[b'T' as usize] = 3;
    arr[b't' as usize] = 3;
    arr[b'U' as usize] = 3;
    arr[b'u' as usize] = 3;
    arr
};

/// One of the four DNA bases.
///
/// The discriminant doubles as the child slot of a [`Node`](super::Node), so
/// children are always visited in `A, C, G, T` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Nucleotide {
    /// All nucleotides in slot order.
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    ///
    /// Decode a single ASCII byte. Case-insensitive, `U` reads as `T`.
    ///
    #[inline]
    pub fn from_byte(byte: u8) -> Option<Self> {
        match NUCLEOTIDE_ENCODING_ARRAY[byte as usize] {
            INVALID => None,
            idx => Some(Self::ALL[idx as usize]),
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn as_byte(self) -> u8 {
        match self {
            Nucleotide::A => b'A',
            Nucleotide::C => b'C',
            Nucleotide::G => b'G',
            Nucleotide::T => b'T',
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        self.as_byte() as char
    }
}

impl Display for Nucleotide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Three nucleotides encoding one amino acid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codon(pub [Nucleotide; 3]);

impl Codon {
    pub fn new(first: Nucleotide, second: Nucleotide, third: Nucleotide) -> Self {
        Codon([first, second, third])
    }

    pub fn symbols(&self) -> &[Nucleotide; 3] {
        &self.0
    }
}

impl FromStr for Codon {
    type Err = GeneticCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 3 {
            return Err(GeneticCodeError::InvalidCodon(s.to_string()));
        }

        let decode = |b: u8| {
            Nucleotide::from_byte(b).ok_or_else(|| GeneticCodeError::InvalidCodon(s.to_string()))
        };

        Ok(Codon([decode(bytes[0])?, decode(bytes[1])?, decode(bytes[2])?]))
    }
}

impl Display for Codon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(b'A', Some(Nucleotide::A))]
    #[case(b'c', Some(Nucleotide::C))]
    #[case(b'G', Some(Nucleotide::G))]
    #[case(b'u', Some(Nucleotide::T))]
    #[case(b'N', None)]
    #[case(b'-', None)]
    fn test_from_byte(#[case] byte: u8, #[case] expected: Option<Nucleotide>) {
        assert_eq!(Nucleotide::from_byte(byte), expected);
    }

    #[rstest]
    fn test_slot_order_matches_all() {
        for (i, n) in Nucleotide::ALL.iter().enumerate() {
            assert_eq!(n.index(), i);
        }
    }

    #[rstest]
    fn test_parse_codon() {
        let codon: Codon = "aug".parse().unwrap();
        assert_eq!(codon.to_string(), "ATG");
    }

    #[rstest]
    #[case("AT")]
    #[case("ATGC")]
    #[case("ANG")]
    fn test_parse_invalid_codon(#[case] input: &str) {
        let result = input.parse::<Codon>();
        assert!(matches!(result, Err(GeneticCodeError::InvalidCodon(_))));
    }
}

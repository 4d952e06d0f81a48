//!
//! The genetic code table: which codons encode each amino acid.
//!
//! The standard table is built once per process from the NCBI translation
//! table 1 string and shared read-only. Custom tables can be assembled from a
//! [`CodonMap`] or parsed from TOML:
//!
//! ```toml
//! [codons]
//! F = ["TTT", "TTC"]
//! L = ["TTA", "TTG"]
//! ```
//!
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::OnceLock;

use fxhash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};

use crate::errors::{GeneticCodeError, GeneticCodeResult};
use crate::models::{Codon, Nucleotide};

/// Amino acids per codon for NCBI translation table 1, in `TCAG` base order.
const NCBI_STANDARD_AAS: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";
const NCBI_BASE_ORDER: [Nucleotide; 4] =
    [Nucleotide::T, Nucleotide::C, Nucleotide::A, Nucleotide::G];

/// Symbol used for stop codons.
pub const STOP_SYMBOL: u8 = b'*';

/// Plain amino acid → codon strings mapping, as written in config files.
pub type CodonMap = BTreeMap<String, Vec<String>>;

static STANDARD: OnceLock<GeneticCodeTable> = OnceLock::new();
static STANDARD_WITH_STOP: OnceLock<GeneticCodeTable> = OnceLock::new();

#[derive(Deserialize, Serialize, Debug, PartialEq)]
struct GeneticCodeFile {
    codons: CodonMap,
}

/// Immutable mapping from amino-acid symbol to its codons.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneticCodeTable {
    entries: HashMap<u8, Vec<Codon>>,
}

impl GeneticCodeTable {
    ///
    /// The standard genetic code: the 20 amino acids, without stop codons.
    ///
    pub fn standard() -> &'static GeneticCodeTable {
        STANDARD.get_or_init(|| Self::from_ncbi(false))
    }

    ///
    /// The standard genetic code including `*` for the three stop codons.
    ///
    pub fn standard_with_stop() -> &'static GeneticCodeTable {
        STANDARD_WITH_STOP.get_or_init(|| Self::from_ncbi(true))
    }

    fn from_ncbi(include_stop: bool) -> Self {
        let mut entries: HashMap<u8, Vec<Codon>> = HashMap::default();
        for (i, &aa) in NCBI_STANDARD_AAS.iter().enumerate() {
            if aa == STOP_SYMBOL && !include_stop {
                continue;
            }
            let codon = Codon::new(
                NCBI_BASE_ORDER[i / 16],
                NCBI_BASE_ORDER[(i / 4) % 4],
                NCBI_BASE_ORDER[i % 4],
            );
            entries.entry(aa).or_default().push(codon);
        }
        GeneticCodeTable { entries }
    }

    ///
    /// Build a table from (amino acid, codons) pairs.
    ///
    /// Amino-acid symbols are stored uppercase. Duplicate codons for one amino
    /// acid are collapsed, keeping first-seen order.
    ///
    pub fn from_entries<I, C, S>(entries: I) -> GeneticCodeResult<Self>
    where
        I: IntoIterator<Item = (char, C)>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table: HashMap<u8, Vec<Codon>> = HashMap::default();
        for (aa, codons) in entries {
            if !aa.is_ascii() {
                return Err(GeneticCodeError::InvalidAminoAcid(aa.to_string()));
            }
            let key = (aa as u8).to_ascii_uppercase();
            let slot = table.entry(key).or_default();
            for codon in codons {
                let codon = Codon::from_str(codon.as_ref())?;
                if !slot.contains(&codon) {
                    slot.push(codon);
                }
            }
            if slot.is_empty() {
                return Err(GeneticCodeError::EmptyCodonSet(key as char));
            }
        }
        Ok(GeneticCodeTable { entries: table })
    }

    ///
    /// Return a copy of this table with the stop codons added under `*`.
    ///
    pub fn with_stop(&self) -> Self {
        let mut table = self.clone();
        let stops = Self::standard_with_stop()
            .codons(STOP_SYMBOL)
            .map(<[Codon]>::to_vec)
            .unwrap_or_default();
        table.entries.insert(STOP_SYMBOL, stops);
        table
    }

    /// Codons for an amino acid, case-insensitive.
    pub fn codons(&self, amino_acid: u8) -> Option<&[Codon]> {
        self.entries
            .get(&amino_acid.to_ascii_uppercase())
            .map(Vec::as_slice)
    }

    ///
    /// Codons for the amino acid found at `position` of a peptide.
    ///
    /// # Returns
    /// - the codons, or [`GeneticCodeError::UnknownSymbol`] if the table has no entry
    ///
    pub fn lookup(&self, amino_acid: u8, position: usize) -> GeneticCodeResult<&[Codon]> {
        self.codons(amino_acid)
            .ok_or(GeneticCodeError::UnknownSymbol {
                symbol: amino_acid as char,
                position,
            })
    }

    pub fn contains(&self, amino_acid: u8) -> bool {
        self.codons(amino_acid).is_some()
    }

    /// Amino-acid symbols in sorted order.
    pub fn amino_acids(&self) -> Vec<char> {
        let mut keys: Vec<char> = self.entries.keys().map(|&k| k as char).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<&CodonMap> for GeneticCodeTable {
    type Error = GeneticCodeError;

    fn try_from(value: &CodonMap) -> Result<Self, Self::Error> {
        let mut entries = Vec::with_capacity(value.len());
        for (key, codons) in value {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(aa), None) => entries.push((aa, codons)),
                _ => return Err(GeneticCodeError::InvalidAminoAcid(key.clone())),
            }
        }
        GeneticCodeTable::from_entries(entries)
    }
}

impl FromStr for GeneticCodeTable {
    type Err = GeneticCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let file: GeneticCodeFile = toml::from_str(s)?;
        GeneticCodeTable::try_from(&file.codons)
    }
}

use std::borrow::Cow;
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pepscan_core::errors::GeneticCodeResult;
use pepscan_core::genetic_code::{CodonMap, GeneticCodeTable};

use super::failure::{BruteForceLinker, StandardLinker};
use super::traits::FailureLinker;

/// Amino acids per pattern when nothing else is configured.
pub const DEFAULT_WINDOW_SIZE: usize = 4;

#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailureLinkerType {
    /// One breadth-first pass reusing the links of shallower nodes.
    #[default]
    Standard,
    /// Re-walk every proper suffix from the root.
    BruteForce,
}

impl FailureLinkerType {
    pub fn linker(&self) -> Box<dyn FailureLinker> {
        match self {
            FailureLinkerType::Standard => Box::new(StandardLinker),
            FailureLinkerType::BruteForce => Box::new(BruteForceLinker),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct BuildConfig {
    /// Amino acids per window.
    pub window_size: usize,
    /// Clear the labels of every node that still has children after truncation.
    pub keep_only_terminal: bool,
    /// Also index each window entered one and two nucleotides past its first codon boundary.
    pub include_phase_shifts: bool,
    /// Build window shards on the rayon pool and reduce them pairwise.
    pub parallel: bool,
    pub failure_links: FailureLinkerType,
    /// Add `*` for the stop codons to the genetic code.
    pub include_stop: bool,
    /// Inline genetic code replacing the standard table.
    pub genetic_code: Option<CodonMap>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            window_size: DEFAULT_WINDOW_SIZE,
            keep_only_terminal: true,
            include_phase_shifts: true,
            parallel: false,
            failure_links: FailureLinkerType::default(),
            include_stop: false,
            genetic_code: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum BuildConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type BuildConfigResult<T> = std::result::Result<T, BuildConfigError>;

impl BuildConfig {
    pub fn new(window_size: usize) -> Self {
        BuildConfig {
            window_size,
            ..Default::default()
        }
    }

    /// Longest path kept after compaction: one full window of codons.
    pub fn max_depth(&self) -> usize {
        self.window_size * 3
    }

    ///
    /// Resolve the genetic code this config asks for. The standard tables are
    /// borrowed, inline tables are parsed on every call.
    ///
    pub fn genetic_code_table(&self) -> GeneticCodeResult<Cow<'static, GeneticCodeTable>> {
        let table = match (&self.genetic_code, self.include_stop) {
            (Some(codons), false) => Cow::Owned(GeneticCodeTable::try_from(codons)?),
            (Some(codons), true) => Cow::Owned(GeneticCodeTable::try_from(codons)?.with_stop()),
            (None, false) => Cow::Borrowed(GeneticCodeTable::standard()),
            (None, true) => Cow::Borrowed(GeneticCodeTable::standard_with_stop()),
        };
        Ok(table)
    }
}

impl FromStr for BuildConfig {
    type Err = BuildConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

impl TryFrom<&Path> for BuildConfig {
    type Error = BuildConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml_str.parse::<BuildConfig>()?;
        Ok(config)
    }
}

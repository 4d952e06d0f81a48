//! Back-translation automata for finding every DNA encoding of a peptide in
//! one linear scan of a genomic sequence.
//!
//! This crate is part of the pepscan workspace; the data model lives in
//! `pepscan-core`. Because the genetic code is degenerate, a window of `k`
//! amino acids has many literal DNA encodings. They are all inserted into one
//! trie, merged across windows, bounded to one window of depth, and linked
//! with Aho-Corasick fail links so a scan never backtracks.
//!
//! ## Pipeline
//!
//! - [`codon_trie`]: one 3-level trie per amino acid, chained into window tries
//! - [`merge`]: structural union of tries
//! - [`window`]: slides the window over the peptide and folds every window in,
//!   at codon phase and at nucleotide phases +1 and +2
//! - [`compact`]: depth bound and leaf-only labels
//! - [`failure`]: fail links, see [`FailureLinker`]
//! - [`iter`] and [`scan`]: enumerate the automaton or scan DNA with it
//!
//! [`AutomatonBuilder`] drives these steps from a [`BuildConfig`];
//! [`build_automaton`] is the one-shot entry point.
//!
//! ## Quick Start
//!
//! ```rust
//! use pepscan_automaton::{Scanner, build_automaton};
//!
//! // every encoding of Met-Trp-Met
//! let automaton = build_automaton("MWM", 0, 3).unwrap();
//!
//! let matches = Scanner::new(&automaton).scan(b"CCATGTGGATGCC").unwrap();
//! let full: Vec<_> = matches.iter().filter(|m| m.len == 9).collect();
//! assert_eq!(full.len(), 1);
//! assert_eq!(full[0].start(), 2);
//! ```
//!
//! ## Enumerating patterns
//!
//! ```rust
//! use pepscan_automaton::{AutomatonIterator, build_automaton};
//!
//! let automaton = build_automaton("KW", 7, 2).unwrap();
//! let patterns: Vec<String> = AutomatonIterator::new(&automaton)
//!     .filter(|(path, _)| path.len() == 6)
//!     .map(|(path, _)| path)
//!     .collect();
//! assert_eq!(patterns, vec!["AAATGG", "AAGTGG"]);
//! ```

/// Per-amino-acid tries and chaining.
pub mod codon_trie;

/// Structural trie union.
pub mod merge;

/// Sliding-window construction.
///
/// See [`WindowAutomatonBuilder`] for details.
pub mod window;

/// Depth bounding.
pub mod compact;

/// Fail-link strategies.
pub mod failure;

/// Lazy enumeration of labeled strings.
pub mod iter;

/// Aho-Corasick scanning.
pub mod scan;

/// Build context and one-shot entry point.
pub mod builder;

pub mod config;
pub mod error;
pub mod traits;

// re-exports
pub use self::builder::{AutomatonBuilder, build_automaton};
pub use self::codon_trie::CodonTrieBuilder;
pub use self::config::{BuildConfig, FailureLinkerType};
pub use self::error::{AutomatonError, AutomatonResult};
pub use self::failure::{BruteForceLinker, StandardLinker};
pub use self::iter::AutomatonIterator;
pub use self::scan::{Match, Scanner};
pub use self::traits::FailureLinker;
pub use self::window::WindowAutomatonBuilder;

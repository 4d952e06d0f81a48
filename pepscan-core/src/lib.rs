//! # pepscan-core
//!
//! Shared models for back-translating peptides into searchable nucleotide
//! automata. The algorithms that build and scan automata live in
//! `pepscan-automaton`; this crate only holds the data they operate on:
//!
//! - [`models::Nucleotide`] and [`models::Codon`]
//! - [`models::Label`], the output attached to automaton nodes
//! - [`models::Automaton`], an arena of [`models::Node`]s addressed by [`models::NodeId`]
//! - [`genetic_code::GeneticCodeTable`], amino acid → codons
//!
//! ## Example
//!
//! ```rust
//! use pepscan_core::genetic_code::GeneticCodeTable;
//!
//! let table = GeneticCodeTable::standard();
//! let codons = table.codons(b'W').unwrap();
//! assert_eq!(codons[0].to_string(), "TGG");
//! ```
//!
pub mod errors;
pub mod genetic_code;
pub mod models;
pub mod utils;

pub use errors::*;
pub use genetic_code::GeneticCodeTable;

//! Find every DNA encoding of a peptide in a genomic sequence.
//!
//! This crate re-exports the pepscan workspace crates behind features:
//!
//! - `core`: nucleotides, codons, genetic code tables and the automaton arena
//! - `automaton`: building, linking and scanning back-translation automata
//!
//! Both are enabled by default.

#[cfg(feature = "core")]
#[doc(inline)]
pub use pepscan_core as core;

#[cfg(feature = "automaton")]
#[doc(inline)]
pub use pepscan_automaton as automaton;

//!
//! Sliding-window construction of the global automaton.
//!
//! Every window of `window_size` amino acids is back-translated into a trie
//! of all its DNA encodings and folded into one automaton. Terminal nodes of
//! a window carry `(source_id, window_start * 3)`, including the terminals of
//! the copies entered one and two bases past the first codon boundary.
//!
use std::borrow::Cow;

use rayon::prelude::*;

use pepscan_core::genetic_code::GeneticCodeTable;
use pepscan_core::models::{Automaton, Label, NodeId};
use pepscan_core::utils::symbol_at;

use super::codon_trie::{CodonTrieBuilder, chain, chain_all};
use super::compact::compact;
use super::error::{AutomatonError, AutomatonResult};
use super::merge::{merge, merge_into_root};

pub struct WindowAutomatonBuilder<'a> {
    table: &'a GeneticCodeTable,
    window_size: usize,
    include_phase_shifts: bool,
}

impl<'a> WindowAutomatonBuilder<'a> {
    pub fn new(table: &'a GeneticCodeTable, window_size: usize) -> AutomatonResult<Self> {
        if window_size == 0 {
            return Err(AutomatonError::InvalidWindowSize(window_size));
        }
        Ok(Self {
            table,
            window_size,
            include_phase_shifts: true,
        })
    }

    pub fn with_phase_shifts(mut self, include_phase_shifts: bool) -> Self {
        self.include_phase_shifts = include_phase_shifts;
        self
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Number of windows a peptide of `len` residues yields.
    pub fn window_count(&self, len: usize) -> usize {
        if len < self.window_size {
            0
        } else {
            len - self.window_size + 1
        }
    }

    ///
    /// Check every residue against the table before anything is built.
    ///
    /// Non-ASCII residues are reported as the character written, at its
    /// residue index.
    ///
    pub fn validate(&self, peptide: &[u8]) -> AutomatonResult<()> {
        for (position, &amino_acid) in peptide.iter().enumerate() {
            if !amino_acid.is_ascii() {
                return Err(AutomatonError::UnknownSymbol {
                    symbol: symbol_at(peptide, position),
                    position,
                });
            }
            self.table.lookup(amino_acid, position)?;
        }
        Ok(())
    }

    /// The chained codon tries of one window, with their codon labels.
    fn chained_window(
        &self,
        peptide: &[u8],
        start: usize,
        source_id: u32,
    ) -> AutomatonResult<Automaton> {
        let end = start + self.window_size;
        if end > peptide.len() {
            return Err(AutomatonError::WindowOutOfRange {
                start,
                window_size: self.window_size,
                len: peptide.len(),
            });
        }

        let codon_builder = CodonTrieBuilder::new(self.table, source_id);
        let tries = peptide[start..end]
            .iter()
            .enumerate()
            .map(|(i, &amino_acid)| codon_builder.build(amino_acid, (start + i) * 3))
            .collect::<AutomatonResult<Vec<Automaton>>>()?;

        Ok(chain_all(tries).unwrap_or_default())
    }

    ///
    /// Build the trie of one window.
    ///
    /// # Arguments
    /// - peptide: the full peptide
    /// - start: index of the first residue of the window
    /// - source_id: id stamped on every label
    ///
    /// # Returns
    /// - a trie of depth `3 * window_size` whose leaves are terminal and carry
    ///   `(source_id, start * 3)`
    ///
    pub fn build_window(
        &self,
        peptide: &[u8],
        start: usize,
        source_id: u32,
    ) -> AutomatonResult<Automaton> {
        let mut window = self.chained_window(peptide, start, source_id)?;
        mark_terminal(&mut window, Label::new(source_id, start * 3));
        Ok(window)
    }

    ///
    /// Fold the window starting at residue `start` into `target`, at codon
    /// phase and, when enabled, at nucleotide phases +1 and +2.
    ///
    /// A window entered `phase` bases late is extended with the first `phase`
    /// bases of the next residue's codons, so every accepting path is exactly
    /// one window long. The last window of a peptide has no next residue:
    /// its shifted paths end early and stay accepting through their terminal
    /// flag even where a longer pattern continues past them.
    ///
    pub fn fold_window(
        &self,
        target: &mut Automaton,
        peptide: &[u8],
        start: usize,
        source_id: u32,
    ) -> AutomatonResult<()> {
        let chained = self.chained_window(peptide, start, source_id)?;
        let terminal = Label::new(source_id, start * 3);

        let mut window = chained.clone();
        mark_terminal(&mut window, terminal);
        merge_into_root(target, &window);

        if !self.include_phase_shifts {
            return Ok(());
        }

        let next = start + self.window_size;
        let lookahead = match peptide.get(next) {
            Some(&amino_acid) => Some(
                CodonTrieBuilder::new(self.table, source_id).build(amino_acid, next * 3)?,
            ),
            None => None,
        };

        for phase in 1..=2 {
            let shifted = match &lookahead {
                Some(lookahead) => {
                    let mut head = lookahead.clone();
                    compact(&mut head, phase, false);
                    let mut extended = chained.clone();
                    chain(&mut extended, &head);
                    mark_terminal(&mut extended, terminal);
                    Cow::Owned(extended)
                }
                None => Cow::Borrowed(&window),
            };

            for entry in nodes_at_depth(&shifted, phase) {
                merge(target, NodeId::ROOT, &shifted, entry);
            }
        }

        Ok(())
    }

    ///
    /// Fold every window of `peptide` into `target`, one after the other.
    ///
    /// The peptide is validated first, so an unknown residue leaves `target`
    /// untouched.
    ///
    /// # Returns
    /// - the number of windows folded in
    ///
    pub fn extend(
        &self,
        target: &mut Automaton,
        peptide: &[u8],
        source_id: u32,
    ) -> AutomatonResult<usize> {
        self.validate(peptide)?;

        let count = self.window_count(peptide.len());
        for start in 0..count {
            self.fold_window(target, peptide, start, source_id)?;
        }

        Ok(count)
    }

    ///
    /// Build the automaton of every window of `peptide`.
    ///
    pub fn build(&self, peptide: &[u8], source_id: u32) -> AutomatonResult<Automaton> {
        let mut automaton = Automaton::new();
        self.extend(&mut automaton, peptide, source_id)?;
        Ok(automaton)
    }

    ///
    /// Build the automaton of every window of `peptide` on the rayon pool.
    ///
    /// Windows are split into contiguous shards, each shard is folded into
    /// its own partial automaton, and the partials are merged pairwise. The
    /// result holds the same strings and labels as [`Self::build`].
    ///
    pub fn build_parallel(&self, peptide: &[u8], source_id: u32) -> AutomatonResult<Automaton> {
        self.validate(peptide)?;

        let count = self.window_count(peptide.len());
        if count == 0 {
            return Ok(Automaton::new());
        }

        let starts: Vec<usize> = (0..count).collect();
        let shard_size = count.div_ceil(rayon::current_num_threads()).max(1);

        starts
            .par_chunks(shard_size)
            .map(|shard| -> AutomatonResult<Automaton> {
                let mut partial = Automaton::new();
                for &start in shard {
                    self.fold_window(&mut partial, peptide, start, source_id)?;
                }
                Ok(partial)
            })
            .try_reduce(Automaton::new, |mut left, right| {
                merge_into_root(&mut left, &right);
                Ok(left)
            })
    }
}

/// Replace the labels of every leaf with `label` and mark it terminal.
fn mark_terminal(automaton: &mut Automaton, label: Label) {
    let root = automaton.root();
    for leaf in automaton.leaves(root) {
        let node = automaton.node_mut(leaf);
        node.labels = vec![label];
        node.terminal = true;
    }
}

fn nodes_at_depth(automaton: &Automaton, depth: usize) -> Vec<NodeId> {
    let mut level = vec![automaton.root()];
    for _ in 0..depth {
        level = level
            .iter()
            .flat_map(move |&id| automaton.node(id).children().map(|(_, child)| child))
            .collect();
    }
    level
}

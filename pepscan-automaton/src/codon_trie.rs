//!
//! Per-amino-acid codon tries and the chaining that turns them into
//! peptide-window tries.
//!
use pepscan_core::genetic_code::GeneticCodeTable;
use pepscan_core::models::{Automaton, Label};

use super::error::AutomatonResult;

/// Builds the 3-level trie of every codon of one amino acid.
#[derive(Debug, Clone, Copy)]
pub struct CodonTrieBuilder<'a> {
    table: &'a GeneticCodeTable,
    source_id: u32,
}

impl<'a> CodonTrieBuilder<'a> {
    pub fn new(table: &'a GeneticCodeTable, source_id: u32) -> Self {
        Self { table, source_id }
    }

    ///
    /// Build the codon trie for `amino_acid`.
    ///
    /// Every node on a codon path is labeled with `offset + depth_within_codon`
    /// (0, 1, 2), so partial-codon progress is visible on internal nodes.
    ///
    /// # Arguments
    /// - amino_acid: single-letter amino-acid code, case-insensitive
    /// - offset: nucleotide offset of the codon's first base
    ///
    /// # Returns
    /// - the trie, or `UnknownSymbol` reported at amino-acid index `offset / 3`
    ///
    pub fn build(&self, amino_acid: u8, offset: usize) -> AutomatonResult<Automaton> {
        let codons = self.table.lookup(amino_acid, offset / 3)?;

        let mut trie = Automaton::new();
        for codon in codons {
            let mut current = trie.root();
            for (depth, &symbol) in codon.symbols().iter().enumerate() {
                current = trie.get_or_insert_child(current, symbol);
                let label = Label::new(self.source_id, offset + depth);
                let labels = &mut trie.node_mut(current).labels;
                if !labels.contains(&label) {
                    labels.push(label);
                }
            }
        }

        Ok(trie)
    }
}

///
/// Graft an independent copy of `second`'s root mapping onto every leaf of
/// `first`.
///
/// Afterwards the paths of `first` are exactly the concatenations of its old
/// paths with the paths of `second`.
///
pub fn chain(first: &mut Automaton, second: &Automaton) {
    let root = first.root();
    for leaf in first.leaves(root) {
        first.copy_children(leaf, second, second.root());
    }
}

///
/// Chain a sequence of tries right to left into one.
///
/// # Returns
/// - the combined trie, or `None` if `tries` is empty
///
pub fn chain_all(tries: Vec<Automaton>) -> Option<Automaton> {
    tries.into_iter().rev().reduce(|tail, mut head| {
        chain(&mut head, &tail);
        head
    })
}

//!
//! Single-pass Aho-Corasick scanning of nucleotide text.
//!
use pepscan_core::models::{Automaton, Label, NodeId, Nucleotide};
use pepscan_core::utils::symbol_at;

use super::error::{AutomatonError, AutomatonResult};

/// One accepting state reached while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a> {
    /// Exclusive end of the match in the scanned text.
    pub end: usize,
    /// Length of the matched string (depth of the accepting node).
    pub len: usize,
    pub labels: &'a [Label],
}

impl Match<'_> {
    pub fn start(&self) -> usize {
        self.end - self.len
    }
}

/// Scans text against an automaton whose fail links have been built.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    automaton: &'a Automaton,
    skip_unknown: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Scanner {
            automaton,
            skip_unknown: false,
        }
    }

    /// Treat bytes that are not nucleotides (e.g. `N`) as a reset to the root
    /// instead of an error.
    pub fn with_skip_unknown(mut self, skip_unknown: bool) -> Self {
        self.skip_unknown = skip_unknown;
        self
    }

    ///
    /// Advance from `state` on `symbol`, following fail links on missing
    /// transitions.
    ///
    #[inline]
    pub fn step(&self, state: NodeId, symbol: Nucleotide) -> NodeId {
        let mut current = state;
        loop {
            if let Some(next) = self.automaton.node(current).child(symbol) {
                return next;
            }
            if current.is_root() {
                return NodeId::ROOT;
            }
            current = self.automaton.fail(current);
        }
    }

    ///
    /// Lazily report every match in `text`. Each position yields the current
    /// state and every labeled state on its fail chain, longest first.
    ///
    pub fn scan_iter<'t>(&self, text: &'t [u8]) -> ScanIter<'a, 't> {
        ScanIter {
            scanner: *self,
            text,
            pos: 0,
            state: NodeId::ROOT,
            pending: None,
            done: false,
        }
    }

    ///
    /// Collect every match in `text`.
    ///
    /// # Returns
    /// - the matches in text order, or `UnknownSymbol` for the first byte that
    ///   is not a nucleotide (unless unknown symbols are skipped)
    ///
    pub fn scan(&self, text: &[u8]) -> AutomatonResult<Vec<Match<'a>>> {
        self.scan_iter(text).collect()
    }
}

/// Iterator returned by [`Scanner::scan_iter`].
#[derive(Debug, Clone)]
pub struct ScanIter<'a, 't> {
    scanner: Scanner<'a>,
    text: &'t [u8],
    pos: usize,
    state: NodeId,
    pending: Option<NodeId>,
    done: bool,
}

impl<'a> Iterator for ScanIter<'a, '_> {
    type Item = AutomatonResult<Match<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let automaton = self.scanner.automaton;

        loop {
            while let Some(id) = self.pending {
                let fail = automaton.fail(id);
                self.pending = (!fail.is_root()).then_some(fail);

                let node = automaton.node(id);
                if !node.labels.is_empty() {
                    return Some(Ok(Match {
                        end: self.pos,
                        len: node.depth(),
                        labels: &node.labels,
                    }));
                }
            }

            if self.done || self.pos >= self.text.len() {
                return None;
            }

            let byte = self.text[self.pos];
            match Nucleotide::from_byte(byte) {
                Some(symbol) => {
                    self.state = self.scanner.step(self.state, symbol);
                    self.pos += 1;
                    self.pending = (!self.state.is_root()).then_some(self.state);
                }
                None if self.scanner.skip_unknown => {
                    self.state = NodeId::ROOT;
                    self.pos += 1;
                }
                None => {
                    self.done = true;
                    return Some(Err(AutomatonError::UnknownSymbol {
                        symbol: symbol_at(self.text, self.pos),
                        position: self.pos,
                    }));
                }
            }
        }
    }
}

use std::collections::VecDeque;

use pepscan_core::models::{Automaton, Label, NodeId, Nucleotide};
use pepscan_core::utils::nucleotides_to_string;

///
/// Lazy breadth-first enumeration of every labeled node as
/// `(path, labels)`.
///
/// The root is never yielded. Children are visited in `A, C, G, T` order, so
/// shorter strings come first and equal-length strings come out sorted.
/// Cloning the iterator, or creating a new one, restarts the walk.
///
#[derive(Debug, Clone)]
pub struct AutomatonIterator<'a> {
    automaton: &'a Automaton,
    queue: VecDeque<(NodeId, Vec<Nucleotide>)>,
}

impl<'a> AutomatonIterator<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        AutomatonIterator {
            automaton,
            queue: VecDeque::from([(automaton.root(), Vec::new())]),
        }
    }
}

impl<'a> Iterator for AutomatonIterator<'a> {
    type Item = (String, &'a [Label]);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, path)) = self.queue.pop_front() {
            let node = self.automaton.node(id);
            for (symbol, child) in node.children() {
                let mut child_path = path.clone();
                child_path.push(symbol);
                self.queue.push_back((child, child_path));
            }

            if !id.is_root() && !node.labels.is_empty() {
                return Some((nucleotides_to_string(&path), node.labels.as_slice()));
            }
        }
        None
    }
}

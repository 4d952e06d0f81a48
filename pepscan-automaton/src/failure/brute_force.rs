use std::collections::VecDeque;

use pepscan_core::models::{Automaton, NodeId, Nucleotide};

use crate::traits::FailureLinker;

/// Suffix-search fail-link construction.
///
/// For a node reached by path `P`, drop the first symbol of `P` and re-walk
/// from the root until a suffix walks all the way through. O(depth²) per node.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceLinker;

impl FailureLinker for BruteForceLinker {
    fn link(&self, automaton: &mut Automaton) {
        automaton.clear_fail_links();

        let mut queue: VecDeque<(Vec<Nucleotide>, NodeId)> = automaton
            .node(NodeId::ROOT)
            .children()
            .map(|(symbol, child)| (vec![symbol], child))
            .collect();

        while let Some((path, id)) = queue.pop_front() {
            let fail =
                (1..path.len()).find_map(|start| automaton.walk(NodeId::ROOT, &path[start..]));
            automaton.node_mut(id).fail = fail;

            for (symbol, child) in automaton.node(id).children() {
                let mut child_path = path.clone();
                child_path.push(symbol);
                queue.push_back((child_path, child));
            }
        }
    }
}

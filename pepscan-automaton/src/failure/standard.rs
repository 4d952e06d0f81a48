use std::collections::VecDeque;

use pepscan_core::models::{Automaton, NodeId, Nucleotide};

use crate::traits::FailureLinker;

/// Breadth-first fail-link construction.
///
/// The link of a child reached by `symbol` is found by following the parent's
/// link chain until some node has a `symbol` transition. Depth-one nodes link
/// to the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardLinker;

impl FailureLinker for StandardLinker {
    fn link(&self, automaton: &mut Automaton) {
        automaton.clear_fail_links();

        let mut queue: VecDeque<NodeId> = automaton
            .node(NodeId::ROOT)
            .children()
            .map(|(_, child)| child)
            .collect();

        while let Some(id) = queue.pop_front() {
            let children: Vec<(Nucleotide, NodeId)> = automaton.node(id).children().collect();
            for (symbol, child) in children {
                let mut fallback = automaton.node(id).fail;
                let target = loop {
                    match fallback {
                        Some(candidate) => match automaton.node(candidate).child(symbol) {
                            Some(next) => break Some(next),
                            None => fallback = automaton.node(candidate).fail,
                        },
                        None => break automaton.node(NodeId::ROOT).child(symbol),
                    }
                };

                automaton.node_mut(child).fail = target;
                queue.push_back(child);
            }
        }
    }
}

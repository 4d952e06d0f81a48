use std::collections::VecDeque;

use pepscan_core::models::{Automaton, NodeId};

///
/// Bound the depth of `automaton` and optionally keep labels on leaves only.
///
/// Nodes at `max_depth` lose their children. With `keep_only_terminal`, every
/// node that still has children afterwards loses its labels unless it is
/// marked terminal, so only leaves and pattern ends remain accepting states.
///
pub fn compact(automaton: &mut Automaton, max_depth: usize, keep_only_terminal: bool) {
    let mut queue = VecDeque::from([NodeId::ROOT]);

    while let Some(id) = queue.pop_front() {
        let node = automaton.node_mut(id);
        if node.depth() >= max_depth {
            node.clear_children();
        }
        if keep_only_terminal && node.has_children() && !node.terminal {
            node.labels.clear();
        }
        queue.extend(node.children().map(|(_, child)| child));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use pepscan_core::models::{Label, Nucleotide};

    use crate::iter::AutomatonIterator;

    #[fixture]
    fn labeled_chain() -> Automaton {
        // every node of ACGTA and ACC labeled with its depth
        let mut automaton = Automaton::new();
        for pattern in ["ACGTA", "ACC"] {
            let mut current = automaton.root();
            for byte in pattern.bytes() {
                let symbol = Nucleotide::from_byte(byte).unwrap();
                current = automaton.get_or_insert_child(current, symbol);
                let depth = automaton.node(current).depth();
                automaton.node_mut(current).labels.push(Label::new(0, depth));
            }
        }
        automaton
    }

    #[rstest]
    fn test_truncates_at_max_depth(mut labeled_chain: Automaton) {
        compact(&mut labeled_chain, 3, false);

        assert_eq!(labeled_chain.max_depth(), 3);
        assert_eq!(labeled_chain.walk_str("ACGT"), None);
        // labels untouched without keep_only_terminal
        let ac = labeled_chain.walk_str("AC").unwrap();
        assert_eq!(labeled_chain.node(ac).labels.is_empty(), false);
    }

    #[rstest]
    fn test_keep_only_terminal(mut labeled_chain: Automaton) {
        compact(&mut labeled_chain, 3, true);

        for id in labeled_chain.breadth_first() {
            let node = labeled_chain.node(id);
            if node.has_children() {
                assert_eq!(node.labels.is_empty(), true);
            }
        }

        let mut accepting: Vec<String> = AutomatonIterator::new(&labeled_chain)
            .map(|(path, _)| path)
            .collect();
        accepting.sort();
        // ACG was truncated into a leaf and keeps its label
        assert_eq!(accepting, vec!["ACC", "ACG"]);
    }

    #[rstest]
    fn test_terminal_nodes_keep_labels(mut labeled_chain: Automaton) {
        let ac = labeled_chain.walk_str("AC").unwrap();
        labeled_chain.node_mut(ac).terminal = true;

        compact(&mut labeled_chain, 3, true);

        assert_eq!(labeled_chain.node(ac).has_children(), true);
        assert_eq!(labeled_chain.node(ac).labels, vec![Label::new(0, 2)]);
        let a = labeled_chain.walk_str("A").unwrap();
        assert_eq!(labeled_chain.node(a).labels.is_empty(), true);
    }

    #[rstest]
    fn test_depth_beyond_tree_is_noop(labeled_chain: Automaton) {
        let mut compacted = labeled_chain.clone();
        compact(&mut compacted, 10, false);
        assert_eq!(compacted, labeled_chain);
    }
}

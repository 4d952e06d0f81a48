//!
//! Structural union of tries: the goto-function step of multi-pattern
//! automaton construction.
//!
use pepscan_core::models::{Automaton, NodeId};

///
/// Merge the children of `source_node` (in `source`) into the children of
/// `target_node` (in `target`).
///
/// A symbol missing from the target gets a deep copy of the whole source
/// subtree. A symbol present in both gets the source labels appended
/// (duplicates kept), becomes terminal if the source node is, and the merge
/// recurses into it. Either node may be a root or any inner node; `source` is
/// never modified.
///
pub fn merge(target: &mut Automaton, target_node: NodeId, source: &Automaton, source_node: NodeId) {
    let mut stack = vec![(target_node, source_node)];

    while let Some((dst, src)) = stack.pop() {
        for (symbol, src_child) in source.node(src).children() {
            match target.node(dst).child(symbol) {
                None => {
                    target.copy_subtree(dst, symbol, source, src_child);
                }
                Some(dst_child) => {
                    let src_node = source.node(src_child);
                    let dst_node = target.node_mut(dst_child);
                    dst_node.labels.extend_from_slice(&src_node.labels);
                    dst_node.terminal |= src_node.terminal;
                    stack.push((dst_child, src_child));
                }
            }
        }
    }
}

/// Merge the whole of `source` into `target`, root to root.
pub fn merge_into_root(target: &mut Automaton, source: &Automaton) {
    merge(target, NodeId::ROOT, source, NodeId::ROOT);
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use pepscan_core::models::{Label, Nucleotide};

    use crate::iter::AutomatonIterator;

    fn from_patterns(patterns: &[(&str, Label)]) -> Automaton {
        let mut automaton = Automaton::new();
        for (pattern, label) in patterns {
            let mut current = automaton.root();
            for byte in pattern.bytes() {
                let symbol = Nucleotide::from_byte(byte).unwrap();
                current = automaton.get_or_insert_child(current, symbol);
            }
            automaton.node_mut(current).labels.push(*label);
        }
        automaton
    }

    fn strings(automaton: &Automaton) -> Vec<String> {
        let mut all: Vec<String> = AutomatonIterator::new(automaton).map(|(s, _)| s).collect();
        all.sort();
        all
    }

    #[fixture]
    fn left() -> Automaton {
        from_patterns(&[("ACG", Label::new(1, 0)), ("AT", Label::new(1, 3))])
    }

    #[fixture]
    fn right() -> Automaton {
        from_patterns(&[
            ("ACT", Label::new(2, 0)),
            ("AT", Label::new(2, 6)),
            ("G", Label::new(2, 9)),
        ])
    }

    #[rstest]
    fn test_merge_unions_paths(mut left: Automaton, right: Automaton) {
        merge_into_root(&mut left, &right);

        assert_eq!(strings(&left), vec!["ACG", "ACT", "AT", "G"]);
        let at = left.walk_str("AT").unwrap();
        assert_eq!(left.node(at).labels, vec![Label::new(1, 3), Label::new(2, 6)]);
    }

    #[rstest]
    fn test_merge_is_idempotent_on_paths(mut left: Automaton, right: Automaton) {
        merge_into_root(&mut left, &right);
        let once = strings(&left);
        let nodes_once = left.node_count();

        merge_into_root(&mut left, &right);
        assert_eq!(strings(&left), once);
        assert_eq!(left.node_count(), nodes_once);

        // only label multiplicity changes
        let g = left.walk_str("G").unwrap();
        assert_eq!(left.node(g).labels, vec![Label::new(2, 9), Label::new(2, 9)]);
    }

    #[rstest]
    fn test_merge_order_does_not_change_paths(left: Automaton, right: Automaton) {
        let mut lr = left.clone();
        merge_into_root(&mut lr, &right);
        let mut rl = right.clone();
        merge_into_root(&mut rl, &left);

        assert_eq!(strings(&lr), strings(&rl));
        assert_eq!(lr.node_count(), rl.node_count());
    }

    #[rstest]
    fn test_merge_subtrie_into_root(left: Automaton) {
        // merging the children of "A" shifts every path one symbol
        let mut target = Automaton::new();
        let a = left.walk_str("A").unwrap();
        merge(&mut target, NodeId::ROOT, &left, a);

        assert_eq!(strings(&target), vec!["CG", "T"]);
        let cg = target.walk_str("CG").unwrap();
        assert_eq!(target.node(cg).depth(), 2);
    }

    #[rstest]
    fn test_merge_carries_terminal_flag(mut left: Automaton) {
        let mut source = from_patterns(&[("AC", Label::new(3, 0))]);
        let ac = source.walk_str("AC").unwrap();
        source.node_mut(ac).terminal = true;

        merge_into_root(&mut left, &source);

        let merged = left.walk_str("AC").unwrap();
        assert_eq!(left.node(merged).terminal, true);
        assert_eq!(left.node(merged).has_children(), true);
        let a = left.walk_str("A").unwrap();
        assert_eq!(left.node(a).terminal, false);
    }

    #[rstest]
    fn test_merge_leaves_source_untouched(mut left: Automaton, right: Automaton) {
        let before = right.clone();
        merge_into_root(&mut left, &right);
        assert_eq!(right, before);
    }
}

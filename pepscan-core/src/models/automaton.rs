use std::collections::VecDeque;

use super::label::Label;
use super::nucleotide::Nucleotide;

/// A node identifier: an index into the [`Automaton`] arena.
///
/// Ids are only meaningful for the automaton that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root of every automaton.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    #[inline]
    pub fn is_root(self) -> bool {
        self == NodeId::ROOT
    }
}

/// One state of the automaton.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    /// Outputs of this state. Order is not significant and duplicates are allowed.
    pub labels: Vec<Label>,
    /// Longest proper suffix state. `None` falls back to the root.
    pub fail: Option<NodeId>,
    /// Last node of a pattern. Terminal nodes stay accepting even when other
    /// patterns continue past them.
    pub terminal: bool,
    children: [Option<NodeId>; 4],
    depth: usize,
}

impl Node {
    fn with_depth(depth: usize, labels: Vec<Label>) -> Self {
        Node {
            labels,
            fail: None,
            terminal: false,
            children: [None; 4],
            depth,
        }
    }

    #[inline]
    pub fn child(&self, symbol: Nucleotide) -> Option<NodeId> {
        self.children[symbol.index()]
    }

    /// Children in `A, C, G, T` order.
    pub fn children(&self) -> impl Iterator<Item = (Nucleotide, NodeId)> + '_ {
        Nucleotide::ALL
            .iter()
            .filter_map(|&symbol| self.child(symbol).map(|id| (symbol, id)))
    }

    #[inline]
    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Detach every child. The detached subtrees stay in the arena but are
    /// no longer reachable.
    pub fn clear_children(&mut self) {
        self.children = [None; 4];
    }
}

///
/// Arena-backed trie of nucleotide strings.
///
/// The root lives at [`NodeId::ROOT`] and is an ordinary [`Node`]: its children
/// are the top-level symbol mapping and its labels stay empty. The same type is
/// used for a single codon trie, a window trie and the global automaton, so any
/// node can serve as the root of a subtrie for merging or grafting.
///
/// Structure is never shared between two automata. Grafting from another
/// automaton always copies the nodes into this arena.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Automaton {
    nodes: Vec<Node>,
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

impl Automaton {
    pub fn new() -> Self {
        Automaton {
            nodes: vec![Node::with_depth(0, Vec::new())],
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Number of slots in the arena, including the root and any nodes detached
    /// by compaction.
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the root has no transitions at all.
    pub fn is_empty(&self) -> bool {
        !self.node(NodeId::ROOT).has_children()
    }

    /// Number of reachable nodes, not counting the root.
    pub fn node_count(&self) -> usize {
        self.breadth_first().count() - 1
    }

    /// Deepest reachable node.
    pub fn max_depth(&self) -> usize {
        self.breadth_first()
            .map(|id| self.node(id).depth)
            .max()
            .unwrap_or(0)
    }

    /// Follow the fail link of `id`, treating an absent link as the root.
    #[inline]
    pub fn fail(&self, id: NodeId) -> NodeId {
        self.node(id).fail.unwrap_or(NodeId::ROOT)
    }

    /// Drop every fail link, reachable or not.
    pub fn clear_fail_links(&mut self) {
        for node in self.nodes.iter_mut() {
            node.fail = None;
        }
    }

    fn push_node(&mut self, depth: usize, labels: Vec<Label>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::with_depth(depth, labels));
        id
    }

    ///
    /// Return the child of `parent` under `symbol`, creating an empty one if needed.
    ///
    pub fn get_or_insert_child(&mut self, parent: NodeId, symbol: Nucleotide) -> NodeId {
        if let Some(existing) = self.node(parent).child(symbol) {
            return existing;
        }
        let depth = self.node(parent).depth + 1;
        let id = self.push_node(depth, Vec::new());
        self.node_mut(parent).children[symbol.index()] = Some(id);
        id
    }

    ///
    /// Walk `symbols` starting at `from`.
    ///
    /// # Returns
    /// - the node reached, or `None` if a transition is missing
    ///
    pub fn walk(&self, from: NodeId, symbols: &[Nucleotide]) -> Option<NodeId> {
        symbols
            .iter()
            .try_fold(from, |current, &symbol| self.node(current).child(symbol))
    }

    ///
    /// Walk a nucleotide string from the root. Any byte that is not a
    /// nucleotide yields `None`.
    ///
    pub fn walk_str(&self, path: &str) -> Option<NodeId> {
        path.bytes().try_fold(NodeId::ROOT, |current, byte| {
            Nucleotide::from_byte(byte).and_then(|symbol| self.node(current).child(symbol))
        })
    }

    ///
    /// Deep copy the subtree rooted at `source_node` of `source` into this
    /// arena as the child of `parent` under `symbol`.
    ///
    /// Labels and terminal flags are copied, depths are recomputed relative to
    /// `parent` and fail links are not carried over. An existing child under `symbol` is detached.
    ///
    /// # Returns
    /// - the id of the copy of `source_node`
    ///
    pub fn copy_subtree(
        &mut self,
        parent: NodeId,
        symbol: Nucleotide,
        source: &Automaton,
        source_node: NodeId,
    ) -> NodeId {
        let depth = self.node(parent).depth + 1;
        let copied = self.push_node(depth, source.node(source_node).labels.clone());
        self.node_mut(copied).terminal = source.node(source_node).terminal;
        self.node_mut(parent).children[symbol.index()] = Some(copied);

        let mut stack = vec![(source_node, copied)];
        while let Some((src, dst)) = stack.pop() {
            let child_depth = self.node(dst).depth + 1;
            for (child_symbol, src_child) in source.node(src).children() {
                let dst_child = self.push_node(child_depth, source.node(src_child).labels.clone());
                self.node_mut(dst_child).terminal = source.node(src_child).terminal;
                self.node_mut(dst).children[child_symbol.index()] = Some(dst_child);
                stack.push((src_child, dst_child));
            }
        }

        copied
    }

    ///
    /// Deep copy every child of `source_node` in `source` under `target`.
    ///
    pub fn copy_children(&mut self, target: NodeId, source: &Automaton, source_node: NodeId) {
        for (symbol, src_child) in source.node(source_node).children() {
            self.copy_subtree(target, symbol, source, src_child);
        }
    }

    /// Reachable nodes without children, below `from`.
    pub fn leaves(&self, from: NodeId) -> Vec<NodeId> {
        self.breadth_first_from(from)
            .filter(|&id| id != from && !self.node(id).has_children())
            .collect()
    }

    /// Reachable nodes in breadth-first order, starting with the root.
    pub fn breadth_first(&self) -> BreadthFirst<'_> {
        self.breadth_first_from(NodeId::ROOT)
    }

    /// Nodes reachable from `start` in breadth-first order, starting with `start`.
    pub fn breadth_first_from(&self, start: NodeId) -> BreadthFirst<'_> {
        BreadthFirst {
            automaton: self,
            queue: VecDeque::from([start]),
        }
    }
}

/// Breadth-first traversal over node ids. See [`Automaton::breadth_first`].
#[derive(Debug, Clone)]
pub struct BreadthFirst<'a> {
    automaton: &'a Automaton,
    queue: VecDeque<NodeId>,
}

impl Iterator for BreadthFirst<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        self.queue
            .extend(self.automaton.node(id).children().map(|(_, child)| child));
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn insert(automaton: &mut Automaton, path: &str, label: Label) {
        let mut current = automaton.root();
        for byte in path.bytes() {
            let symbol = Nucleotide::from_byte(byte).unwrap();
            current = automaton.get_or_insert_child(current, symbol);
        }
        automaton.node_mut(current).labels.push(label);
    }

    #[fixture]
    fn small() -> Automaton {
        let mut automaton = Automaton::new();
        insert(&mut automaton, "ACG", Label::new(1, 0));
        insert(&mut automaton, "AT", Label::new(1, 3));
        automaton
    }

    #[rstest]
    fn test_new_is_empty() {
        let automaton = Automaton::new();
        assert_eq!(automaton.is_empty(), true);
        assert_eq!(automaton.node_count(), 0);
        assert_eq!(automaton.max_depth(), 0);
    }

    #[rstest]
    fn test_walk_and_depth(small: Automaton) {
        let node = small.walk_str("ACG").unwrap();
        assert_eq!(small.node(node).depth(), 3);
        assert_eq!(small.node(node).labels, vec![Label::new(1, 0)]);
        assert_eq!(small.walk_str("AG"), None);
        assert_eq!(small.walk_str("AN"), None);
    }

    #[rstest]
    fn test_node_count_and_leaves(small: Automaton) {
        // A, AC, ACG, AT
        assert_eq!(small.node_count(), 4);
        let leaves = small.leaves(small.root());
        assert_eq!(leaves.len(), 2);
        assert_eq!(small.max_depth(), 3);
    }

    #[rstest]
    fn test_copy_subtree_recomputes_depth(mut small: Automaton) {
        let mut target = Automaton::new();
        let g = target.get_or_insert_child(target.root(), Nucleotide::G);
        let acg = small.walk_str("ACG").unwrap();
        small.node_mut(acg).terminal = true;
        let a = small.walk_str("A").unwrap();
        target.copy_subtree(g, Nucleotide::T, &small, a);

        let copied = target.walk_str("GTCG").unwrap();
        assert_eq!(target.node(copied).depth(), 4);
        assert_eq!(target.node(copied).labels, vec![Label::new(1, 0)]);
        assert_eq!(target.node(copied).terminal, true);
        assert_eq!(target.node(target.walk_str("GTC").unwrap()).terminal, false);
        // the source is untouched
        assert_eq!(small.node_count(), 4);
    }

    #[rstest]
    fn test_breadth_first_order(small: Automaton) {
        let depths: Vec<usize> = small
            .breadth_first()
            .map(|id| small.node(id).depth())
            .collect();
        assert_eq!(depths, vec![0, 1, 2, 2, 3]);
    }

    #[rstest]
    fn test_clear_children_detaches(mut small: Automaton) {
        let a = small.walk_str("A").unwrap();
        small.node_mut(a).clear_children();
        assert_eq!(small.node_count(), 1);
        // detached nodes keep their arena slots
        assert_eq!(small.arena_len(), 5);
        assert_eq!(small.walk_str("AT"), None);
    }
}

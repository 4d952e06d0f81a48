use pepscan_core::models::Automaton;

/// Computes the Aho-Corasick fail link of every reachable node.
///
/// Implementations reset existing links first, so linking twice gives the
/// same result as linking once. A node whose longest matching proper suffix
/// is empty is left with no link (it falls back to the root).
pub trait FailureLinker: Send + Sync {
    fn link(&self, automaton: &mut Automaton);
}

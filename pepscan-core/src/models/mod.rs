pub mod automaton;
pub mod label;
pub mod nucleotide;

// re-export for cleaner imports
pub use self::automaton::{Automaton, BreadthFirst, Node, NodeId};
pub use self::label::Label;
pub use self::nucleotide::{Codon, Nucleotide};

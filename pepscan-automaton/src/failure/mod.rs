//!
//! Aho-Corasick fail links.
//!
//! [`StandardLinker`] computes every link in one breadth-first pass from the
//! links of shallower nodes. [`BruteForceLinker`] re-walks every proper suffix
//! from the root. Both produce the same links.
//!
pub mod brute_force;
pub mod standard;

pub use self::brute_force::BruteForceLinker;
pub use self::standard::StandardLinker;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use pepscan_core::models::{Automaton, Nucleotide};

    use super::*;
    use crate::traits::FailureLinker;

    fn from_patterns(patterns: &[&str]) -> Automaton {
        let mut automaton = Automaton::new();
        for pattern in patterns {
            let mut current = automaton.root();
            for byte in pattern.bytes() {
                let symbol = Nucleotide::from_byte(byte).unwrap();
                current = automaton.get_or_insert_child(current, symbol);
            }
        }
        automaton
    }

    /// Path of each node's fail target, `""` for the root.
    fn link_table(automaton: &Automaton, paths: &[&str]) -> Vec<(String, String)> {
        let by_id: Vec<(String, pepscan_core::models::NodeId)> = paths
            .iter()
            .map(|p| (p.to_string(), automaton.walk_str(p).unwrap()))
            .collect();

        by_id
            .iter()
            .map(|(path, id)| {
                let target = match automaton.node(*id).fail {
                    None => String::new(),
                    Some(fail) => by_id
                        .iter()
                        .find(|(_, other)| *other == fail)
                        .map(|(p, _)| p.clone())
                        .unwrap(),
                };
                (path.clone(), target)
            })
            .collect()
    }

    #[fixture]
    fn aca_cat() -> Automaton {
        from_patterns(&["ACA", "CAT"])
    }

    const ACA_CAT_PATHS: [&str; 6] = ["A", "AC", "ACA", "C", "CA", "CAT"];

    fn expected_aca_cat() -> Vec<(String, String)> {
        [
            ("A", ""),
            ("AC", "C"),
            ("ACA", "CA"),
            ("C", ""),
            ("CA", "A"),
            ("CAT", ""),
        ]
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
    }

    #[rstest]
    fn test_standard_hand_computed(mut aca_cat: Automaton) {
        StandardLinker.link(&mut aca_cat);
        assert_eq!(link_table(&aca_cat, &ACA_CAT_PATHS), expected_aca_cat());
    }

    #[rstest]
    fn test_brute_force_hand_computed(mut aca_cat: Automaton) {
        BruteForceLinker.link(&mut aca_cat);
        assert_eq!(link_table(&aca_cat, &ACA_CAT_PATHS), expected_aca_cat());
    }

    #[rstest]
    fn test_falls_back_to_shorter_suffix() {
        // without "CA" in the trie, ACA falls back to "A"
        let mut automaton = from_patterns(&["ACA", "GC"]);
        StandardLinker.link(&mut automaton);

        let aca = automaton.walk_str("ACA").unwrap();
        let a = automaton.walk_str("A").unwrap();
        assert_eq!(automaton.node(aca).fail, Some(a));
    }

    #[rstest]
    #[case(&["ACGTACGT", "CGTA", "GTAC", "TTT"])]
    #[case(&["AAAA", "AAA", "AA"])]
    #[case(&["ACAT", "CATG", "ATGA", "TGAC", "GACA"])]
    fn test_strategies_agree(#[case] patterns: &[&str]) {
        let mut standard = from_patterns(patterns);
        let mut brute = standard.clone();

        StandardLinker.link(&mut standard);
        BruteForceLinker.link(&mut brute);

        for id in standard.breadth_first() {
            assert_eq!(standard.node(id).fail, brute.node(id).fail);
        }
    }

    #[rstest]
    fn test_relinking_is_stable(mut aca_cat: Automaton) {
        StandardLinker.link(&mut aca_cat);
        let once = aca_cat.clone();
        StandardLinker.link(&mut aca_cat);
        assert_eq!(aca_cat, once);
    }
}

use std::fs::read_to_string;
use std::path::Path;

use anyhow::{Context, Result};

use crate::genetic_code::GeneticCodeTable;
use crate::models::Nucleotide;

///
/// Read a genetic code table from a TOML file.
///
/// # Arguments
/// - path: path to a file with a `[codons]` table
///
pub fn read_genetic_code<P: AsRef<Path>>(path: P) -> Result<GeneticCodeTable> {
    let path = path.as_ref();
    let contents = read_to_string(path)
        .with_context(|| format!("Failed to read genetic code file: {}", path.display()))?;
    let table = contents
        .parse::<GeneticCodeTable>()
        .with_context(|| format!("Invalid genetic code file: {}", path.display()))?;
    Ok(table)
}

///
/// Render a nucleotide path as a string.
///
pub fn nucleotides_to_string(symbols: &[Nucleotide]) -> String {
    symbols.iter().map(|n| n.as_char()).collect()
}

///
/// Decode the character starting at byte `position` of `bytes`.
///
/// Used to report the offending symbol of non-ASCII input as written rather
/// than as its first byte. Invalid UTF-8 yields `U+FFFD`.
///
pub fn symbol_at(bytes: &[u8], position: usize) -> char {
    let end = bytes.len().min(position + 4);
    bytes
        .get(position..end)
        .and_then(|window| String::from_utf8_lossy(window).chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[rstest]
    fn test_read_genetic_code() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[codons]").unwrap();
        writeln!(file, "M = [\"ATG\"]").unwrap();
        writeln!(file, "W = [\"TGG\"]").unwrap();

        let table = read_genetic_code(file.path()).unwrap();
        assert_eq!(table.amino_acids(), vec!['M', 'W']);
    }

    #[rstest]
    fn test_read_genetic_code_missing_file() {
        let result = read_genetic_code("does/not/exist.toml");
        assert_eq!(result.is_err(), true);
    }

    #[rstest]
    fn test_nucleotides_to_string() {
        let path = [Nucleotide::G, Nucleotide::A, Nucleotide::T];
        assert_eq!(nucleotides_to_string(&path), "GAT");
    }

    #[rstest]
    #[case("ACGT", 2, 'G')]
    #[case("Mé", 1, 'é')]
    #[case("M→W", 1, '→')]
    fn test_symbol_at(#[case] input: &str, #[case] position: usize, #[case] expected: char) {
        assert_eq!(symbol_at(input.as_bytes(), position), expected);
    }

    #[rstest]
    fn test_symbol_at_invalid_utf8() {
        assert_eq!(symbol_at(&[b'M', 0xFF], 1), char::REPLACEMENT_CHARACTER);
    }
}

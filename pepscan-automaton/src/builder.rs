use std::borrow::Cow;

use pepscan_core::genetic_code::GeneticCodeTable;
use pepscan_core::models::Automaton;

use super::compact::compact;
use super::config::BuildConfig;
use super::error::{AutomatonError, AutomatonResult};
use super::merge::merge_into_root;
use super::window::WindowAutomatonBuilder;

///
/// Build context holding the global automaton while peptides are added.
///
/// Peptides are folded in one at a time with [`AutomatonBuilder::add_peptide`];
/// [`AutomatonBuilder::finish`] then bounds the depth, strips internal labels
/// and attaches fail links, returning an automaton ready for scanning.
///
pub struct AutomatonBuilder {
    config: BuildConfig,
    table: Cow<'static, GeneticCodeTable>,
    automaton: Automaton,
    windows: usize,
}

impl AutomatonBuilder {
    ///
    /// Create a builder from a config, resolving its genetic code.
    ///
    pub fn new(config: BuildConfig) -> AutomatonResult<Self> {
        let table = config.genetic_code_table()?;
        Self::from_parts(config, table)
    }

    ///
    /// Create a builder with an explicit genetic code, ignoring the table
    /// settings of `config`.
    ///
    pub fn with_table(config: BuildConfig, table: GeneticCodeTable) -> AutomatonResult<Self> {
        Self::from_parts(config, Cow::Owned(table))
    }

    fn from_parts(
        config: BuildConfig,
        table: Cow<'static, GeneticCodeTable>,
    ) -> AutomatonResult<Self> {
        if config.window_size == 0 {
            return Err(AutomatonError::InvalidWindowSize(config.window_size));
        }

        Ok(AutomatonBuilder {
            config,
            table,
            automaton: Automaton::new(),
            windows: 0,
        })
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn table(&self) -> &GeneticCodeTable {
        &self.table
    }

    /// Windows folded in so far, over all peptides.
    pub fn window_count(&self) -> usize {
        self.windows
    }

    ///
    /// Fold every window of `peptide` into the automaton.
    ///
    /// A peptide shorter than the window size adds nothing. An unknown residue
    /// fails the call and leaves the automaton as it was.
    ///
    /// # Returns
    /// - the number of windows added
    ///
    pub fn add_peptide<S: AsRef<[u8]>>(
        &mut self,
        peptide: S,
        source_id: u32,
    ) -> AutomatonResult<usize> {
        let peptide = peptide.as_ref();
        let window_builder = WindowAutomatonBuilder::new(&self.table, self.config.window_size)?
            .with_phase_shifts(self.config.include_phase_shifts);

        let added = if self.config.parallel {
            let partial = window_builder.build_parallel(peptide, source_id)?;
            merge_into_root(&mut self.automaton, &partial);
            window_builder.window_count(peptide.len())
        } else {
            window_builder.extend(&mut self.automaton, peptide, source_id)?
        };

        if added == 0 {
            log::warn!(
                "Peptide {} has {} residues, fewer than the window size {}; nothing added",
                source_id,
                peptide.len(),
                self.config.window_size
            );
        } else {
            log::debug!("Added {} windows for peptide {}", added, source_id);
        }

        self.windows += added;
        Ok(added)
    }

    ///
    /// Compact, validate and link the automaton.
    ///
    pub fn finish(self) -> AutomatonResult<Automaton> {
        let mut automaton = self.automaton;
        let max_depth = self.config.max_depth();

        log::info!(
            "Compacting automaton of {} windows ({} nodes) to depth {}",
            self.windows,
            automaton.node_count(),
            max_depth
        );
        compact(&mut automaton, max_depth, self.config.keep_only_terminal);

        let depth = automaton.max_depth();
        if depth > max_depth {
            return Err(AutomatonError::DepthExceeded { depth, max_depth });
        }

        log::info!(
            "Building {:?} failure links over {} nodes",
            self.config.failure_links,
            automaton.node_count()
        );
        self.config.failure_links.linker().link(&mut automaton);

        Ok(automaton)
    }
}

///
/// Build a scan-ready automaton for one peptide with the standard genetic
/// code and default settings.
///
/// # Arguments
/// - sequence: the peptide, one letter per residue
/// - source_id: id stamped on every label
/// - window_size: amino acids per pattern
///
pub fn build_automaton<S: AsRef<[u8]>>(
    sequence: S,
    source_id: u32,
    window_size: usize,
) -> AutomatonResult<Automaton> {
    let mut builder = AutomatonBuilder::new(BuildConfig::new(window_size))?;
    builder.add_peptide(sequence, source_id)?;
    builder.finish()
}

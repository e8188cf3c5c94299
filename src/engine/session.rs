//! Game session.
//!
//! A [`Session`] owns the three structures of one game: the mansion map, the
//! clue tree filled during exploration, and the suspect table seeded from the
//! case. Ending the session tears all three down and reports how many nodes
//! each one released.

use std::io::{BufRead, Write};

use crate::config::CaseConfig;
use crate::data_structures::chained_hash::ChainedHashTable;
use crate::data_structures::clue_bst::ClueBst;
use crate::data_structures::mansion_tree::Mansion;
use crate::engine::analysis::{analyze, AnalysisReport};
use crate::engine::exploration::{explore, CommandReader, ExplorationOutcome};
use crate::engine::report;
use crate::error::DetectiveResult;

/// Everything a finished game produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// How exploration went
    pub exploration: ExplorationOutcome,

    /// Suspect tally over the collected clues
    pub analysis: AnalysisReport,
}

/// Node counts released when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeardownReport {
    /// Rooms released from the mansion map
    pub rooms: usize,

    /// Nodes released from the clue tree
    pub clue_nodes: usize,

    /// Entries released from the suspect table
    pub hash_entries: usize,
}

impl TeardownReport {
    /// Total number of released nodes.
    pub fn total(&self) -> usize {
        self.rooms + self.clue_nodes + self.hash_entries
    }
}

/// One game of Detective Quest.
#[derive(Debug)]
pub struct Session {
    case: CaseConfig,
    mansion: Mansion,
    clues: ClueBst,
    suspects: ChainedHashTable,
}

impl Session {
    /// Builds the mansion, an empty clue tree, and the suspect table for `case`.
    pub fn new(case: CaseConfig) -> Self {
        let suspects = case.seed_table();
        Self {
            case,
            mansion: Mansion::build(),
            clues: ClueBst::new(),
            suspects,
        }
    }

    /// The case being investigated.
    pub fn case(&self) -> &CaseConfig {
        &self.case
    }

    /// The mansion map.
    pub fn mansion(&self) -> &Mansion {
        &self.mansion
    }

    /// Clues collected so far.
    pub fn clues(&self) -> &ClueBst {
        &self.clues
    }

    /// The clue to suspect table.
    pub fn suspects(&self) -> &ChainedHashTable {
        &self.suspects
    }

    /// Plays one game: greets the player, runs exploration on `input`, then
    /// prints the clue list, the suspect table and the analysis to `out`.
    pub fn play<R, W>(&mut self, input: R, out: &mut W) -> DetectiveResult<SessionSummary>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(out, "--- Bem-vindo ao Detective Quest - Nível Mestre ---")?;
        writeln!(
            out,
            "Você está no Hall de Entrada da mansão. Explore, encontre pistas e desvende o mistério!"
        )?;

        let mut reader = CommandReader::new(input);
        let exploration = explore(&mut self.mansion, &mut self.clues, &mut reader, out)?;

        report::write_clues(out, &self.clues)?;
        report::write_suspect_table(out, &self.suspects)?;

        let analysis = self.analyze();
        report::write_analysis(out, &analysis)?;
        out.flush()?;

        Ok(SessionSummary {
            exploration,
            analysis,
        })
    }

    /// Tallies the collected clues against the declared suspects.
    pub fn analyze(&self) -> AnalysisReport {
        analyze(&self.suspects, &self.clues, &self.case.suspects)
    }

    /// Ends the session, releasing every room, clue node and table entry.
    pub fn end(self) -> TeardownReport {
        let Self {
            mansion,
            clues,
            suspects,
            ..
        } = self;

        let report = TeardownReport {
            rooms: mansion.teardown(),
            clue_nodes: clues.teardown(),
            hash_entries: suspects.teardown(),
        };
        tracing::info!(
            rooms = report.rooms,
            clue_nodes = report.clue_nodes,
            hash_entries = report.hash_entries,
            "Session released"
        );
        report
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CaseConfig::default())
    }
}

//! Analysis engine.
//!
//! Resolves every collected clue through the suspect table and tallies how
//! often each declared suspect is mentioned.

use crate::data_structures::chained_hash::ChainedHashTable;
use crate::data_structures::clue_bst::ClueBst;

/// Mention count for one suspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspectTally {
    /// Suspect name as declared
    pub suspect: String,

    /// Number of collected clues pointing at the suspect
    pub mentions: usize,
}

/// Result of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    /// One tally per declared suspect, in declaration order
    pub tallies: Vec<SuspectTally>,

    /// First declared suspect holding the highest tally. `None` only when no
    /// suspect was declared.
    pub most_cited: Option<SuspectTally>,

    /// Clues with no entry in the suspect table
    pub unmapped_clues: usize,

    /// Clues pointing at a suspect outside the declared list
    pub undeclared_mentions: usize,
}

/// Tallies the suspects mentioned by `clues`.
///
/// Clues are visited in order. Clues missing from `table`, and clues naming
/// a suspect that is not in `suspects`, are skipped. The most cited suspect is
/// chosen with a strictly-greater comparison against the running maximum, so
/// ties go to the suspect declared first, and with no mentions at all the
/// first declared suspect is reported with zero.
pub fn analyze(table: &ChainedHashTable, clues: &ClueBst, suspects: &[String]) -> AnalysisReport {
    let mut counts = vec![0usize; suspects.len()];
    let mut unmapped_clues = 0;
    let mut undeclared_mentions = 0;

    for clue in clues.iter() {
        let Some(suspect) = table.lookup(clue) else {
            tracing::debug!(clue, "Clue has no suspect association");
            unmapped_clues += 1;
            continue;
        };

        match suspects.iter().position(|declared| declared == suspect) {
            Some(index) => counts[index] += 1,
            None => {
                tracing::debug!(clue, suspect, "Clue points at an undeclared suspect");
                undeclared_mentions += 1;
            }
        }
    }

    let tallies: Vec<SuspectTally> = suspects
        .iter()
        .zip(counts)
        .map(|(suspect, mentions)| SuspectTally {
            suspect: suspect.clone(),
            mentions,
        })
        .collect();

    let mut most_cited: Option<&SuspectTally> = None;
    for tally in &tallies {
        if most_cited.map_or(true, |best| tally.mentions > best.mentions) {
            most_cited = Some(tally);
        }
    }
    let most_cited = most_cited.cloned();

    if let Some(best) = &most_cited {
        tracing::info!(suspect = %best.suspect, mentions = best.mentions, "Most cited suspect");
    }

    AnalysisReport {
        tallies,
        most_cited,
        unmapped_clues,
        undeclared_mentions,
    }
}

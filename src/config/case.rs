//! Case configuration: the declared suspects and the clue associations that
//! seed the suspect table.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::{ConfigResult, Validate};
use crate::data_structures::chained_hash::ChainedHashTable;
use crate::error::config::ConfigError;

/// One clue pointing at one suspect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueAssociation {
    /// Clue text as found in the mansion
    pub clue: String,

    /// Suspect the clue incriminates
    pub suspect: String,
}

impl ClueAssociation {
    /// Creates an association.
    pub fn new<C: Into<String>, S: Into<String>>(clue: C, suspect: S) -> Self {
        Self {
            clue: clue.into(),
            suspect: suspect.into(),
        }
    }
}

/// The mystery being investigated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseConfig {
    /// Known suspects in declaration order. Ties in the final tally go to the
    /// suspect declared first.
    pub suspects: Vec<String>,

    /// Clue to suspect pairs inserted into the suspect table at startup
    pub associations: Vec<ClueAssociation>,
}

impl CaseConfig {
    /// Builds the suspect table from the configured associations, in order.
    pub fn seed_table(&self) -> ChainedHashTable {
        let table: ChainedHashTable = self
            .associations
            .iter()
            .map(|association| (association.clue.as_str(), association.suspect.as_str()))
            .collect();

        tracing::debug!(entries = table.len(), "Suspect table seeded");
        table
    }

    /// Associations whose suspect is missing from the declared list. Their
    /// clues are looked up but never counted.
    pub fn undeclared_suspects(&self) -> Vec<&str> {
        let declared: HashSet<&str> = self.suspects.iter().map(String::as_str).collect();
        let mut reported = HashSet::new();
        self.associations
            .iter()
            .map(|association| association.suspect.as_str())
            .filter(|suspect| !declared.contains(suspect) && reported.insert(*suspect))
            .collect()
    }
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            suspects: vec![
                "Mordomo".to_string(),
                "Jardineiro".to_string(),
                "Dona da Casa".to_string(),
            ],
            associations: vec![
                ClueAssociation::new("Bilhete rasgado com data antiga", "Mordomo"),
                ClueAssociation::new("Chave dourada com brasao", "Jardineiro"),
                ClueAssociation::new("Diario com anotacoes estranhas", "Dona da Casa"),
                ClueAssociation::new("Copo quebrado", "Mordomo"),
                ClueAssociation::new("Pegadas na lama", "Jardineiro"),
                ClueAssociation::new("Carta de amor", "Dona da Casa"),
            ],
        }
    }
}

impl Validate for CaseConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.suspects.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one suspect must be declared".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for suspect in &self.suspects {
            if suspect.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "suspect names must not be blank".to_string(),
                ));
            }
            if !seen.insert(suspect.as_str()) {
                return Err(ConfigError::DuplicateSuspect(suspect.clone()));
            }
        }

        for association in &self.associations {
            if association.clue.trim().is_empty() || association.suspect.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "association '{}' -> '{}' has a blank field",
                    association.clue, association.suspect
                )));
            }
        }

        Ok(())
    }
}

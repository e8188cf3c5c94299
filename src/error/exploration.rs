//! Exploration error module.
//!
//! Both variants are recoverable: the explorer prints the message, keeps the
//! player in the same room and prompts again.

use thiserror::Error;

use crate::data_structures::mansion_tree::Direction;

/// Errors produced by a single player command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExplorationError {
    /// The typed character is not a known command. The character is kept for
    /// diagnostics and left out of the console message.
    #[error("Opção inválida. Tente novamente.")]
    InvalidCommand(char),

    /// The current room has no exit in the requested direction.
    #[error("Não há caminho para a {0} aqui.")]
    NoPath(Direction),
}

//! Exploration engine.
//!
//! Walks the mansion one command at a time. The current state is the path
//! taken from the entrance; terminal states are a room without exits or an
//! explicit quit. There is no way back up the tree.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::data_structures::clue_bst::ClueBst;
use crate::data_structures::mansion_tree::{hidden_clue, Direction, HiddenClue, Mansion, Room};
use crate::error::exploration::ExplorationError;
use crate::error::{DetectiveError, DetectiveResult};

const SEPARATOR: &str = "----------------------------------------";

/// A parsed player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Take the exit in the given direction
    Move(Direction),
    /// Stop exploring
    Quit,
}

impl Command {
    /// Parses a command key, case-insensitively.
    pub fn parse(key: char) -> Result<Self, ExplorationError> {
        match key.to_ascii_lowercase() {
            'e' => Ok(Command::Move(Direction::Left)),
            'd' => Ok(Command::Move(Direction::Right)),
            's' => Ok(Command::Quit),
            _ => Err(ExplorationError::InvalidCommand(key)),
        }
    }
}

/// Why exploration stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Reached a room without exits
    DeadEnd,
    /// The player typed the quit command
    PlayerQuit,
    /// The input stream ended before a command was read
    InputClosed,
}

/// Summary of one exploration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorationOutcome {
    /// How the run ended
    pub stop_reason: StopReason,

    /// Rooms entered, starting with the entrance
    pub rooms_visited: Vec<String>,

    /// Clues collected during this run, in discovery order
    pub clues_found: Vec<String>,

    /// Commands that were rejected
    pub rejected_commands: usize,
}

impl ExplorationOutcome {
    /// Name of the room the player ended in.
    pub fn final_room(&self) -> Option<&str> {
        self.rooms_visited.last().map(String::as_str)
    }
}

/// Reads command keys the way a `" %c"` scan does: leading whitespace is
/// skipped and one character is consumed per call. Characters left on a line
/// feed the following prompts.
///
/// Lines are read as raw bytes. Bytes that are not valid UTF-8 decode to
/// U+FFFD and are rejected as an unknown command instead of failing the read.
#[derive(Debug)]
pub struct CommandReader<R> {
    input: R,
    pending: VecDeque<char>,
}

impl<R: BufRead> CommandReader<R> {
    /// Wraps a buffered input.
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next non-whitespace character, or `None` at end of input.
    pub fn next_key(&mut self) -> io::Result<Option<char>> {
        loop {
            while let Some(key) = self.pending.pop_front() {
                if !key.is_whitespace() {
                    return Ok(Some(key));
                }
            }

            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(String::from_utf8_lossy(&line).chars());
        }
    }
}

/// Collects the clue hidden in `room`, if it has one and it is still there.
///
/// The clue goes into `clues` and the room is flagged, so repeated visits
/// never insert twice.
pub fn collect_clue(room: &mut Room, clues: &mut ClueBst) -> Option<HiddenClue> {
    if room.clue_collected {
        return None;
    }
    let hidden = hidden_clue(&room.name)?;

    clues.insert(hidden.clue);
    room.clue_collected = true;
    tracing::info!(room = %room.name, clue = hidden.clue, "Clue collected");
    Some(hidden)
}

/// Runs the interactive exploration loop.
///
/// Prompts are written to `out` and commands read from `reader` until the
/// player reaches a dead end, quits, or the input ends.
pub fn explore<R, W>(
    mansion: &mut Mansion,
    clues: &mut ClueBst,
    reader: &mut CommandReader<R>,
    out: &mut W,
) -> DetectiveResult<ExplorationOutcome>
where
    R: BufRead,
    W: Write,
{
    let mut path: Vec<Direction> = Vec::new();
    let mut entered = true;
    let mut outcome = ExplorationOutcome {
        stop_reason: StopReason::DeadEnd,
        rooms_visited: Vec::new(),
        clues_found: Vec::new(),
        rejected_commands: 0,
    };

    loop {
        let room = mansion
            .room_at_mut(&path)
            .ok_or_else(|| DetectiveError::Custom("exploration left the mansion map".to_string()))?;

        if entered {
            outcome.rooms_visited.push(room.name.clone());
            entered = false;
        }

        writeln!(out, "\n{SEPARATOR}")?;
        writeln!(out, "Você está em: {}", room.name)?;

        if let Some(hidden) = collect_clue(room, clues) {
            writeln!(out, "Você encontrou uma pista {}: '{}'.", hidden.place, hidden.clue)?;
            outcome.clues_found.push(hidden.clue.to_string());
        }

        if room.is_leaf() {
            writeln!(out, "Este cômodo não tem outras saídas. Fim do caminho.")?;
            outcome.stop_reason = StopReason::DeadEnd;
            break;
        }

        writeln!(out, "Para onde você quer ir?")?;
        for (direction, next) in room.exits() {
            let label = match direction {
                Direction::Left => "Caminho da Esquerda",
                Direction::Right => "Caminho da Direita",
            };
            writeln!(out, "({}) - {} ({})", direction.key(), label, next.name)?;
        }
        writeln!(out, "(s) - Sair da exploração")?;
        write!(out, "Escolha: ")?;
        out.flush()?;

        let Some(key) = reader.next_key()? else {
            writeln!(out)?;
            tracing::info!(room = %room.name, "Input closed, stopping exploration");
            outcome.stop_reason = StopReason::InputClosed;
            break;
        };

        let step = Command::parse(key).and_then(|command| match command {
            Command::Move(direction) if room.child(direction).is_some() => Ok(Some(direction)),
            Command::Move(direction) => Err(ExplorationError::NoPath(direction)),
            Command::Quit => Ok(None),
        });

        match step {
            Ok(Some(direction)) => {
                tracing::debug!(from = %room.name, %direction, "Moving");
                path.push(direction);
                entered = true;
            }
            Ok(None) => {
                writeln!(out, "Você decidiu parar a exploração por enquanto.")?;
                outcome.stop_reason = StopReason::PlayerQuit;
                break;
            }
            Err(error) => {
                tracing::debug!(room = %room.name, %error, "Command rejected");
                writeln!(out, "{error}")?;
                outcome.rejected_commands += 1;
            }
        }
    }

    tracing::info!(
        stop_reason = ?outcome.stop_reason,
        rooms = outcome.rooms_visited.len(),
        clues = outcome.clues_found.len(),
        "Exploration finished"
    );
    Ok(outcome)
}

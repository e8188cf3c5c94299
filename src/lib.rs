//! Detective Quest Library
//!
//! This library contains the core components of Detective Quest, a console
//! mystery game: the mansion map, the clue tree, the suspect table, and the
//! engine that plays one game over them. The library is designed to be used
//! by the binary crate, but the engine takes any `BufRead` input and `Write`
//! output so a game can be scripted.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use detective_quest_lib::config::CaseConfig;
//! use detective_quest_lib::engine::Session;
//!
//! let mut session = Session::new(CaseConfig::default());
//! let mut out = Vec::new();
//! let summary = session.play(Cursor::new("e\ne\n"), &mut out).unwrap();
//!
//! assert_eq!(summary.exploration.final_room(), Some("Escritorio"));
//! assert_eq!(session.end().total(), 7 + 2 + 6);
//! ```

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod engine;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for Detective Quest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

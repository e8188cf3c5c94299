//! Game engine: exploration, analysis, console reports and the session that
//! ties them together.

pub mod analysis;
pub mod exploration;
pub mod report;
pub mod session;

pub use analysis::{analyze, AnalysisReport, SuspectTally};
pub use exploration::{explore, Command, CommandReader, ExplorationOutcome, StopReason};
pub use session::{Session, SessionSummary, TeardownReport};

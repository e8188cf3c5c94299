//! Data structures for Detective Quest.
//!
//! Three owned, pointer-linked structures back a game:
//! - the mansion map, a fixed binary tree of rooms
//! - the clue tree, a binary search tree of collected clues
//! - the suspect table, a chained hash table from clue to suspect
//!
//! Every link is an exclusive `Box`. Each structure releases its nodes
//! iteratively when torn down or dropped, so deep chains never recurse.

pub mod chained_hash;
pub mod clue_bst;
pub mod mansion_tree;

// Re-export common data structures
pub use chained_hash::{ChainedHashTable, InsertOutcome};
pub use clue_bst::ClueBst;
pub use mansion_tree::{Direction, Mansion, Room};

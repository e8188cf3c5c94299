//! Test modules for Detective Quest.
//!
//! This module contains the cross-component tests, including:
//! - Property-based tests for the clue tree and the suspect table
//! - Configuration loading from real files
//! - Error reporting
//! - Scripted end-to-end games
//!
//! Unit tests that only touch one type live next to that type.

pub mod clue_bst_tests;
pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{clue_strategy, clue_set_strategy, suspect_strategy, TestFixture};

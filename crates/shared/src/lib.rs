//! Shared types and configuration for finstat.
//!
//! This crate provides common types used across all other crates:
//! - Account codes and account classes with their normal-balance sides
//! - Calendar period types for monthly reporting
//! - Engine configuration (anchor seeds, sign corrections, reporting lines)

pub mod config;
pub mod types;

pub use config::{ConfigError, Direction, EngineConfig, LineDef, Term, TermOp};
pub use types::{AccountClass, AccountCode, Month, NormalBalance};

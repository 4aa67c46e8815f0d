//! Common types used across the engine.

pub mod account;
pub mod period;

pub use account::{AccountClass, AccountCode, NormalBalance};
pub use period::Month;

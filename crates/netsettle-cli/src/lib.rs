//! # netsettle-cli
//!
//! Thin I/O layer around the settlement engine.
//!
//! ## Modes
//!
//! - `example`: settles a built-in four-player game
//! - `interactive`: prompts for a participant count, then a name and an
//!   amount per participant
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; everything here takes plain
//!   readers and writers so sessions can be driven from tests.
//! - No settlement logic here. Amount parsing and formatting only.

pub mod display;
pub mod input;
pub mod session;

pub use session::{Mode, OutputFormat, run};

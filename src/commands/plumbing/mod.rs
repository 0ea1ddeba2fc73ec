//! Plumbing commands (low-level state access)
//!
//! These are not part of the command-line vocabulary; the front-end calls them
//! directly to create files, render the repository and start over.

pub mod reset_simulator;
pub mod snapshot;
pub mod write_file;

//! Sandbox command implementations
//!
//! - `plumbing`: Low-level state access (write a file, snapshot, full reset)
//! - `porcelain`: User-facing git commands (add, commit, log, etc.)
//! - `dispatch`: Turns a command line into a porcelain call and its output

pub mod dispatch;
pub mod plumbing;
pub mod porcelain;

//! Sandbox data structures
//!
//! - `branch`: Branch names, branch pointers and branch listings
//! - `command`: The command vocabulary and its line parser
//! - `diff`: Per-file differences between the working directory and HEAD
//! - `errors`: Conditions reported back to the user
//! - `log`: Commit history records
//! - `objects`: Commits and their identifiers
//! - `status`: Working tree status reports

pub mod branch;
pub mod command;
pub mod diff;
pub mod errors;
pub mod log;
pub mod objects;
pub mod status;

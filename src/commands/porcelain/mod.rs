//! Porcelain commands (user-facing Git operations)
//!
//! ## Commands
//!
//! - `init`: Report whether the repository is fresh
//! - `status`: Classify working directory files
//! - `add`: Stage files for commit
//! - `commit`: Record the staging area as a new commit
//! - `log`: Show the history reachable from HEAD
//! - `branch`: Create or list branches
//! - `checkout`: Switch branches
//! - `diff`: Compare the working directory with HEAD
//! - `merge`: Union-merge another branch and commit the result
//! - `reset`: Unstage changes, optionally restoring HEAD's files
//! - `rm`: Remove files from the working directory and staging area
//! - `show`: Print a file's current or committed content

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod show;
pub mod status;

//! An in-memory sandbox that mimics a small subset of git.
//!
//! The [`Repository`](areas::repository::Repository) aggregate keeps a working
//! directory, a staging area, an append-only commit list, branches and HEAD.
//! Commands arrive as text lines (`git add .`, `git commit -m "msg"`, ...) and
//! always produce a displayable string, on success and on failure alike.

/// Debug logging that is compiled in only with the `debug_sim` feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("HEAD moved to {}", oid);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_sim")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod shell;

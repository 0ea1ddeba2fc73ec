//! Storage areas of the sandbox repository
//!
//! - `database`: Append-only list of commits
//! - `index`: Staging area for the next commit
//! - `refs`: Branches, the current branch and HEAD
//! - `repository`: The aggregate that owns all areas
//! - `workspace`: The user's editable file set

pub(crate) mod database;
pub(crate) mod index;
pub(crate) mod refs;
pub mod repository;
pub(crate) mod workspace;

//! Working directory differences against the last commit
//!
//! There is no line-level diff algorithm: a changed file is shown as its whole
//! old content removed and its whole new content added.

pub mod file_diff;

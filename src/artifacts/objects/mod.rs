//! Commit objects and their identifiers
//!
//! A commit freezes a full copy of the staging area together with its message,
//! author, timestamp and parent. Commits are identified by a 40-character
//! SHA-1 hex digest and displayed by its first 7 characters.

use std::collections::BTreeMap;

pub mod commit;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of the abbreviated object ID shown to users
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;

/// Filename to content mapping used by the working directory, the staging
/// area and commit snapshots
pub type FileMap = BTreeMap<String, String>;

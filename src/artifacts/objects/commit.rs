//! Commit object
//!
//! Commits represent snapshots of the staging area at specific points in time.
//! They contain:
//! - A full copy of every staged file (not a diff)
//! - The parent commit ID (the HEAD at creation time, absent for the root)
//! - Author name and timestamp
//! - Commit message
//!
//! ## Identity
//!
//! The commit ID is the SHA-1 digest of:
//! ```text
//! sequence <n>
//! parent <parent-sha>
//! author <name> <timestamp> <timezone>
//! file <name> <size>
//! <content>
//!
//! <commit message>
//! ```
//! The sequence number is handed out by the owning repository and never
//! repeats, so two commits never share an ID.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::FileMap;
use crate::artifacts::objects::object_id::ObjectId;
use serde::{Deserialize, Serialize};

/// Author name recorded when none is configured
pub const DEFAULT_AUTHOR: &str = "User";

/// An immutable snapshot of the staging area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    id: ObjectId,
    message: String,
    author: String,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
    parent: Option<ObjectId>,
    files: FileMap,
}

impl Commit {
    /// Create a new commit stamped with the current local time
    ///
    /// # Arguments
    ///
    /// * `sequence` - Repository-wide unique sequence number
    /// * `parent` - Commit checked out when this one was created
    /// * `files` - Copy of the staging area
    /// * `author` - Author name
    /// * `message` - Commit message
    pub fn new(
        sequence: u64,
        parent: Option<ObjectId>,
        files: FileMap,
        author: String,
        message: String,
    ) -> anyhow::Result<Self> {
        Self::new_with_timestamp(
            sequence,
            parent,
            files,
            author,
            message,
            chrono::Local::now().fixed_offset(),
        )
    }

    /// Create a new commit with a specific timestamp
    pub fn new_with_timestamp(
        sequence: u64,
        parent: Option<ObjectId>,
        files: FileMap,
        author: String,
        message: String,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> anyhow::Result<Self> {
        let payload = Self::payload(sequence, parent.as_ref(), &files, &author, &message, &timestamp);
        let id = ObjectId::hash(payload.as_bytes())?;

        Ok(Commit {
            id,
            message,
            author,
            timestamp,
            parent,
            files,
        })
    }

    fn payload(
        sequence: u64,
        parent: Option<&ObjectId>,
        files: &FileMap,
        author: &str,
        message: &str,
        timestamp: &chrono::DateTime<chrono::FixedOffset>,
    ) -> String {
        let mut lines = vec![];

        lines.push(format!("sequence {}", sequence));
        if let Some(parent) = parent {
            lines.push(format!("parent {}", parent));
        }
        lines.push(format!(
            "author {} {} {}",
            author,
            timestamp.timestamp(),
            timestamp.format("%z")
        ));
        for (name, content) in files {
            lines.push(format!("file {} {}", name, content.len()));
            lines.push(content.clone());
        }
        lines.push(String::new());
        lines.push(message.to_string());

        lines.join("\n")
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn files(&self) -> &FileMap {
        &self.files
    }

    pub fn file(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }
}

/// One-line confirmation printed after a successful commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub branch: BranchName,
    pub id: ObjectId,
    pub message: String,
    pub root: bool,
}

impl CommitSummary {
    pub fn new(branch: BranchName, commit: &Commit) -> Self {
        CommitSummary {
            branch,
            id: commit.id().clone(),
            message: commit.short_message(),
            root: commit.is_root(),
        }
    }
}

impl std::fmt::Display for CommitSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let is_root = if self.root { "(root-commit) " } else { "" };
        write!(
            f,
            "[{} {}{}] {}",
            self.branch,
            is_root,
            self.id.to_short_oid(),
            self.message
        )
    }
}

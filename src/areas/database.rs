//! Commit database
//!
//! Commits are kept in creation order and are never modified or removed,
//! except by a full simulator reset.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Database {
    commits: Vec<Commit>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&mut self, commit: Commit) {
        self.commits.push(commit);
    }

    pub fn load(&self, oid: &ObjectId) -> Option<&Commit> {
        self.commits.iter().find(|commit| commit.id() == oid)
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.load(oid).is_some()
    }

    /// All commits, oldest first
    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Walk the parent chain starting at `start`, newest first
    ///
    /// The walk stops at the root commit or at the first parent that is not in
    /// the database.
    pub fn ancestors(&self, start: Option<&ObjectId>) -> Ancestors<'_> {
        Ancestors {
            database: self,
            next: start.cloned(),
        }
    }

    pub fn clear(&mut self) {
        self.commits.clear();
    }
}

pub struct Ancestors<'d> {
    database: &'d Database,
    next: Option<ObjectId>,
}

impl<'d> Iterator for Ancestors<'d> {
    type Item = &'d Commit;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.next.take()?;
        let commit = self.database.load(&oid)?;
        self.next = commit.parent().cloned();

        Some(commit)
    }
}

//! Staging area
//!
//! Tracks the files (and their content at staging time) that go into the next
//! commit. Content is copied on staging, so later edits to the working
//! directory do not leak into the index.

use crate::artifacts::objects::FileMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    entries: FileMap,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, content: &str) {
        self.entries.insert(name.to_string(), content.to_string());
    }

    /// Replace every entry with a copy of `files`
    ///
    /// Entries that are not part of `files` are dropped.
    pub fn stage_all(&mut self, files: &FileMap) {
        self.entries = files.clone();
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn entries(&self) -> &FileMap {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

//! Working directory
//!
//! An in-memory file set the user edits through `writeFile`, `rm`, checkout
//! and merge. Nothing is read from or written to disk.

use crate::artifacts::objects::FileMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workspace {
    files: FileMap,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a file
    pub fn write_file(&mut self, name: &str, content: &str) {
        self.files.insert(name.to_string(), content.to_string());
    }

    pub fn read_file(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    pub fn remove_file(&mut self, name: &str) -> Option<String> {
        self.files.remove(name)
    }

    pub fn files(&self) -> &FileMap {
        &self.files
    }

    /// Replace the whole file set, discarding uncommitted edits
    pub fn replace(&mut self, files: FileMap) {
        self.files = files;
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}

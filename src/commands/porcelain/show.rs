use crate::areas::repository::Repository;
use crate::artifacts::errors::RepositoryError;

impl Repository {
    /// Current content of a file, falling back to its content at HEAD
    pub fn show(&self, path: &str) -> anyhow::Result<String> {
        if let Some(content) = self.workspace().read_file(path) {
            return Ok(content.to_string());
        }

        self.head_commit()
            .and_then(|commit| commit.file(path))
            .map(str::to_string)
            .ok_or_else(|| RepositoryError::PathDoesNotExist(path.to_string()).into())
    }
}

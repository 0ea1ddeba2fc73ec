use crate::areas::repository::Repository;
use crate::artifacts::errors::RepositoryError;
use crate::artifacts::log::LogEntry;

impl Repository {
    /// History reachable from HEAD, newest first
    ///
    /// Only parent links are followed, so commits made on other branches after
    /// they diverged are not listed.
    pub fn log(&self) -> anyhow::Result<Vec<LogEntry>> {
        let head = self.refs().read_head().ok_or_else(|| {
            RepositoryError::NoCommitsYet(self.refs().current_branch().to_string())
        })?;

        if !self.database().contains(head) {
            anyhow::bail!("Commit object not found: {}", head);
        }

        Ok(self
            .database()
            .ancestors(Some(head))
            .map(LogEntry::from)
            .collect())
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::errors::RepositoryError;
use crate::artifacts::objects::commit::{Commit, CommitSummary};

impl Repository {
    /// Record the staging area as a new commit on the current branch
    ///
    /// The new commit's parent is the current HEAD. HEAD and the current
    /// branch move to the new commit and the staging area is emptied.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<CommitSummary> {
        if self.index().is_empty() {
            return Err(RepositoryError::NothingToCommit.into());
        }

        let parent = self.refs().read_head().cloned();
        let files = self.index().entries().clone();
        let author = self.config().author.clone();
        let message = message.trim().to_string();
        let sequence = self.next_sequence();

        let commit = Commit::new(sequence, parent, files, author, message)?;
        let commit_id = commit.id().clone();
        let summary = CommitSummary::new(self.refs().current_branch().clone(), &commit);

        self.database_mut().store(commit);
        self.refs_mut().update_head(commit_id.clone())?;
        self.index_mut().clear();

        debug_log!(
            "{} advanced to {}",
            self.refs().current_branch(),
            commit_id.to_short_oid()
        );

        Ok(summary)
    }
}

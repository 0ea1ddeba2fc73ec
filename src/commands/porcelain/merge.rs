use crate::areas::repository::Repository;
use crate::artifacts::errors::RepositoryError;
use crate::artifacts::objects::commit::CommitSummary;

const UP_TO_DATE: &str = "Already up to date.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The branch was merged into itself
    UpToDate,
    /// The union of both file sets was committed
    Merged(CommitSummary),
}

impl std::fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MergeOutcome::UpToDate => write!(f, "{}", UP_TO_DATE),
            MergeOutcome::Merged(summary) => write!(f, "{}", summary),
        }
    }
}

impl Repository {
    /// Merge another branch into the current one
    ///
    /// There is no common ancestor and no conflict detection: the target
    /// commit's files are laid over the working directory (the target wins on
    /// every collision), the result is staged in full and committed right away
    /// with a single parent, the current HEAD.
    pub fn merge(&mut self, target: &str) -> anyhow::Result<MergeOutcome> {
        let target_branch = self
            .refs()
            .branch(target)
            .cloned()
            .ok_or_else(|| RepositoryError::NotSomethingWeCanMerge(target.to_string()))?;

        if *self.refs().current_branch() == *target {
            return Ok(MergeOutcome::UpToDate);
        }

        let target_files = target_branch
            .commit_id
            .as_ref()
            .and_then(|oid| self.database().load(oid))
            .map(|commit| commit.files().clone())
            .ok_or_else(|| RepositoryError::NoCommitForBranch(target.to_string()))?;

        let mut merged_files = self.workspace().files().clone();
        merged_files.extend(target_files);
        debug_log!(
            "merging {} into {} ({} files)",
            target,
            self.refs().current_branch(),
            merged_files.len()
        );

        self.index_mut().stage_all(&merged_files);
        self.workspace_mut().replace(merged_files);

        let summary = self.commit(&format!("Merge branch '{}'", target))?;

        Ok(MergeOutcome::Merged(summary))
    }
}

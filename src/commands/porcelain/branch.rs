use crate::areas::repository::Repository;
use crate::artifacts::branch::BranchListEntry;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::errors::RepositoryError;

impl Repository {
    /// Create a branch pointing at the commit currently checked out
    ///
    /// Without any commit the new branch is empty, just like the default one.
    pub fn branch(&mut self, name: &str) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(name.to_string())
            .map_err(|_| RepositoryError::InvalidBranchName(name.to_string()))?;
        let source_oid = self.refs().read_head().cloned();

        self.refs_mut().create_branch(branch_name, source_oid)?;
        debug_log!("created branch {}", name);

        Ok(())
    }

    /// Every branch in creation order, flagging the current one
    pub fn list_branches(&self) -> Vec<BranchListEntry> {
        self.refs().list_branches()
    }
}

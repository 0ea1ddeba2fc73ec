use crate::areas::repository::Repository;
use crate::artifacts::errors::RepositoryError;

impl Repository {
    /// Switch to an existing branch
    ///
    /// HEAD moves to the branch's commit and the working directory is
    /// overwritten with that commit's files; uncommitted edits are lost. A
    /// branch without commits leaves the working directory untouched. The
    /// staging area is kept as is.
    pub fn checkout(&mut self, name: &str) -> anyhow::Result<String> {
        let target_oid = self
            .refs()
            .branch(name)
            .map(|branch| branch.commit_id.clone())
            .ok_or_else(|| RepositoryError::BranchNotFound(name.to_string()))?;

        let target_files = match &target_oid {
            Some(oid) => Some(
                self.database()
                    .load(oid)
                    .map(|commit| commit.files().clone())
                    .ok_or_else(|| anyhow::anyhow!("Commit object not found: {}", oid))?,
            ),
            None => None,
        };

        let already_on = *self.refs().current_branch() == *name;
        self.refs_mut().switch_to(name)?;

        if let Some(files) = target_files {
            self.workspace_mut().replace(files);
        }
        debug_log!("checked out {} at {:?}", name, target_oid);

        if already_on {
            Ok(format!("Already on '{}'", name))
        } else {
            Ok(format!("Switched to branch '{}'", name))
        }
    }
}

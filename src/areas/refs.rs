//! Branches and HEAD
//!
//! Branches are kept in creation order. HEAD is the commit currently checked
//! out; `None` means no commit has been made (or checked out) yet.
//!
//! Invariants:
//! - `current_branch` always names an entry of `branches`
//! - a branch's `commit_id`, once set, names a stored commit

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::{Branch, BranchListEntry};
use crate::artifacts::errors::RepositoryError;
use crate::artifacts::objects::object_id::ObjectId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refs {
    branches: Vec<Branch>,
    current_branch: BranchName,
    head: Option<ObjectId>,
}

impl Refs {
    /// Seed the refs with a single empty branch that is checked out
    pub fn new(default_branch: BranchName) -> Self {
        Refs {
            branches: vec![Branch::new(default_branch.clone(), None)],
            current_branch: default_branch,
            head: None,
        }
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn branch(&self, name: &str) -> Option<&Branch> {
        self.branches.iter().find(|branch| branch.name == *name)
    }

    pub fn branch_exists(&self, name: &str) -> bool {
        self.branch(name).is_some()
    }

    pub fn current_branch(&self) -> &BranchName {
        &self.current_branch
    }

    pub fn read_head(&self) -> Option<&ObjectId> {
        self.head.as_ref()
    }

    pub fn create_branch(
        &mut self,
        name: BranchName,
        target: Option<ObjectId>,
    ) -> Result<(), RepositoryError> {
        if self.branch_exists(name.as_ref()) {
            return Err(RepositoryError::BranchAlreadyExists(name.to_string()));
        }

        self.branches.push(Branch::new(name, target));
        Ok(())
    }

    /// Point HEAD and the current branch at a freshly created commit
    pub fn update_head(&mut self, oid: ObjectId) -> anyhow::Result<()> {
        let current = self.current_branch.clone();
        let branch = self
            .branches
            .iter_mut()
            .find(|branch| branch.name == current)
            .ok_or_else(|| anyhow::anyhow!("current branch '{}' is missing", current))?;

        branch.commit_id = Some(oid.clone());
        self.head = Some(oid);

        Ok(())
    }

    /// Make `name` the current branch and move HEAD to its commit
    ///
    /// # Returns
    ///
    /// The commit the branch points at, if any
    pub fn switch_to(&mut self, name: &str) -> Result<Option<ObjectId>, RepositoryError> {
        let branch = self
            .branch(name)
            .cloned()
            .ok_or_else(|| RepositoryError::BranchNotFound(name.to_string()))?;

        self.current_branch = branch.name;
        self.head = branch.commit_id.clone();

        Ok(branch.commit_id)
    }

    pub fn list_branches(&self) -> Vec<BranchListEntry> {
        self.branches
            .iter()
            .map(|branch| {
                BranchListEntry::new(branch.name.clone(), branch.name == self.current_branch)
            })
            .collect()
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::branch::Branch;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::FileMap;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use serde::{Deserialize, Serialize};

/// A fully independent copy of the repository state, for display
///
/// Commits are listed oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySnapshot {
    pub working_directory: FileMap,
    pub staging_area: FileMap,
    pub commits: Vec<Commit>,
    pub branches: Vec<Branch>,
    pub current_branch: BranchName,
    #[serde(rename = "HEAD")]
    pub head: Option<ObjectId>,
}

impl RepositorySnapshot {
    /// The state of a freshly constructed repository
    pub fn initial(default_branch: BranchName) -> Self {
        RepositorySnapshot {
            working_directory: FileMap::new(),
            staging_area: FileMap::new(),
            commits: vec![],
            branches: vec![Branch::new(default_branch.clone(), None)],
            current_branch: default_branch,
            head: None,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Repository {
    pub fn snapshot(&self) -> RepositorySnapshot {
        RepositorySnapshot {
            working_directory: self.workspace().files().clone(),
            staging_area: self.index().entries().clone(),
            commits: self.database().commits().to_vec(),
            branches: self.refs().branches().to_vec(),
            current_branch: self.refs().current_branch().clone(),
            head: self.refs().read_head().cloned(),
        }
    }
}

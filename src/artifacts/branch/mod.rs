use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use serde::{Deserialize, Serialize};

pub mod branch_name;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// A named pointer into the commit list
///
/// `commit_id` is `None` until the first commit is made on the branch (or on
/// the branch it was created from).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub name: BranchName,
    pub commit_id: Option<ObjectId>,
}

/// One line of `git branch` output
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct BranchListEntry {
    pub name: BranchName,
    pub is_current: bool,
}

impl std::fmt::Display for BranchListEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = if self.is_current { "*" } else { " " };
        write!(f, "{} {}", marker, self.name)
    }
}

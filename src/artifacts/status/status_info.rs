use crate::artifacts::branch::branch_name::BranchName;

const LABEL_WIDTH: usize = 2;

/// Classification of the staging area and the working directory
///
/// Each file lands in at most one list. All lists are sorted by file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub branch: BranchName,
    /// Present in the staging area
    pub staged: Vec<String>,
    /// Not staged, committed at HEAD with different content
    pub modified: Vec<String>,
    /// Not staged, absent from HEAD (or no commit yet)
    pub untracked: Vec<String>,
}

impl StatusReport {
    pub fn new(branch: BranchName) -> Self {
        StatusReport {
            branch,
            staged: vec![],
            modified: vec![],
            untracked: vec![],
        }
    }

    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.modified.is_empty() && self.untracked.is_empty()
    }
}

impl std::fmt::Display for StatusReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "On branch {}", self.branch)?;

        if self.is_clean() {
            writeln!(f)?;
            return write!(f, "nothing to commit, working tree clean");
        }

        let sections = [
            ("Changes to be committed:", "new file:   ", &self.staged),
            ("Changes not staged for commit:", "modified:   ", &self.modified),
            ("Untracked files:", "", &self.untracked),
        ];

        for (title, label, files) in sections {
            if files.is_empty() {
                continue;
            }

            writeln!(f)?;
            writeln!(f, "{}", title)?;
            for file in files {
                writeln!(f, "{:>width$}{}{}", "", label, file, width = LABEL_WIDTH)?;
            }
        }

        Ok(())
    }
}

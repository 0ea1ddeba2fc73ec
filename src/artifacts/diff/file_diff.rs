const NULL_PATH: &str = "/dev/null";
const NO_CHANGES: &str = "no changes detected";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileDiff {
    /// File absent from the last commit (or there is no commit yet)
    Added { path: String, content: String },
    /// File committed with different content
    Modified {
        path: String,
        old_content: String,
        new_content: String,
    },
}

impl FileDiff {
    pub fn path(&self) -> &str {
        match self {
            FileDiff::Added { path, .. } | FileDiff::Modified { path, .. } => path,
        }
    }
}

impl std::fmt::Display for FileDiff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let path = self.path();
        writeln!(f, "diff --git a/{path} b/{path}")?;

        match self {
            FileDiff::Added { content, .. } => {
                writeln!(f, "new file")?;
                writeln!(f, "--- {NULL_PATH}")?;
                writeln!(f, "+++ b/{path}")?;
                write!(f, "+{content}")
            }
            FileDiff::Modified {
                old_content,
                new_content,
                ..
            } => {
                writeln!(f, "--- a/{path}")?;
                writeln!(f, "+++ b/{path}")?;
                writeln!(f, "-{old_content}")?;
                write!(f, "+{new_content}")
            }
        }
    }
}

/// All file differences, ordered by path
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffReport {
    pub files: Vec<FileDiff>,
}

impl DiffReport {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl std::fmt::Display for DiffReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "{NO_CHANGES}");
        }

        let hunks = self
            .files
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n\n");
        write!(f, "{hunks}")
    }
}

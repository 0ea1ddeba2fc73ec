use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

/// One commit as shown by `git log`, in medium format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: ObjectId,
    pub author: String,
    pub date: String,
    pub message: String,
}

impl From<&Commit> for LogEntry {
    fn from(commit: &Commit) -> Self {
        LogEntry {
            id: commit.id().clone(),
            author: commit.author().to_string(),
            date: commit.readable_timestamp(),
            message: commit.message().to_string(),
        }
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "commit {}", self.id)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "Date:   {}", self.date)?;
        writeln!(f)?;

        let lines = self
            .message
            .lines()
            .map(|line| format!("    {}", line))
            .collect::<Vec<_>>();
        write!(f, "{}", lines.join("\n"))
    }
}

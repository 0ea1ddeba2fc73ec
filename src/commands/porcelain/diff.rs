use crate::areas::repository::Repository;
use crate::artifacts::diff::file_diff::{DiffReport, FileDiff};

impl Repository {
    /// Compare every working directory file with its version at HEAD
    ///
    /// Files unchanged since HEAD produce nothing; files deleted from the
    /// working directory are not reported.
    pub fn diff(&self) -> DiffReport {
        let head_commit = self.head_commit();

        let files = self
            .workspace()
            .files()
            .iter()
            .filter_map(|(path, content)| {
                match head_commit.and_then(|commit| commit.file(path)) {
                    None => Some(FileDiff::Added {
                        path: path.clone(),
                        content: content.clone(),
                    }),
                    Some(committed) if committed != content.as_str() => Some(FileDiff::Modified {
                        path: path.clone(),
                        old_content: committed.to_string(),
                        new_content: content.clone(),
                    }),
                    Some(_) => None,
                }
            })
            .collect();

        DiffReport { files }
    }
}

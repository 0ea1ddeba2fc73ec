use crate::areas::repository::Repository;
use crate::artifacts::errors::RepositoryError;

impl Repository {
    /// Remove files from both the working directory and the staging area
    ///
    /// Every path must exist in the working directory; nothing is removed
    /// otherwise.
    pub fn rm(&mut self, paths: &[String]) -> anyhow::Result<Vec<String>> {
        if paths.is_empty() {
            return Err(RepositoryError::MissingFileName.into());
        }

        if let Some(missing) = paths.iter().find(|path| !self.workspace().contains(path)) {
            return Err(RepositoryError::PathspecNotFound(missing.clone()).into());
        }

        let removed = paths
            .iter()
            .map(|path| {
                self.workspace_mut().remove_file(path);
                self.index_mut().remove(path);
                debug_log!("removed {}", path);

                format!("rm '{}'", path)
            })
            .collect();

        Ok(removed)
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::command::Command;
use crate::artifacts::errors::RepositoryError;

impl Repository {
    /// Stage files for the next commit
    ///
    /// `.` replaces the staging area with a copy of the whole working
    /// directory. Any other path stages that file's current content. Every
    /// path is checked before anything is staged.
    pub fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        if paths.is_empty() {
            return Err(RepositoryError::NothingSpecified.into());
        }

        if let Some(missing) = paths
            .iter()
            .find(|path| !Command::is_stage_all(path) && !self.workspace().contains(path))
        {
            return Err(RepositoryError::PathspecNotFound(missing.clone()).into());
        }

        if paths.iter().any(|path| Command::is_stage_all(path)) {
            let files = self.workspace().files().clone();
            self.index_mut().stage_all(&files);
            debug_log!("staged whole working directory ({} files)", files.len());

            return Ok(());
        }

        for path in paths {
            let content = self
                .workspace()
                .read_file(path)
                .map(str::to_string)
                .ok_or_else(|| RepositoryError::PathspecNotFound(path.clone()))?;
            self.index_mut().add(path, &content);
            debug_log!("staged {}", path);
        }

        Ok(())
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::command::ResetMode;

const UNSTAGED: &str = "Unstaged changes after reset";
const INITIAL_HEAD: &str = "initial";

impl Repository {
    /// Clear the staging area
    ///
    /// `--hard` additionally rewrites the working directory from HEAD's
    /// files, or empties it when there is no commit yet.
    pub fn reset(&mut self, mode: ResetMode) -> String {
        self.index_mut().clear();

        match mode {
            ResetMode::Mixed => UNSTAGED.to_string(),
            ResetMode::Hard => {
                let files = self
                    .head_commit()
                    .map(|commit| commit.files().clone())
                    .unwrap_or_default();
                self.workspace_mut().replace(files);

                let head = self
                    .refs()
                    .read_head()
                    .map(|oid| oid.to_short_oid())
                    .unwrap_or_else(|| INITIAL_HEAD.to_string());
                debug_log!("hard reset to {}", head);

                format!("HEAD is now at {}", head)
            }
        }
    }
}

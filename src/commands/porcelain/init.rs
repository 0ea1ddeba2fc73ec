use crate::areas::repository::Repository;

const INITIALIZED: &str = "Initialized empty Git repository";
const REINITIALIZED: &str = "Reinitialized existing Git repository";

impl Repository {
    /// Report whether the repository already has history
    ///
    /// The repository is ready from construction on, so this never changes
    /// state.
    pub fn init(&self) -> String {
        if self.database().is_empty() {
            INITIALIZED.to_string()
        } else {
            REINITIALIZED.to_string()
        }
    }
}

use crate::areas::repository::Repository;

impl Repository {
    /// Create or overwrite a working directory file without staging it
    pub fn write_file(&mut self, filename: &str, content: &str) {
        self.workspace_mut().write_file(filename, content);
        debug_log!("wrote {} ({} bytes)", filename, content.len());
    }
}

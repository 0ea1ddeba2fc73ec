use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::StatusReport;

// Terminology:
// - staged files: every file in the staging area, present in the working directory or not
// - modified files: unstaged working directory files whose content differs from HEAD
// - untracked files: unstaged working directory files that HEAD does not contain
impl Repository {
    pub fn status(&self) -> StatusReport {
        let head_commit = self.head_commit();
        let mut report = StatusReport::new(self.refs().current_branch().clone());

        report.staged = self.index().entries().keys().cloned().collect();

        for (file, content) in self.workspace().files() {
            if self.index().contains(file) {
                continue;
            }

            match head_commit.and_then(|commit| commit.file(file)) {
                None => report.untracked.push(file.clone()),
                Some(committed) if committed != content.as_str() => report.modified.push(file.clone()),
                Some(_) => {}
            }
        }

        report
    }
}

use crate::areas::repository::Repository;

impl Repository {
    /// Restore the construction-time state
    ///
    /// Afterwards there are no commits, both file maps are empty and the only
    /// branch is the empty default branch, which is checked out.
    pub fn reset_simulator(&mut self) {
        self.clear();
        debug_log!("simulator reset");
    }
}

use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Commit;
use crate::config::Config;

/// The sandbox repository
///
/// Owns every storage area. Commands take `&mut self` and mutate the areas in
/// place; callers serialize command submission.
#[derive(Debug, Clone)]
pub struct Repository {
    config: Config,
    workspace: Workspace,
    index: Index,
    database: Database,
    refs: Refs,
    sequence: u64,
}

impl Repository {
    pub fn new(config: Config) -> Self {
        let refs = Refs::new(config.default_branch.clone());

        Repository {
            config,
            workspace: Workspace::new(),
            index: Index::new(),
            database: Database::new(),
            refs,
            sequence: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub(crate) fn workspace_mut(&mut self) -> &mut Workspace {
        &mut self.workspace
    }

    pub(crate) fn index(&self) -> &Index {
        &self.index
    }

    pub(crate) fn index_mut(&mut self) -> &mut Index {
        &mut self.index
    }

    pub(crate) fn database(&self) -> &Database {
        &self.database
    }

    pub(crate) fn database_mut(&mut self) -> &mut Database {
        &mut self.database
    }

    pub(crate) fn refs(&self) -> &Refs {
        &self.refs
    }

    pub(crate) fn refs_mut(&mut self) -> &mut Refs {
        &mut self.refs
    }

    /// The commit HEAD points at, if any
    pub(crate) fn head_commit(&self) -> Option<&Commit> {
        self.refs
            .read_head()
            .and_then(|oid| self.database.load(oid))
    }

    /// Hand out the next commit sequence number
    pub(crate) fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    /// Drop every area back to its construction-time state
    pub(crate) fn clear(&mut self) {
        self.workspace.clear();
        self.index.clear();
        self.database.clear();
        self.refs = Refs::new(self.config.default_branch.clone());
    }
}

impl Default for Repository {
    fn default() -> Self {
        Repository::new(Config::default())
    }
}

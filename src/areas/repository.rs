use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::state::RepositoryState;
use crate::areas::workspace::{REPOSITORY_DIR, Workspace};
use crate::artifacts::objects::commit::Commit;
use crate::config::Config;
use crate::errors::RepositoryError;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Name of the repository state file inside the metadata directory
const STATE_FILE: &str = "state";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
    state: RepositoryState,
    config: Config,
}

impl Repository {
    /// Open the repository rooted at `path`
    ///
    /// Fails with `NotInitialized` when `path` holds no repository.
    pub fn open(
        path: &Path,
        writer: Box<dyn std::io::Write>,
        config: Config,
    ) -> anyhow::Result<Self> {
        let path = path.canonicalize()?;
        let state_path = Self::state_path_of(&path);

        if !state_path.is_file() {
            return Err(RepositoryError::NotInitialized.into());
        }

        let state = RepositoryState::load(&state_path)?;
        tracing::debug!(path = %path.display(), branch = %state.refs.current_branch(), "opened repository");

        Ok(Self::with_state(path, writer, config, state))
    }

    pub(crate) fn with_state(
        path: PathBuf,
        writer: Box<dyn std::io::Write>,
        config: Config,
        state: RepositoryState,
    ) -> Self {
        let metadata_path = path.join(REPOSITORY_DIR);
        let database = Database::new(metadata_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            workspace,
            state,
            config,
        }
    }

    /// Persist the branch table and staging area
    pub fn save(&self) -> anyhow::Result<()> {
        self.state.save(&Self::state_path_of(&self.path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.path.join(REPOSITORY_DIR)
    }

    pub(crate) fn state_path_of(path: &Path) -> PathBuf {
        path.join(REPOSITORY_DIR).join(STATE_FILE)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn refs(&self) -> &Refs {
        &self.state.refs
    }

    pub fn refs_mut(&mut self) -> &mut Refs {
        &mut self.state.refs
    }

    pub fn index(&self) -> &Index {
        &self.state.index
    }

    pub fn index_mut(&mut self) -> &mut Index {
        &mut self.state.index
    }

    /// Head commit of the active branch
    pub fn head_commit(&self) -> anyhow::Result<Commit> {
        self.database.load_commit(self.refs().read_head()?)
    }
}

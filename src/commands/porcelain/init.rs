use crate::areas::refs::Refs;
use crate::areas::repository::Repository;
use crate::areas::state::RepositoryState;
use crate::areas::workspace::REPOSITORY_DIR;
use crate::artifacts::branch::DEFAULT_BRANCH;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_type::ObjectType;
use crate::config::Config;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Create a repository in `path` holding only the root commit
    pub fn init(
        path: &Path,
        writer: Box<dyn std::io::Write>,
        config: Config,
    ) -> anyhow::Result<Self> {
        let path = path.canonicalize()?;
        let metadata_path = path.join(REPOSITORY_DIR);

        if metadata_path.exists() {
            return Err(RepositoryError::AlreadyInitialized.into());
        }

        for object_type in [ObjectType::Blob, ObjectType::Commit] {
            let objects_path = metadata_path.join("objects").join(object_type.store_dir());
            fs::create_dir_all(&objects_path).with_context(|| {
                format!("Failed to create {} directory", objects_path.display())
            })?;
        }

        let root = Commit::root();
        let refs = Refs::new(
            BranchName::try_parse(DEFAULT_BRANCH.to_string())?,
            root.object_id().clone(),
        );
        let repository = Self::with_state(path, writer, config, RepositoryState::new(refs));

        repository.database().store(&root)?;
        repository.save()?;
        tracing::debug!(root = %root.object_id(), "initialized repository");

        writeln!(
            repository.writer(),
            "Initialized empty twig repository in {}",
            repository.metadata_path().display()
        )?;

        Ok(repository)
    }
}

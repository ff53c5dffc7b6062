//! Domain errors
//!
//! Every expected, user-facing failure of a command is a [`RepositoryError`].
//! Commands propagate them through `anyhow`, and the binary recovers them by
//! downcasting so the message can be printed as the single line of output.
//! Anything that is not a `RepositoryError` (I/O failures, corrupted objects)
//! is an internal error.

use thiserror::Error;

/// Coarse classification of domain errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing repository, unknown command, wrong arguments
    Usage,
    /// A file, commit or branch that was asked for does not exist
    NotFound,
    /// The repository is not in a state that allows the operation
    StateConflict,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Please enter a command.")]
    MissingCommand,

    #[error("No command with that name exists.")]
    UnknownCommand,

    #[error("Incorrect operands.")]
    IncorrectOperands,

    #[error("Not in an initialized twig directory.")]
    NotInitialized,

    #[error("A twig version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("File does not exist.")]
    FileNotFound,

    #[error("No commit with that id exists.")]
    CommitNotFound,

    #[error("File does not exist in that commit.")]
    FileNotInCommit,

    #[error("No such branch exists.")]
    NoSuchBranch,

    #[error("A branch with that name does not exist.")]
    UnknownBranch,

    #[error("Found no commit with that message.")]
    NoCommitWithMessage,

    #[error("Please enter a commit message.")]
    EmptyCommitMessage,

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("No reason to remove the file.")]
    NoReasonToRemove,

    #[error("A branch with that name already exists.")]
    BranchExists,

    #[error("Cannot remove the current branch.")]
    RemoveCurrentBranch,

    #[error("No need to checkout the current branch.")]
    CheckoutCurrentBranch,

    #[error("Cannot merge a branch with itself.")]
    SelfMerge,

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedFileInTheWay,
}

impl RepositoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RepositoryError::MissingCommand
            | RepositoryError::UnknownCommand
            | RepositoryError::IncorrectOperands
            | RepositoryError::NotInitialized
            | RepositoryError::AlreadyInitialized
            | RepositoryError::InvalidBranchName(_) => ErrorKind::Usage,
            RepositoryError::FileNotFound
            | RepositoryError::CommitNotFound
            | RepositoryError::FileNotInCommit
            | RepositoryError::NoSuchBranch
            | RepositoryError::UnknownBranch
            | RepositoryError::NoCommitWithMessage => ErrorKind::NotFound,
            RepositoryError::EmptyCommitMessage
            | RepositoryError::NothingToCommit
            | RepositoryError::NoReasonToRemove
            | RepositoryError::BranchExists
            | RepositoryError::RemoveCurrentBranch
            | RepositoryError::CheckoutCurrentBranch
            | RepositoryError::SelfMerge
            | RepositoryError::UncommittedChanges
            | RepositoryError::UntrackedFileInTheWay => ErrorKind::StateConflict,
        }
    }
}

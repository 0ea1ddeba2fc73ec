use thiserror::Error;

/// Conditions reported back to the user instead of failing the session
///
/// The `Display` text is exactly what the user sees. Every operation checks
/// for these before it mutates anything, so the repository is unchanged when
/// one of them is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("fatal: your current branch '{0}' does not have any commits yet")]
    NoCommitsYet(String),

    #[error("Nothing specified, nothing added.")]
    NothingSpecified,

    #[error("error: missing branch name")]
    MissingBranchName,

    #[error("error: missing file name")]
    MissingFileName,

    #[error("error: switch `m' requires a value")]
    MissingCommitMessage,

    #[error("fatal: pathspec '{0}' did not match any files")]
    PathspecNotFound(String),

    #[error("error: pathspec '{0}' did not match any file(s) known to git")]
    BranchNotFound(String),

    #[error("fatal: A branch named '{0}' already exists")]
    BranchAlreadyExists(String),

    #[error("fatal: '{0}' is not a valid branch name")]
    InvalidBranchName(String),

    #[error("merge: {0} - not something we can merge")]
    NotSomethingWeCanMerge(String),

    #[error("fatal: no commit found for branch '{0}'")]
    NoCommitForBranch(String),

    #[error("nothing to commit")]
    NothingToCommit,

    #[error("fatal: Path '{0}' does not exist")]
    PathDoesNotExist(String),

    #[error("error: unsupported reset mode '{0}' (use --mixed or --hard)")]
    UnsupportedResetMode(String),

    #[error("git: '{0}' is not a git command. See 'git --help'.")]
    NotAGitCommand(String),
}

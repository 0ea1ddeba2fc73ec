//! Command vocabulary
//!
//! A command line is split on whitespace; the first token selects the command
//! and the rest are its arguments. A leading `git` token is optional and is
//! stripped before dispatching on the remainder.

use crate::artifacts::errors::RepositoryError;

const GIT_PREFIX: &str = "git";
const STAGE_ALL: &str = ".";
const MESSAGE_FLAG: &str = "-m";
const QUOTES: [char; 2] = ['"', '\''];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Init,
    Status,
    Add,
    Commit,
    Log,
    Branch,
    Checkout,
    Diff,
    Merge,
    Reset,
    Rm,
    Show,
}

const COMMANDS: phf::Map<&'static str, CommandKind> = phf::phf_map! {
    "init" => CommandKind::Init,
    "status" => CommandKind::Status,
    "add" => CommandKind::Add,
    "commit" => CommandKind::Commit,
    "log" => CommandKind::Log,
    "branch" => CommandKind::Branch,
    "checkout" => CommandKind::Checkout,
    "diff" => CommandKind::Diff,
    "merge" => CommandKind::Merge,
    "reset" => CommandKind::Reset,
    "rm" => CommandKind::Rm,
    "show" => CommandKind::Show,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetMode {
    /// Clear the staging area only
    #[default]
    Mixed,
    /// Clear the staging area and restore the working directory from HEAD
    Hard,
}

impl ResetMode {
    pub fn try_parse(flag: &str) -> Result<Self, RepositoryError> {
        match flag {
            "--mixed" => Ok(ResetMode::Mixed),
            "--hard" => Ok(ResetMode::Hard),
            other => Err(RepositoryError::UnsupportedResetMode(other.to_string())),
        }
    }
}

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line, or a bare `git`
    Empty,
    Init,
    Status,
    /// Paths to stage; `.` stages the whole working directory
    Add { paths: Vec<String> },
    Commit { message: String },
    Log,
    ListBranches,
    Branch { name: String },
    Checkout { name: String },
    Diff,
    Merge { branch: String },
    Reset { mode: ResetMode },
    Rm { paths: Vec<String> },
    Show { path: String },
}

impl Command {
    pub fn try_parse(line: &str) -> Result<Self, RepositoryError> {
        let tokens = line.split_whitespace().collect::<Vec<_>>();
        Self::from_tokens(&tokens)
    }

    fn from_tokens(tokens: &[&str]) -> Result<Self, RepositoryError> {
        let Some((keyword, args)) = tokens.split_first() else {
            return Ok(Command::Empty);
        };

        if *keyword == GIT_PREFIX {
            return Self::from_tokens(args);
        }

        let kind = COMMANDS
            .get(*keyword)
            .copied()
            .ok_or_else(|| RepositoryError::NotAGitCommand(keyword.to_string()))?;

        let command = match kind {
            CommandKind::Init => Command::Init,
            CommandKind::Status => Command::Status,
            CommandKind::Add => Command::Add {
                paths: Self::required_all(args, RepositoryError::NothingSpecified)?,
            },
            CommandKind::Commit => Command::Commit {
                message: Self::commit_message(args)?,
            },
            CommandKind::Log => Command::Log,
            CommandKind::Branch => match args.first() {
                Some(name) => Command::Branch {
                    name: name.to_string(),
                },
                None => Command::ListBranches,
            },
            CommandKind::Checkout => Command::Checkout {
                name: Self::required_first(args, RepositoryError::MissingBranchName)?,
            },
            CommandKind::Diff => Command::Diff,
            CommandKind::Merge => Command::Merge {
                branch: Self::required_first(args, RepositoryError::MissingBranchName)?,
            },
            CommandKind::Reset => Command::Reset {
                mode: match args.first() {
                    Some(flag) => ResetMode::try_parse(flag)?,
                    None => ResetMode::default(),
                },
            },
            CommandKind::Rm => Command::Rm {
                paths: Self::required_all(args, RepositoryError::MissingFileName)?,
            },
            CommandKind::Show => Command::Show {
                path: Self::required_first(args, RepositoryError::MissingFileName)?,
            },
        };

        Ok(command)
    }

    fn required_first(args: &[&str], missing: RepositoryError) -> Result<String, RepositoryError> {
        args.first().map(|arg| arg.to_string()).ok_or(missing)
    }

    fn required_all(args: &[&str], missing: RepositoryError) -> Result<Vec<String>, RepositoryError> {
        if args.is_empty() {
            return Err(missing);
        }

        Ok(args.iter().map(|arg| arg.to_string()).collect())
    }

    // `-m` must come first; the remaining words form the message
    fn commit_message(args: &[&str]) -> Result<String, RepositoryError> {
        match args.split_first() {
            Some((flag, words)) if *flag == MESSAGE_FLAG && !words.is_empty() => {
                let message = words.join(" ").trim_matches(QUOTES).trim().to_string();
                if message.is_empty() {
                    Err(RepositoryError::MissingCommitMessage)
                } else {
                    Ok(message)
                }
            }
            _ => Err(RepositoryError::MissingCommitMessage),
        }
    }

    /// Whether `path` asks for the whole working directory
    pub fn is_stage_all(path: &str) -> bool {
        path == STAGE_ALL
    }
}

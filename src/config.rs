use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::DEFAULT_AUTHOR;

const AUTHOR_ENV: &str = "GITSIM_AUTHOR_NAME";
const DEFAULT_BRANCH_ENV: &str = "GITSIM_DEFAULT_BRANCH";
const NO_COLOR_ENV: &str = "NO_COLOR";

/// Settings shared by the repository and the shell front-end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name recorded as the author of every commit
    pub author: String,
    /// Branch created on construction and restored by a simulator reset
    pub default_branch: BranchName,
    /// Whether the shell colorizes its output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            author: DEFAULT_AUTHOR.to_string(),
            default_branch: BranchName::default(),
            color: true,
        }
    }
}

impl Config {
    /// Load the configuration from environment variables
    ///
    /// Reads `GITSIM_AUTHOR_NAME` and `GITSIM_DEFAULT_BRANCH`; color is turned
    /// off when `NO_COLOR` is set. Unset variables keep their defaults.
    pub fn load_from_env() -> anyhow::Result<Self> {
        let mut config = Config::default();

        if let Ok(author) = std::env::var(AUTHOR_ENV)
            && !author.trim().is_empty()
        {
            config.author = author.trim().to_string();
        }

        if let Ok(branch) = std::env::var(DEFAULT_BRANCH_ENV) {
            config.default_branch = BranchName::try_parse(branch)?;
        }

        if std::env::var_os(NO_COLOR_ENV).is_some() {
            config.color = false;
        }

        Ok(config)
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_default_branch(mut self, branch: BranchName) -> Self {
        self.default_branch = branch;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

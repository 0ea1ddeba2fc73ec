use crate::areas::repository::Repository;
use crate::artifacts::command::Command;
use crate::artifacts::errors::RepositoryError;

impl Repository {
    /// Run a parsed command and render its output
    pub fn execute(&mut self, command: Command) -> anyhow::Result<String> {
        let output = match command {
            Command::Empty => String::new(),
            Command::Init => self.init(),
            Command::Status => self.status().to_string().trim_end().to_string(),
            Command::Add { paths } => {
                self.add(&paths)?;
                String::new()
            }
            Command::Commit { message } => self.commit(&message)?.to_string(),
            Command::Log => self
                .log()?
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n\n"),
            Command::ListBranches => self
                .list_branches()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
            Command::Branch { name } => {
                self.branch(&name)?;
                String::new()
            }
            Command::Checkout { name } => self.checkout(&name)?,
            Command::Diff => self.diff().to_string(),
            Command::Merge { branch } => self.merge(&branch)?.to_string(),
            Command::Reset { mode } => self.reset(mode),
            Command::Rm { paths } => self.rm(&paths)?.join("\n"),
            Command::Show { path } => self.show(&path)?,
        };

        Ok(output)
    }

    /// Parse and run one command line
    ///
    /// Never fails: reported conditions come back as their message and any
    /// other error as `Error: <detail>`. The repository stays usable either
    /// way.
    pub fn execute_command(&mut self, line: &str) -> String {
        let result = Command::try_parse(line)
            .map_err(anyhow::Error::from)
            .and_then(|command| self.execute(command));

        match result {
            Ok(output) => output,
            Err(error) => match error.downcast_ref::<RepositoryError>() {
                Some(reported) => reported.to_string(),
                None => format!("Error: {}", error),
            },
        }
    }
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gitsim::areas::repository::Repository;
use gitsim::artifacts::branch::branch_name::BranchName;
use gitsim::config::Config;
use gitsim::shell::Shell;
use is_terminal::IsTerminal;
use std::io::BufReader;

#[derive(Parser)]
#[command(
    name = "gitsim",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A git sandbox for learning the basics",
    long_about = "This is an in-memory sandbox that mimics a small subset of git. \
    Files, the staging area, commits and branches only live for the session, \
    so it is safe to experiment with any command.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(long, global = true, help = "Author name recorded on commits")]
    author: Option<String>,
    #[arg(long, global = true, help = "Name of the initial branch")]
    default_branch: Option<String>,
    #[arg(long, global = true, help = "Disable colored output")]
    no_color: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "shell",
        about = "Start an interactive session",
        long_about = "This command reads commands from standard input until end of input or `exit`. \
        It is the default when no command is given."
    )]
    Shell,
    #[command(
        name = "run",
        about = "Run a script of commands",
        long_about = "This command runs every line of the given file as if it was typed into the shell, \
        printing each line before its output."
    )]
    Run {
        #[arg(index = 1, help = "The path to the script")]
        script: String,
    },
    #[command(
        name = "exec",
        about = "Run a single command",
        long_about = "This command runs one command line against a fresh repository and prints its output."
    )]
    Exec {
        #[arg(index = 1, required = true, num_args = 1.., allow_hyphen_values = true)]
        words: Vec<String>,
    },
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_from_env()?;

    if let Some(author) = &cli.author {
        config = config.with_author(author.as_str());
    }
    if let Some(branch) = &cli.default_branch {
        config = config.with_default_branch(BranchName::try_parse(branch.clone())?);
    }
    if cli.no_color || !std::io::stdout().is_terminal() {
        config = config.with_color(false);
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if !config.color {
        colored::control::set_override(false);
    }

    let repository = Repository::new(config);
    let mut shell = Shell::new(repository, Box::new(std::io::stdout()))?;

    match &cli.command {
        None | Some(Commands::Shell) => {
            let stdin = std::io::stdin();
            let interactive = stdin.is_terminal();

            if interactive {
                shell.print_banner()?;
            }
            shell.run(stdin.lock(), false, interactive)?
        }
        Some(Commands::Run { script }) => {
            let file = std::fs::File::open(script)
                .with_context(|| format!("Failed to open script {}", script))?;

            shell.run(BufReader::new(file), true, false)?
        }
        Some(Commands::Exec { words }) => {
            shell.handle_line(&words.join(" "))?;
        }
    }

    Ok(())
}

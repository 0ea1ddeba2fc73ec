//! Interactive front-end
//!
//! Wraps a [`Repository`] in a line-oriented terminal session. Besides the git
//! vocabulary the shell understands a few builtins, most importantly
//! `echo "<content>" > <file>` for creating files.

use crate::areas::repository::Repository;
use anyhow::Context;
use colored::Colorize;
use std::io::{BufRead, Write};

const ECHO_REDIRECT_REGEX: &str = r#"^echo\s+["'](.*)["']\s*>\s*(\S+)$"#;
const PROMPT: &str = "$ ";

const HELP: &str = r#"Create files:
    echo "<content>" > <file>

Git commands (the leading `git` is optional):
    init                  report repository state
    status                show staged, modified and untracked files
    add <path|.>          stage a file, or the whole working directory
    commit -m <message>   record the staging area
    log                   show history reachable from HEAD
    branch [<name>]       list branches, or create one at HEAD
    checkout <name>       switch branches (discards uncommitted edits)
    diff                  compare the working directory with HEAD
    merge <name>          lay another branch's files over this one and commit
    reset [--mixed|--hard]
                          unstage everything; --hard also restores HEAD's files
    rm <path>             remove a file
    show <path>           print a file

Shell builtins:
    history               list previous commands
    state                 print the repository state as JSON
    restart               start over with an empty repository
    help                  show this help
    exit, quit            leave the shell"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellControl {
    Continue,
    Exit,
}

pub struct Shell {
    repository: Repository,
    writer: Box<dyn Write>,
    history: Vec<String>,
    color: bool,
    echo_redirect: regex::Regex,
}

impl Shell {
    pub fn new(repository: Repository, writer: Box<dyn Write>) -> anyhow::Result<Self> {
        let echo_redirect = regex::Regex::new(ECHO_REDIRECT_REGEX)
            .with_context(|| format!("invalid echo redirect regex: {ECHO_REDIRECT_REGEX}"))?;
        let color = repository.config().color;

        Ok(Shell {
            repository,
            writer,
            history: vec![],
            color,
            echo_redirect,
        })
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn print_banner(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "{}git init", PROMPT)?;
        writeln!(self.writer, "{}", self.repository.init())?;

        Ok(())
    }

    /// Handle one input line
    ///
    /// Blank lines are ignored and not recorded in the history.
    pub fn handle_line(&mut self, line: &str) -> anyhow::Result<ShellControl> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(ShellControl::Continue);
        }

        self.history.push(line.to_string());

        match line {
            "exit" | "quit" => return Ok(ShellControl::Exit),
            "help" => writeln!(self.writer, "{}", HELP)?,
            "history" => self.print_history()?,
            "state" => {
                let json = self.repository.snapshot().to_json()?;
                writeln!(self.writer, "{}", json)?;
            }
            "restart" => {
                self.repository.reset_simulator();
                self.history.clear();
                self.print_banner()?;
            }
            _ => {
                if let Some((content, filename)) = self.parse_echo_redirect(line) {
                    self.repository.write_file(&filename, &content);
                } else {
                    let output = self.repository.execute_command(line);
                    if !output.is_empty() {
                        let output = self.paint(&output);
                        writeln!(self.writer, "{}", output)?;
                    }
                }
            }
        }

        Ok(ShellControl::Continue)
    }

    /// Read lines until end of input or `exit`
    ///
    /// With `echo` every line is printed after the prompt before it runs,
    /// which makes script transcripts readable. With `prompt` a prompt is
    /// printed before each read.
    pub fn run<R: BufRead>(&mut self, mut reader: R, echo: bool, prompt: bool) -> anyhow::Result<()> {
        let mut line = String::new();

        loop {
            if prompt {
                write!(self.writer, "{}", PROMPT)?;
                self.writer.flush()?;
            }

            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }

            if echo && !line.trim().is_empty() {
                writeln!(self.writer, "{}{}", PROMPT, line.trim())?;
            }

            if self.handle_line(&line)? == ShellControl::Exit {
                break;
            }
        }

        self.writer.flush()?;
        Ok(())
    }

    fn parse_echo_redirect(&self, line: &str) -> Option<(String, String)> {
        let captures = self.echo_redirect.captures(line)?;
        let content = captures.get(1)?.as_str().to_string();
        let filename = captures.get(2)?.as_str().to_string();

        Some((content, filename))
    }

    fn print_history(&mut self) -> anyhow::Result<()> {
        for (number, entry) in self.history.iter().enumerate() {
            writeln!(self.writer, "{:>5}  {}", number + 1, entry)?;
        }

        Ok(())
    }

    fn paint(&self, output: &str) -> String {
        if !self.color {
            return output.to_string();
        }

        output
            .lines()
            .map(|line| {
                if line.starts_with("+++") || line.starts_with("---") || line.starts_with("diff --git") {
                    line.bold().to_string()
                } else if line.starts_with('+') {
                    line.green().to_string()
                } else if line.starts_with('-') {
                    line.red().to_string()
                } else if line.starts_with("fatal:") || line.starts_with("error:") {
                    line.red().to_string()
                } else if line.starts_with("commit ") {
                    line.yellow().to_string()
                } else if let Some(branch) = line.strip_prefix("* ") {
                    format!("* {}", branch.green())
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

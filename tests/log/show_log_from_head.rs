use crate::common::{commit_file, reported, repository};
use gitsim::areas::repository::Repository;
use gitsim::artifacts::errors::RepositoryError;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_without_commits_is_reported(repository: Repository) {
    let error = repository.log().unwrap_err();

    assert_eq!(
        reported(&error),
        Some(&RepositoryError::NoCommitsYet("main".to_string()))
    );
}

#[rstest]
fn log_lists_history_newest_first(
    mut repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    let first = commit_file(&mut repository, "a.txt", "1", "first")?;
    let second = commit_file(&mut repository, "a.txt", "2", "second")?;
    let third = commit_file(&mut repository, "a.txt", "3", "third")?;

    let entries = repository.log()?;

    assert_eq!(
        entries.iter().map(|entry| entry.id.clone()).collect::<Vec<_>>(),
        vec![third, second, first]
    );
    assert!(entries.iter().all(|entry| entry.author == "User"));

    Ok(())
}

#[rstest]
fn log_follows_only_current_branch_ancestry(
    mut repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    commit_file(&mut repository, "a.txt", "1", "base")?;
    repository.branch("feature")?;
    repository.checkout("feature")?;
    commit_file(&mut repository, "b.txt", "2", "feature work")?;
    repository.checkout("main")?;
    commit_file(&mut repository, "c.txt", "3", "main work")?;

    let messages = repository
        .log()?
        .into_iter()
        .map(|entry| entry.message)
        .collect::<Vec<_>>();

    assert_eq!(messages, vec!["main work".to_string(), "base".to_string()]);
    assert_eq!(repository.snapshot().commits.len(), 3);

    Ok(())
}

#[rstest]
fn log_output_uses_medium_format(
    mut repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    let oid = commit_file(&mut repository, "README.md", "# My Project", "Initial commit")?;

    let output = repository.execute_command("git log");
    let lines = output.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], format!("commit {}", oid));
    assert_eq!(lines[1], "Author: User");
    assert!(lines[2].starts_with("Date:   "));
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "    Initial commit");

    Ok(())
}

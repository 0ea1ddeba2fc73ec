use crate::common::{reported, repository};
use gitsim::areas::repository::Repository;
use gitsim::artifacts::errors::RepositoryError;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_stages_only_the_named_file(
    mut repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    repository.write_file("file1.txt", "content1");
    repository.write_file("file2.txt", "content2");

    repository.add(&["file1.txt".to_string()])?;

    let status = repository.status();
    assert_eq!(status.staged, vec!["file1.txt".to_string()]);
    assert_eq!(status.untracked, vec!["file2.txt".to_string()]);

    Ok(())
}

#[rstest]
fn add_missing_file_reports_pathspec_and_stages_nothing(mut repository: Repository) {
    repository.write_file("present.txt", "here");

    let error = repository
        .add(&["present.txt".to_string(), "missing.txt".to_string()])
        .unwrap_err();

    assert_eq!(
        reported(&error),
        Some(&RepositoryError::PathspecNotFound("missing.txt".to_string()))
    );
    assert_eq!(
        error.to_string(),
        "fatal: pathspec 'missing.txt' did not match any files"
    );
    assert!(repository.snapshot().staging_area.is_empty());
}

#[rstest]
fn add_through_command_line_prints_nothing(mut repository: Repository) {
    repository.write_file("README.md", "# My Project");

    assert_eq!(repository.execute_command("git add README.md"), "");
    assert_eq!(
        repository.execute_command("git add"),
        "Nothing specified, nothing added."
    );
}

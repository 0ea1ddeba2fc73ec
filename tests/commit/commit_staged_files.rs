use crate::common::{commit_file, generated_files, reported, repository};
use gitsim::areas::repository::Repository;
use gitsim::artifacts::errors::RepositoryError;
use gitsim::config::Config;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_records_snapshot_and_advances_head(
    mut repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = generated_files(4);
    for (name, content) in &files {
        repository.write_file(name, content);
    }
    repository.add(&[".".to_string()])?;

    let summary = repository.commit("Initial commit")?;

    let snapshot = repository.snapshot();
    let commit = &snapshot.commits[0];
    assert_eq!(snapshot.commits.len(), 1);
    assert_eq!(commit.id(), &summary.id);
    assert_eq!(commit.files(), &files);
    assert_eq!(commit.parent(), None);
    assert_eq!(commit.author(), "User");
    assert_eq!(commit.message(), "Initial commit");
    assert_eq!(snapshot.head.as_ref(), Some(commit.id()));
    assert_eq!(snapshot.branches[0].commit_id.as_ref(), Some(commit.id()));
    assert!(snapshot.staging_area.is_empty());

    Ok(())
}

#[rstest]
fn second_commit_has_previous_head_as_parent(
    mut repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    let first = commit_file(&mut repository, "a.txt", "1", "first")?;
    let second = commit_file(&mut repository, "b.txt", "2", "second")?;

    let snapshot = repository.snapshot();
    assert_ne!(first, second);
    assert_eq!(snapshot.commits[1].parent(), Some(&first));
    assert_eq!(snapshot.head, Some(second));
    // only b.txt was staged for the second commit
    assert_eq!(
        snapshot.commits[1].files().keys().collect::<Vec<_>>(),
        vec!["b.txt"]
    );

    Ok(())
}

#[rstest]
fn commit_with_empty_staging_area_is_reported(mut repository: Repository) {
    repository.write_file("a.txt", "unstaged");

    let error = repository.commit("nothing").unwrap_err();

    assert_eq!(reported(&error), Some(&RepositoryError::NothingToCommit));
    assert_eq!(error.to_string(), "nothing to commit");
    assert!(repository.snapshot().commits.is_empty());
}

#[rstest]
fn commit_confirmation_names_branch_and_short_id(
    mut repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    repository.write_file("README.md", "# My Project");
    repository.add(&["README.md".to_string()])?;

    let output = repository.execute_command(r#"git commit -m "Initial commit""#);

    let head = repository.snapshot().head.ok_or("missing HEAD")?;
    assert_eq!(
        output,
        format!("[main (root-commit) {}] Initial commit", head.to_short_oid())
    );
    assert_eq!(head.to_short_oid().len(), 7);

    repository.write_file("README.md", "# Changed");
    repository.add(&["README.md".to_string()])?;
    let output = repository.execute_command("git commit -m 'Update readme'");
    let head = repository.snapshot().head.ok_or("missing HEAD")?;
    assert_eq!(output, format!("[main {}] Update readme", head.to_short_oid()));

    Ok(())
}

#[rstest]
fn commit_without_message_flag_is_a_usage_error(mut repository: Repository) {
    repository.write_file("a.txt", "a");
    repository.add(&["a.txt".to_string()]).expect("stage a.txt");

    assert_eq!(
        repository.execute_command("git commit"),
        "error: switch `m' requires a value"
    );
    assert_eq!(
        repository.execute_command("git commit -m"),
        "error: switch `m' requires a value"
    );
    assert!(repository.snapshot().commits.is_empty());
    assert!(!repository.snapshot().staging_area.is_empty());
}

#[test]
fn commit_author_comes_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let mut repository = Repository::new(Config::default().with_author("Ada Lovelace"));

    commit_file(&mut repository, "a.txt", "a", "first")?;

    assert_eq!(repository.snapshot().commits[0].author(), "Ada Lovelace");

    Ok(())
}

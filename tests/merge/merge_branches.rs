use crate::common::{commit_file, committed_repository, reported, repository};
use gitsim::areas::repository::Repository;
use gitsim::artifacts::errors::RepositoryError;
use gitsim::commands::porcelain::merge::MergeOutcome;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_unions_files_and_commits(
    mut committed_repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    let main_head = committed_repository.snapshot().head;
    committed_repository.branch("feature")?;
    committed_repository.checkout("feature")?;
    committed_repository.write_file("3.txt", "three");
    committed_repository.write_file("1.txt", "one from feature");
    committed_repository.add(&[".".to_string()])?;
    committed_repository.commit("Feature work")?;
    committed_repository.checkout("main")?;
    committed_repository.write_file("local.txt", "uncommitted");

    let outcome = committed_repository.merge("feature")?;

    let snapshot = committed_repository.snapshot();
    let merge_commit = snapshot.commits.last().ok_or("missing merge commit")?;
    let MergeOutcome::Merged(summary) = outcome else {
        return Err("expected a merge commit".into());
    };

    assert_eq!(summary.message, "Merge branch 'feature'");
    assert_eq!(merge_commit.message(), "Merge branch 'feature'");
    assert_eq!(merge_commit.parent(), main_head.as_ref());
    assert_eq!(snapshot.head.as_ref(), Some(merge_commit.id()));
    assert!(snapshot.staging_area.is_empty());

    // the target branch wins on collisions, local files are kept
    let files = merge_commit.files();
    assert_eq!(files.get("1.txt").map(String::as_str), Some("one from feature"));
    assert_eq!(files.get("2.txt").map(String::as_str), Some("two"));
    assert_eq!(files.get("3.txt").map(String::as_str), Some("three"));
    assert_eq!(files.get("local.txt").map(String::as_str), Some("uncommitted"));
    assert_eq!(&snapshot.working_directory, files);

    Ok(())
}

#[rstest]
fn merge_into_itself_is_up_to_date(mut committed_repository: Repository) {
    let before = committed_repository.snapshot();

    assert_eq!(
        committed_repository.execute_command("git merge main"),
        "Already up to date."
    );
    assert_eq!(committed_repository.snapshot(), before);
}

#[rstest]
fn merge_of_unknown_branch_is_reported(mut committed_repository: Repository) {
    let before = committed_repository.snapshot();

    let error = committed_repository.merge("ghost").unwrap_err();

    assert_eq!(
        reported(&error),
        Some(&RepositoryError::NotSomethingWeCanMerge("ghost".to_string()))
    );
    assert_eq!(committed_repository.snapshot(), before);
}

#[rstest]
fn merge_of_branch_without_commits_is_reported(
    mut repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    repository.branch("empty")?;
    repository.write_file("a.txt", "a");

    assert_eq!(
        repository.execute_command("git merge empty"),
        "fatal: no commit found for branch 'empty'"
    );
    assert!(repository.snapshot().commits.is_empty());

    Ok(())
}

#[rstest]
fn merge_output_is_commit_confirmation(
    mut committed_repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    committed_repository.branch("feature")?;
    committed_repository.checkout("feature")?;
    commit_file(&mut committed_repository, "3.txt", "three", "Add 3")?;
    committed_repository.checkout("main")?;

    let output = committed_repository.execute_command("git merge feature");

    let head = committed_repository.snapshot().head.ok_or("missing HEAD")?;
    assert_eq!(
        output,
        format!("[main {}] Merge branch 'feature'", head.to_short_oid())
    );

    Ok(())
}

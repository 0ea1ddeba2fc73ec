use crate::common::{generated_files, repository};
use gitsim::areas::repository::Repository;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_dot_stages_whole_working_directory(
    mut repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = generated_files(5);
    for (name, content) in &files {
        repository.write_file(name, content);
    }

    repository.add(&[".".to_string()])?;

    assert_eq!(repository.snapshot().staging_area, files);

    let status = repository.status();
    assert!(status.untracked.is_empty());
    assert!(status.modified.is_empty());
    assert_eq!(status.staged, files.keys().cloned().collect::<Vec<_>>());

    Ok(())
}

#[rstest]
fn add_dot_drops_staged_files_missing_from_working_directory(
    mut repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    repository.write_file("keep.txt", "keep");
    repository.add(&[".".to_string()])?;
    repository.commit("keep")?;
    repository.branch("other")?;

    repository.write_file("gone.txt", "gone");
    repository.add(&["gone.txt".to_string()])?;

    // checkout restores the working directory but keeps the staging area
    repository.checkout("other")?;
    assert!(repository.snapshot().staging_area.contains_key("gone.txt"));

    repository.add(&[".".to_string()])?;

    let staged = repository.snapshot().staging_area;
    assert_eq!(staged.keys().collect::<Vec<_>>(), vec!["keep.txt"]);

    Ok(())
}

#[rstest]
fn add_dot_copies_content_at_staging_time(
    mut repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    repository.write_file("a.txt", "v1");
    repository.add(&[".".to_string()])?;
    repository.write_file("a.txt", "v2");

    assert_eq!(
        repository.snapshot().staging_area.get("a.txt").map(String::as_str),
        Some("v1")
    );

    Ok(())
}

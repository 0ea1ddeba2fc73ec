use crate::common::{commit_file, repository};
use gitsim::areas::repository::Repository;
use gitsim::artifacts::branch::branch_name::BranchName;
use gitsim::commands::plumbing::snapshot::RepositorySnapshot;
use gitsim::config::Config;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reset_simulator_restores_construction_state(
    mut repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    commit_file(&mut repository, "a.txt", "1", "first")?;
    repository.branch("feature")?;
    repository.checkout("feature")?;
    repository.write_file("b.txt", "2");
    repository.add(&["b.txt".to_string()])?;

    repository.reset_simulator();

    let snapshot = repository.snapshot();
    assert_eq!(snapshot, RepositorySnapshot::initial(BranchName::default()));
    assert!(snapshot.working_directory.is_empty());
    assert!(snapshot.staging_area.is_empty());
    assert!(snapshot.commits.is_empty());
    assert_eq!(snapshot.branches.len(), 1);
    assert_eq!(snapshot.branches[0].name.as_ref(), "main");
    assert_eq!(snapshot.branches[0].commit_id, None);
    assert_eq!(snapshot.current_branch.as_ref(), "main");
    assert_eq!(snapshot.head, None);

    Ok(())
}

#[rstest]
fn commits_after_reset_get_fresh_ids(
    mut repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    let before = commit_file(&mut repository, "a.txt", "1", "first")?;
    repository.reset_simulator();
    let after = commit_file(&mut repository, "a.txt", "1", "first")?;

    assert_ne!(before, after);

    Ok(())
}

#[test]
fn reset_simulator_uses_configured_default_branch() -> Result<(), Box<dyn std::error::Error>> {
    let trunk = BranchName::try_parse("trunk".to_string())?;
    let mut repository = Repository::new(Config::default().with_default_branch(trunk.clone()));
    repository.branch("other")?;
    repository.checkout("other")?;

    repository.reset_simulator();

    assert_eq!(repository.snapshot(), RepositorySnapshot::initial(trunk));

    Ok(())
}

use super::*;
use crate::repo::RepoError;
use crate::test_helpers::TestRepo;

#[test]
fn empty_repository_reports_no_data_and_skips_charting() {
    let repo = TestRepo::new_empty();
    let grouping = repo.path().join("no-grouping.txt");

    // Returns Ok before the chart view: rendering would fail without a tty.
    run(repo.path(), Some(grouping.as_path())).unwrap();
}

#[test]
fn missing_path_fails_validation() {
    let err = run(Path::new("/no/such/path"), None).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RepoError>(),
        Some(RepoError::NotADirectory(_))
    ));
}

#[test]
fn plain_directory_fails_as_not_a_repository() {
    let dir = tempfile::tempdir().unwrap();
    let err = run(dir.path(), None).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RepoError>(),
        Some(RepoError::NotARepository(_))
    ));
}

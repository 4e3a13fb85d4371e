use ai_intensity::domain::EdgarTicker;
use ai_intensity::repositories::{remove_tree, FilingRepository, LocalFilingRepository};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn ticker(ric: &str) -> EdgarTicker {
    EdgarTicker::from_ric(ric).unwrap()
}

fn types(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

#[tokio::test]
async fn test_lists_submissions_across_layouts() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "10-K/AAPL/0001/full-submission.txt", b"a");
    write(dir.path(), "AAPL/10-K/0002/full-submission.txt", b"b");
    write(dir.path(), "filings/AAPL/10-K/0003/submission.txt", b"c");
    write(dir.path(), "filings/10-K/AAPL/0004/full-submission.txt", b"d");
    write(dir.path(), "10-K/AAPL/0001/primary-document.html", b"x");
    write(dir.path(), "10-K/MSFT/0001/full-submission.txt", b"y");

    let repo = LocalFilingRepository::new(dir.path());
    let submissions = repo
        .list_submissions(&ticker("AAPL.OQ"), &types(&["10-K"]))
        .await
        .unwrap();

    assert_eq!(submissions.len(), 4);
    assert!(submissions.iter().all(|s| s.path.starts_with(dir.path())));
    assert!(submissions
        .iter()
        .all(|s| !s.path.to_string_lossy().contains("MSFT")));
}

#[tokio::test]
async fn test_multiple_filing_types() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "10-K/SHOP/1/full-submission.txt", b"a");
    write(dir.path(), "40-F/SHOP/2/full-submission.txt", b"b");

    let repo = LocalFilingRepository::new(dir.path());
    let only_10k = repo
        .list_submissions(&ticker("SHOP"), &types(&["10-K"]))
        .await
        .unwrap();
    assert_eq!(only_10k.len(), 1);

    let both = repo
        .list_submissions(&ticker("SHOP"), &types(&["10-K", "40-F"]))
        .await
        .unwrap();
    assert_eq!(both.len(), 2);
}

#[tokio::test]
async fn test_fallback_scan_matches_ticker_directory() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "archive/nvda/2022/full-submission.txt", b"a");
    write(dir.path(), "archive/AMD/2022/full-submission.txt", b"b");

    let repo = LocalFilingRepository::new(dir.path());
    let submissions = repo
        .list_submissions(&ticker("NVDA.O"), &types(&["10-K"]))
        .await
        .unwrap();

    assert_eq!(submissions.len(), 1);
    assert!(submissions[0].path.ends_with("archive/nvda/2022/full-submission.txt"));
}

#[tokio::test]
async fn test_fallback_scan_ignores_partial_names() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "archive/FORD/0001/full-submission.txt", b"a");
    write(dir.path(), "archive/forms/0002/submission.txt", b"b");
    write(dir.path(), "archive/f/0003/full-submission.txt", b"c");

    let repo = LocalFilingRepository::new(dir.path());
    let submissions = repo
        .list_submissions(&ticker("F.N"), &types(&["10-K"]))
        .await
        .unwrap();

    assert_eq!(submissions.len(), 1);
    assert!(submissions[0].path.ends_with("archive/f/0003/full-submission.txt"));
}

#[tokio::test]
async fn test_missing_root_yields_no_submissions() {
    let dir = TempDir::new().unwrap();
    let repo = LocalFilingRepository::new(dir.path().join("absent"));
    let submissions = repo
        .list_submissions(&ticker("AAPL"), &types(&["10-K"]))
        .await
        .unwrap();
    assert!(submissions.is_empty());
}

#[tokio::test]
async fn test_read_submission_is_lossy() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "10-K/AAPL/1/full-submission.txt",
        b"machine \xff\xfe learning",
    );

    let repo = LocalFilingRepository::new(dir.path());
    let submissions = repo
        .list_submissions(&ticker("AAPL"), &types(&["10-K"]))
        .await
        .unwrap();
    let text = repo.read_submission(&submissions[0]).await.unwrap();

    assert!(text.starts_with("machine "));
    assert!(text.ends_with(" learning"));
}

#[tokio::test]
async fn test_cleanup_removes_candidate_roots() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "10-K/AAPL/1/full-submission.txt", b"12345");
    write(dir.path(), "AAPL/10-K/2/full-submission.txt", b"123");
    write(dir.path(), "10-K/MSFT/1/full-submission.txt", b"keep");

    let repo = LocalFilingRepository::new(dir.path());
    let freed = repo
        .cleanup(&ticker("AAPL"), &types(&["10-K"]))
        .await
        .unwrap();

    assert_eq!(freed, 8);
    assert!(!dir.path().join("10-K/AAPL").exists());
    assert!(!dir.path().join("AAPL/10-K").exists());
    assert!(dir.path().join("10-K/MSFT/1/full-submission.txt").exists());
}

#[test]
fn test_remove_tree_reports_size() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "filings/a.txt", b"abc");
    write(dir.path(), "filings/nested/b.txt", b"de");

    let freed = remove_tree(&dir.path().join("filings")).unwrap();
    assert_eq!(freed, 5);
    assert!(!dir.path().join("filings").exists());
}

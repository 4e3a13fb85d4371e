use ai_intensity::intensity::{
    load_keywords, load_keywords_with_origin, IntensityEngine, KeywordOrigin, DEFAULT_KEYWORDS,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_no_source_uses_builtin_vocabulary() {
    let set = load_keywords_with_origin(None);
    assert_eq!(set.origin, KeywordOrigin::BuiltIn);
    assert_eq!(set.phrases.len(), DEFAULT_KEYWORDS.len());
}

#[test]
fn test_file_with_comments_and_duplicates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keywords.txt");
    fs::write(&path, "# AI terms\n\nx\n  y  \nx\n# end\n").unwrap();

    let set = load_keywords_with_origin(Some(path.as_path()));
    assert_eq!(set.phrases, vec!["x", "y"]);
    assert_eq!(set.origin, KeywordOrigin::File(path.clone()));
    assert!(!set.is_fallback());
}

#[test]
fn test_comment_only_file_falls_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keywords.txt");
    fs::write(&path, "# nothing here\n\n   \n").unwrap();

    let set = load_keywords_with_origin(Some(path.as_path()));
    assert!(set.is_fallback());
    assert_eq!(set.phrases.len(), DEFAULT_KEYWORDS.len());
    match set.origin {
        KeywordOrigin::Fallback { reason, .. } => assert_eq!(reason, "no keywords found"),
        other => panic!("Expected fallback, got: {:?}", other),
    }
}

#[test]
fn test_missing_file_falls_back() {
    let dir = TempDir::new().unwrap();
    let phrases = load_keywords(Some(dir.path().join("absent.txt").as_path()));
    assert_eq!(phrases.len(), DEFAULT_KEYWORDS.len());
}

#[test]
fn test_invalid_utf8_is_tolerated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keywords.txt");
    fs::write(&path, b"robotics\n\xffautonomous vehicles\n").unwrap();

    let phrases = load_keywords(Some(path.as_path()));
    assert_eq!(phrases.len(), 2);
    assert_eq!(phrases[0], "robotics");

    let engine = IntensityEngine::new(&phrases);
    let result = engine.score("Robotics and autonomous vehicles.").result;
    assert_eq!(result.count("robotics"), 1);
    assert_eq!(result.count("autonomous vehicles"), 1);
}

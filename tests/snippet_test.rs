use std::path::{Path, PathBuf};

use boilerplate::error::SnippetError;
use boilerplate::snippet::{extract_snippet, read_snippet, SnippetResolver};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn test_whole_file() {
    let content = read_snippet(fixture("full-file-snippet.txt"), None).unwrap();
    assert_eq!(
        content,
        "Hi\nboilerplate-snippet: foo\nHello, World!\nboilerplate-snippet: foo\nBye"
    );
}

#[test]
fn test_named_snippet() {
    let content = read_snippet(fixture("full-file-snippet.txt"), Some("foo")).unwrap();
    assert_eq!(content, "Hello, World!");
}

#[test]
fn test_snippets_in_comments() {
    let path = fixture("multi-snippet.txt");

    let install = read_snippet(&path, Some("install")).unwrap();
    assert_eq!(install, "pip install {{ ProjectName | kebab_case }}");

    let usage = read_snippet(&path, Some("usage")).unwrap();
    assert_eq!(usage, "import {{ ProjectName | snake_case }}");
}

#[test]
fn test_multiline_snippet_keeps_line_breaks() {
    let content = "start\n// boilerplate-snippet: body\nline one\r\n\nline three\n// boilerplate-snippet: body\nend\n";
    assert_eq!(
        extract_snippet(content, "body").unwrap(),
        "line one\r\n\nline three"
    );
}

#[test]
fn test_marker_name_must_match_exactly() {
    let content = "boilerplate-snippet: foobar\nx\nboilerplate-snippet: foobar\n";
    assert_eq!(extract_snippet(content, "foo"), None);
    assert_eq!(extract_snippet(content, "foobar").unwrap(), "x");
}

#[test]
fn test_empty_snippet() {
    let content = "boilerplate-snippet: empty\nboilerplate-snippet: empty\n";
    assert_eq!(extract_snippet(content, "empty").unwrap(), "");
}

#[test]
fn test_blank_marker_name_matches_nothing() {
    let content = "a\n// boilerplate-snippet: foo\nX\n// boilerplate-snippet: bar\nY\n";
    assert_eq!(extract_snippet(content, ""), None);
    assert_eq!(extract_snippet(content, "  "), None);

    let err = read_snippet(fixture("full-file-snippet.txt"), Some("")).unwrap_err();
    assert!(matches!(err, SnippetError::MarkerNotFound { .. }));
}

#[test]
fn test_missing_marker() {
    let err = read_snippet(fixture("full-file-snippet.txt"), Some("bar")).unwrap_err();
    assert!(matches!(err, SnippetError::MarkerNotFound { ref marker, .. } if marker == "bar"));
}

#[test]
fn test_unclosed_marker() {
    let content = "boilerplate-snippet: open\nnever closed\n";
    assert_eq!(extract_snippet(content, "open"), None);
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");

    let err = read_snippet(&missing, None).unwrap_err();
    match err {
        SnippetError::FileNotFound { path, .. } => assert_eq!(path, missing.display().to_string()),
        other => panic!("Expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn test_resolver_is_relative_to_template_directory() {
    let template = fixture("some-template.txt");
    let resolver = SnippetResolver::for_template(&template);

    let fixtures_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    assert_eq!(resolver.base_dir(), fixtures_dir.as_path());
    assert_eq!(resolver.resolve("full-file-snippet.txt", Some("foo")).unwrap(), "Hello, World!");
}

use std::path::Path;

use minihttpd::http::mime::{DEFAULT_CONTENT_TYPE, MimeTable, extension_of};

const SAMPLE: &str = "\
# MIME type        Extensions
text/html          html htm
text/plain         txt
image/jpeg         jpeg jpg jpe

application/pdf    pdf
";

#[test]
fn test_every_extension_maps_to_first_token() {
    let table = MimeTable::parse(SAMPLE);

    for line in SAMPLE.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = tokens.first() else { continue };
        if first.contains('#') {
            continue;
        }
        for token in &tokens {
            assert_eq!(table.lookup(token), *first, "token {}", token);
        }
    }
}

#[test]
fn test_unknown_extension_falls_back() {
    let table = MimeTable::parse(SAMPLE);

    assert_eq!(table.lookup("unknownext"), "application/octet-stream");
    assert_eq!(table.lookup(""), DEFAULT_CONTENT_TYPE);
}

#[test]
fn test_comment_lines_are_skipped() {
    let table = MimeTable::parse("#text/html html\nfoo#bar baz\n");

    assert!(table.is_empty());
    assert_eq!(table.lookup("html"), DEFAULT_CONTENT_TYPE);
    assert_eq!(table.lookup("baz"), DEFAULT_CONTENT_TYPE);
}

#[test]
fn test_comment_only_checked_on_first_token() {
    let table = MimeTable::parse("text/plain txt #notes\n");

    assert_eq!(table.lookup("#notes"), "text/plain");
}

#[test]
fn test_last_line_wins() {
    let table = MimeTable::parse("text/plain htm\ntext/html html htm\n");

    assert_eq!(table.lookup("htm"), "text/html");
}

#[test]
fn test_lookup_case_fallback() {
    let table = MimeTable::parse(SAMPLE);

    assert_eq!(table.lookup("HTML"), "text/html");
    assert_eq!(table.lookup("Jpg"), "image/jpeg");
}

#[test]
fn test_len_counts_keys() {
    let table = MimeTable::parse("text/html html htm\n");

    // the content type maps to itself as well
    assert_eq!(table.len(), 3);
}

#[test]
fn test_content_type_for_path() {
    let table = MimeTable::parse("text/html html htm\n");

    assert_eq!(table.content_type_for(Path::new("./a.htm")), "text/html");
    assert_eq!(
        table.content_type_for(Path::new("./testfiles/index.html")),
        "text/html"
    );
    assert_eq!(
        table.content_type_for(Path::new("./Makefile")),
        DEFAULT_CONTENT_TYPE
    );
}

#[test]
fn test_extension_of_leading_dot() {
    assert_eq!(extension_of(Path::new(".htaccess")), "");
    assert_eq!(extension_of(Path::new("/www/.hidden.txt")), "txt");
}

#[test]
fn test_load_from_file() {
    let dir = std::env::temp_dir().join(format!("minihttpd-mime-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("mime.types");
    std::fs::write(&path, SAMPLE).unwrap();

    let table = MimeTable::load(&path).unwrap();
    assert_eq!(table.lookup("jpe"), "image/jpeg");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_load_missing_file_is_config_error() {
    let path = std::env::temp_dir().join("minihttpd-does-not-exist/mime.types");

    let err = MimeTable::load(&path).unwrap_err();
    assert_eq!(err.path, path);
    assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
    assert!(err.to_string().contains("mime.types"));
}

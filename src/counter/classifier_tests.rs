use std::io::{Cursor, Read};

use super::*;
use crate::counter::test_fixtures::{javascript_profile, python_profile, sql_profile};

fn tally(code: usize, blank: usize, inline: usize, block: usize) -> ClassificationTally {
    ClassificationTally {
        code,
        blank,
        inline,
        block,
    }
}

#[test]
fn blank_code_and_inline_lines() {
    let mut classifier = LineClassifier::new(python_profile(), false);
    let report = classifier.scan_lines(["x = 1", "", "# comment", "y = 2"]);

    assert_eq!(report.tally, tally(2, 1, 1, 0));
    assert_eq!(report.tally.remark(), 1);
    assert_eq!(report.values(), ("python", 2, 1, 1, 0, 1));
}

#[test]
fn multi_line_block_comment() {
    let mut classifier = LineClassifier::new(javascript_profile(), false);
    let report = classifier.scan_lines(["a;", "/* start", "middle", "end */", "b;"]);

    assert_eq!(report.tally, tally(2, 0, 0, 3));
    assert_eq!(report.tally.remark(), 3);
    assert!(!report.is_block_open());
}

#[test]
fn unterminated_block_at_end_of_input() {
    let mut classifier = LineClassifier::new(sql_profile(), false);
    let report = classifier.scan_lines(["/* open", "still open"]);

    assert_eq!(report.tally.block, 2);
    assert_eq!(report.tally.total(), 2);
    assert!(report.is_block_open());
    assert_eq!(classifier.open_block_end(), Some("*/"));
}

#[test]
fn empty_input() {
    let mut classifier = LineClassifier::new(sql_profile(), false);
    let report = classifier.scan_lines(Vec::<&str>::new());

    assert_eq!(report.tally, ClassificationTally::new());
    assert_eq!(report.tally.remark(), 0);

    let report = classifier.scan_str("");
    assert_eq!(report.tally.total(), 0);
}

#[test]
fn python_docstring_block() {
    let mut classifier = LineClassifier::new(python_profile(), false);
    let source = "def f():\n    \"\"\"\n    Docs.\n    \"\"\"\n    return 1\n";
    let report = classifier.scan_str(source);

    assert_eq!(report.tally, tally(2, 0, 0, 3));
}

#[test]
fn comment_lines_inside_block_count_as_block() {
    let mut classifier = LineClassifier::new(python_profile(), false);
    let report = classifier.scan_lines(["'''", "# not inline", "", "'''", "pass"]);

    assert_eq!(report.tally, tally(1, 0, 0, 4));
}

#[test]
fn single_line_block_keeps_following_lines_in_block() {
    let mut classifier = LineClassifier::new(sql_profile(), false);
    let report = classifier.scan_lines(["/* note */", "SELECT 1;", "x */", "SELECT 2;"]);

    assert_eq!(report.tally, tally(1, 0, 0, 3));
}

#[test]
fn single_line_block_with_close_policy() {
    let mut classifier =
        LineClassifier::new(sql_profile(), false).with_policy(BlockPolicy::CloseOnSameLine);
    let report = classifier.scan_lines(["/* note */", "SELECT 1;", "x */", "SELECT 2;"]);

    assert_eq!(report.tally, tally(3, 0, 0, 1));
}

#[test]
fn totals_match_line_count() {
    let mut classifier = LineClassifier::new(javascript_profile(), false);
    let source = "// header\n\nfunction f() {\n  /*\n   * docs\n   */\n  return 1; // trailing\n}\n\n";
    let report = classifier.scan_str(source);

    assert_eq!(report.tally.total(), source.lines().count());
    assert_eq!(
        report.tally.remark(),
        report.tally.inline + report.tally.block
    );
}

#[test]
fn non_cumulative_scan_is_idempotent() {
    let mut classifier = LineClassifier::new(sql_profile(), false);
    let source = "SELECT 1;\n-- c\n/* a\nb */\n\n";

    let first = classifier.scan_str(source);
    let second = classifier.scan_str(source);
    assert_eq!(first, second);
}

#[test]
fn non_cumulative_scan_resets_open_block() {
    let mut classifier = LineClassifier::new(sql_profile(), false);
    classifier.scan_str("/* never closed");
    assert!(classifier.is_block_open());

    let report = classifier.scan_str("SELECT 1;");
    assert_eq!(report.tally, tally(1, 0, 0, 0));
    assert!(!report.is_block_open());
}

#[test]
fn cumulative_scans_accumulate() {
    let mut classifier = LineClassifier::new(python_profile(), true);
    classifier.scan_str("x = 1\n# c\n");
    let report = classifier.scan_str("\ny = 2\n");

    assert_eq!(report.tally, tally(2, 1, 1, 0));
    assert!(classifier.is_cumulative());
}

#[test]
fn cumulative_scans_carry_block_state() {
    let a = ["a;", "/* open", "inside"];
    let b = ["still inside", "done */", "b;"];

    let mut split = LineClassifier::new(javascript_profile(), true);
    split.scan_lines(a);
    let split_report = split.scan_lines(b);

    let mut joined = LineClassifier::new(javascript_profile(), false);
    let joined_report = joined.scan_lines(a.iter().chain(b.iter()));

    assert_eq!(split_report, joined_report);
    assert_eq!(split_report.tally, tally(2, 0, 0, 4));
}

#[test]
fn reset_clears_tally_and_state() {
    let mut classifier = LineClassifier::new(sql_profile(), true);
    classifier.scan_str("SELECT 1;\n/* open");
    classifier.reset();

    assert_eq!(classifier.tally().total(), 0);
    assert!(!classifier.is_block_open());
}

#[test]
fn feed_returns_category_and_accepts_none() {
    let mut classifier = LineClassifier::new(sql_profile(), false);

    assert_eq!(classifier.feed(Some("/* a")), Category::Block);
    assert_eq!(classifier.feed(None), Category::Blank);
    assert!(classifier.is_block_open());
    assert_eq!(classifier.feed(Some("*/")), Category::Block);
    assert_eq!(classifier.feed(Some("SELECT 1;")), Category::Code);

    assert_eq!(*classifier.tally(), tally(1, 1, 0, 2));
}

#[test]
fn scan_text_source() {
    let mut classifier = LineClassifier::new(sql_profile(), false);
    let report = classifier.scan(Source::from("SELECT 1;\n-- c")).unwrap();
    assert_eq!(report.tally, tally(1, 0, 1, 0));
}

#[test]
fn scan_reader_source() {
    let mut classifier = LineClassifier::new(sql_profile(), false);
    let reader = Cursor::new("SELECT 1;\n\n/* x\n*/\n");
    let report = classifier.scan(Source::Reader(Box::new(reader))).unwrap();
    assert_eq!(report.tally, tally(1, 1, 0, 2));
}

#[test]
fn scan_reader_handles_crlf() {
    let mut classifier = LineClassifier::new(sql_profile(), false);
    let report = classifier
        .scan_reader(Cursor::new("/* a\r\nb */\r\nSELECT 1;\r\n"))
        .unwrap();
    assert_eq!(report.tally, tally(1, 0, 0, 2));
    assert!(!report.is_block_open());
}

#[test]
fn scan_reader_rejects_invalid_utf8() {
    let mut classifier = LineClassifier::new(sql_profile(), false);
    let err = classifier
        .scan_reader(Cursor::new(vec![0x66, 0x6f, 0xff, b'\n']))
        .unwrap_err();
    assert!(matches!(err, TallyError::UnreadableSource { .. }));
}

#[test]
fn scan_path_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("query.sql");
    std::fs::write(&path, "-- header\nSELECT *\nFROM t;\n").unwrap();

    let mut classifier = LineClassifier::new(sql_profile(), false);
    let report = classifier.scan(Source::from(&path)).unwrap();
    assert_eq!(report.tally, tally(2, 0, 1, 0));
}

#[test]
fn scan_missing_path_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.py");

    let mut classifier = LineClassifier::new(python_profile(), false);
    let err = classifier.scan_path(&path).unwrap_err();

    let TallyError::UnreadableSource { path: reported, .. } = err else {
        panic!("Expected UnreadableSource");
    };
    assert_eq!(reported, path);
}

#[test]
fn scan_path_matches_scan_str() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.py");
    let source = "import os\n\n'''\ndoc\n'''\n# c\nprint(os.sep)\n";
    std::fs::write(&path, source).unwrap();

    let mut from_path = LineClassifier::new(python_profile(), false);
    let mut from_text = LineClassifier::new(python_profile(), false);

    let mut content = String::new();
    std::fs::File::open(&path)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();

    assert_eq!(
        from_path.scan_path(&path).unwrap(),
        from_text.scan_str(&content)
    );
}

#[test]
fn scan_as_uses_override_language() {
    let registry = LanguageRegistry::default();
    let mut classifier = LineClassifier::new(python_profile(), false);

    let report = classifier
        .scan_as(Source::from("-- sql comment\n# not a comment"), &registry, "sql")
        .unwrap();

    assert_eq!(report.language, "sql");
    assert_eq!(report.tally, tally(1, 0, 1, 0));
    assert_eq!(classifier.profile().id, "python");
}

#[test]
fn scan_as_unknown_language_fails_without_counting() {
    let registry = LanguageRegistry::default();
    let mut classifier = LineClassifier::new(python_profile(), true);
    classifier.scan_str("x = 1");

    let err = classifier
        .scan_as(Source::from("y = 2"), &registry, "cobol")
        .unwrap_err();

    assert!(matches!(err, TallyError::UnknownLanguage(_)));
    assert_eq!(classifier.tally().total(), 1);
}

#[test]
fn missing_and_non_utf8_paths_report_different_causes() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("a.py");
    let bad_dir = dir.path().join("bad");
    std::fs::create_dir(&bad_dir).unwrap();
    let bad = bad_dir.join("a.py");
    std::fs::write(&bad, [b'x', b' ', 0xff, b'\n']).unwrap();

    let mut classifier = LineClassifier::new(python_profile(), false);
    let missing_err = classifier.scan_path(&missing).unwrap_err().to_string();
    let bad_err = classifier.scan_path(&bad).unwrap_err().to_string();

    assert!(bad_err.contains("UTF-8"), "{bad_err}");
    assert!(!missing_err.contains("UTF-8"), "{missing_err}");
    assert_ne!(missing_err, bad_err);
}

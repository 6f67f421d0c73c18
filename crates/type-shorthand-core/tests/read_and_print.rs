//! Integration tests for reading stylesheets into a document and printing them.

use std::io::Write;

use type_shorthand_core::prelude::*;
use type_shorthand_core::Error;

#[test]
fn read_file_records_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "h1 {{\n    type: 20px;\n}}").unwrap();

    let doc = parse_css_file(file.path()).unwrap();
    let rule = doc.children(doc.root()).unwrap()[0];
    let decl = doc.children(rule).unwrap()[0];

    let loc = doc.location(decl).unwrap();
    assert_eq!(loc.file.as_deref(), Some(file.path()));
    assert_eq!((loc.line, loc.column), (2, 5));
}

#[test]
fn read_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.css");

    let err = parse_css_file(&missing).unwrap_err();
    assert!(matches!(err, Error::Io { ref path, .. } if path == &missing));
}

#[test]
fn canonical_output_is_stable() {
    let css = "h1 {\n    color: red;\n    margin: 0\n}\n@media print {\n    a {}\n}";
    let doc = parse_css(css).unwrap();
    let printed = to_css(&doc);
    assert_eq!(printed, css);

    let reparsed = parse_css(&printed).unwrap();
    assert_eq!(to_css(&reparsed), printed);
}

#[test]
fn edits_show_up_in_output() {
    let mut doc = parse_css("h1 { type: 20px; color: red }").unwrap();
    let rule = doc.children(doc.root()).unwrap()[0];
    let shorthand = doc.children(rule).unwrap()[0];

    let size = doc.create_declaration("font-size", "20px");
    doc.insert_before(rule, shorthand, size).unwrap();
    doc.remove(shorthand).unwrap();

    assert_eq!(to_css(&doc), "h1 {\n    font-size: 20px;\n    color: red\n}");
}

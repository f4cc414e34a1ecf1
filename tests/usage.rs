//! Usage-error surface of the compiled binary.
//!
//! Both paths must exit 1 and print usage before any network or file I/O.
use std::process::Command;

#[test]
fn missing_book_exits_one_with_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_bsbgen"))
        .output()
        .expect("run bsbgen");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: bsbgen <book>"), "stderr: {stderr}");
    assert!(stderr.contains("mark, luke, romans"), "stderr: {stderr}");
}

#[test]
fn unknown_book_exits_one_with_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_bsbgen"))
        .arg("Hezekiah")
        .output()
        .expect("run bsbgen");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown book: hezekiah"), "stderr: {stderr}");
    assert!(stderr.contains("Usage: bsbgen <book>"), "stderr: {stderr}");
}

#[test]
fn book_id_is_case_insensitive_for_known_books() {
    // A known book with an unreachable URL must get past the usage check and
    // fail at retrieval instead.
    let output = Command::new(env!("CARGO_BIN_EXE_bsbgen"))
        .args(["Mark", "--url", "http://127.0.0.1:9/bsb.txt"])
        .output()
        .expect("run bsbgen");

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("Unknown book"),
        "case-folded id should be accepted, stderr: {stderr}"
    );
    assert!(stderr.contains("retrieve source text"), "stderr: {stderr}");
}

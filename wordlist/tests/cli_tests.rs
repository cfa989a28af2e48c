use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn wordlist(data_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wordlist"))
        .args(args)
        .arg("--offline")
        .arg("--data-dir")
        .arg(data_dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn words_fixture(dir: &Path, lines: &str) {
    let pkg = dir.join("corpora/words");
    fs::create_dir_all(&pkg).unwrap();
    fs::write(pkg.join("en"), lines).unwrap();
}

#[test]
fn prints_sorted_vocabulary_and_counts() {
    let dir = tempdir().unwrap();
    words_fixture(dir.path(), "Cat\ndog\nCAT\ndog2\n3dog\n");
    let out = wordlist(dir.path(), &["w"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "cat\ndog\n");
    assert_eq!(String::from_utf8(out.stderr).unwrap(), "original: 5\nconverted: 2\n");
}

#[test]
fn invalid_mode_exits_cleanly_without_output() {
    let dir = tempdir().unwrap();
    let out = wordlist(dir.path(), &["x"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8(out.stderr).unwrap().contains("invalid corpus type"));
}

#[test]
fn hyphen_leading_mode_is_an_invalid_type() {
    let dir = tempdir().unwrap();
    words_fixture(dir.path(), "cat\n");
    for mode in ["-x", "-w"] {
        let out = wordlist(dir.path(), &[mode]);
        assert!(out.status.success(), "{mode}");
        assert!(out.stdout.is_empty(), "{mode}");
        assert!(String::from_utf8(out.stderr).unwrap().contains("invalid corpus type"), "{mode}");
    }
}

#[test]
fn missing_corpus_offline_fails() {
    let dir = tempdir().unwrap();
    let out = wordlist(dir.path(), &["g"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("gutenberg"), "{stderr}");
}

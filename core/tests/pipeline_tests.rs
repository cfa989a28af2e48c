use anyhow::{anyhow, Result};
use wordcore::{normalize, run, CollectOptions, CollectStats, CorpusKind, MemorySource, Outcome};

fn run_mode(mode: &str, source: &MemorySource) -> (Outcome, String, String) {
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let outcome = run(mode, source, CollectOptions::default(), &mut out, &mut diag).unwrap();
    (outcome, String::from_utf8(out).unwrap(), String::from_utf8(diag).unwrap())
}

fn words(tokens: &[&str]) -> MemorySource {
    MemorySource::new().with(CorpusKind::Words, tokens.iter().copied())
}

#[test]
fn mixed_case_and_digits() {
    let src = words(&["Cat", "dog", "CAT", "dog2", "3dog"]);
    let (outcome, out, diag) = run_mode("w", &src);
    assert_eq!(outcome, Outcome::Emitted(CollectStats { original: 5, converted: 2 }));
    assert_eq!(out, "cat\ndog\n");
    assert_eq!(diag, "original: 5\nconverted: 2\n");
}

#[test]
fn invalid_mode_prints_nothing() {
    let src = words(&["cat"]);
    let (outcome, out, diag) = run_mode("x", &src);
    assert_eq!(outcome, Outcome::InvalidMode);
    assert!(out.is_empty());
    assert!(diag.starts_with("error: invalid corpus type"));
    assert!(!diag.contains("original:"));
}

#[test]
fn empty_mode_is_invalid() {
    let (outcome, out, _) = run_mode("", &words(&["cat"]));
    assert_eq!(outcome, Outcome::InvalidMode);
    assert!(out.is_empty());
}

#[test]
fn empty_corpus() {
    let (outcome, out, diag) = run_mode("w", &words(&[]));
    assert_eq!(outcome, Outcome::Emitted(CollectStats { original: 0, converted: 0 }));
    assert!(out.is_empty());
    assert_eq!(diag, "original: 0\nconverted: 0\n");
}

#[test]
fn empty_token_survives() {
    let (_, out, diag) = run_mode("w", &words(&["", "a", "A"]));
    assert_eq!(out, "\na\n");
    assert_eq!(diag, "original: 3\nconverted: 2\n");
}

#[test]
fn drop_empty_option() {
    let src = words(&["", "a", "A"]);
    let mut out = Vec::new();
    let mut diag = Vec::new();
    run("w", &src, CollectOptions { drop_empty: true }, &mut out, &mut diag).unwrap();
    assert_eq!(out, b"a\n");
    assert_eq!(String::from_utf8(diag).unwrap(), "original: 3\nconverted: 1\n");
}

#[test]
fn mode_selects_the_right_corpus() {
    let src = MemorySource::new()
        .with(CorpusKind::Words, ["word"])
        .with(CorpusKind::Brown, ["brown"])
        .with(CorpusKind::Webtext, ["web"])
        .with(CorpusKind::Gutenberg, ["austen"]);
    assert_eq!(run_mode("w", &src).1, "word\n");
    assert_eq!(run_mode("b", &src).1, "brown\n");
    assert_eq!(run_mode("W", &src).1, "web\n");
    assert_eq!(run_mode("gutenberg", &src).1, "austen\n");
}

#[test]
fn source_failure_is_fatal_and_silent_on_stdout() {
    let failing = |_: CorpusKind| -> Result<Vec<String>> { Err(anyhow!("network down")) };
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let err = run("b", &failing, CollectOptions::default(), &mut out, &mut diag).unwrap_err();
    assert!(format!("{err:#}").contains("brown"));
    assert!(format!("{err:#}").contains("network down"));
    assert!(out.is_empty());
    assert!(diag.is_empty());
}

const SAMPLE: &[&str] = &[
    "The", "quick", "brown", "Fox", "jumps", "over", "the", "lazy", "dog", ".", "Don't", "e-mail",
    "42", "naïve", "Zebra", "zebra", "ZEBRA", "x", "", "\u{212A}", "MiXeD", "tab\t", "αβγ",
];

#[test]
fn output_sorted_and_unique() {
    let (_, out, _) = run_mode("w", &words(SAMPLE));
    let lines: Vec<&str> = out.lines().collect();
    let mut sorted = lines.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(lines, sorted);
}

#[test]
fn converted_counts_distinct_normalized_values() {
    let mut distinct: Vec<String> = SAMPLE.iter().filter_map(|t| normalize(t)).collect();
    distinct.sort();
    distinct.dedup();
    let (outcome, _, _) = run_mode("w", &words(SAMPLE));
    match outcome {
        Outcome::Emitted(stats) => assert_eq!(stats.converted, distinct.len()),
        Outcome::InvalidMode => panic!("mode w is valid"),
    }
}

#[test]
fn normalize_is_idempotent() {
    for t in SAMPLE {
        if let Some(n) = normalize(t) {
            assert_eq!(normalize(&n).as_deref(), Some(n.as_str()), "{t:?}");
        }
    }
}

#[test]
fn output_is_a_fixed_point() {
    let (_, first, _) = run_mode("w", &words(SAMPLE));
    let again: Vec<&str> = first.split_terminator('\n').collect();
    let (_, second, diag) = run_mode("w", &words(&again));
    assert_eq!(first, second);
    assert_eq!(diag, format!("original: {0}\nconverted: {0}\n", again.len()));
}

use crate::normalize::normalize;
use std::collections::HashSet;

/// Sizes reported on the diagnostic stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectStats {
    /// Number of raw tokens scanned.
    pub original: usize,
    /// Number of distinct normalized words kept.
    pub converted: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CollectOptions {
    /// Leave the empty token out of the set.
    pub drop_empty: bool,
}

/// Deduplicated normalized words. Unordered until [`WordSet::into_sorted`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn new() -> Self { Self::default() }

    /// Normalize `token` and insert it. Returns false when the token was rejected or already present.
    pub fn insert(&mut self, token: &str) -> bool {
        match normalize(token) {
            Some(word) => self.words.insert(word),
            None => false,
        }
    }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    /// Ascending code point order.
    pub fn into_sorted(self) -> Vec<String> {
        let mut words: Vec<String> = self.words.into_iter().collect();
        words.sort_unstable();
        words
    }
}

/// Scan the corpus once, keeping every token that normalizes.
pub fn collect<I, S>(tokens: I) -> (WordSet, CollectStats)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    collect_with(tokens, CollectOptions::default())
}

pub fn collect_with<I, S>(tokens: I, opts: CollectOptions) -> (WordSet, CollectStats)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut set = WordSet::new();
    let mut original = 0usize;
    for token in tokens {
        original += 1;
        let token = token.as_ref();
        if opts.drop_empty && token.is_empty() { continue; }
        set.insert(token);
    }
    let stats = CollectStats { original, converted: set.len() };
    tracing::debug!(original = stats.original, converted = stats.converted, "collected words");
    (set, stats)
}

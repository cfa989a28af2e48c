use anyhow::Result;
use std::collections::HashMap;
use std::fmt;

/// The four corpora a run can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorpusKind {
    /// General English word list (`w`).
    Words,
    /// Brown news/fiction tagged corpus (`b`).
    Brown,
    /// Informal web text (`W`).
    Webtext,
    /// Project Gutenberg selections (`g`).
    Gutenberg,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModeError {
    #[error("missing corpus type (expected one of w, b, W, g)")]
    Empty,
    #[error("invalid corpus type {0:?} (expected one of w, b, W, g)")]
    Unknown(char),
}

impl CorpusKind {
    pub const ALL: [CorpusKind; 4] = [Self::Words, Self::Brown, Self::Webtext, Self::Gutenberg];

    /// Select a corpus from a mode argument. Only the first character counts.
    pub fn from_mode(arg: &str) -> Result<Self, ModeError> {
        match arg.chars().next() {
            Some('w') => Ok(Self::Words),
            Some('b') => Ok(Self::Brown),
            Some('W') => Ok(Self::Webtext),
            Some('g') => Ok(Self::Gutenberg),
            Some(c) => Err(ModeError::Unknown(c)),
            None => Err(ModeError::Empty),
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Words => 'w',
            Self::Brown => 'b',
            Self::Webtext => 'W',
            Self::Gutenberg => 'g',
        }
    }

    /// Package name under the NLTK data `corpora/` directory.
    pub fn package(self) -> &'static str {
        match self {
            Self::Words => "words",
            Self::Brown => "brown",
            Self::Webtext => "webtext",
            Self::Gutenberg => "gutenberg",
        }
    }
}

impl fmt::Display for CorpusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.package())
    }
}

/// Anything that can hand over the raw tokens of a corpus.
pub trait CorpusSource {
    fn load(&self, kind: CorpusKind) -> Result<Vec<String>>;
}

impl<F> CorpusSource for F
where
    F: Fn(CorpusKind) -> Result<Vec<String>>,
{
    fn load(&self, kind: CorpusKind) -> Result<Vec<String>> {
        self(kind)
    }
}

/// In-memory corpora keyed by kind. Missing kinds fail to load.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    corpora: HashMap<CorpusKind, Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self { Self::default() }

    pub fn with<I, S>(mut self, kind: CorpusKind, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.corpora.insert(kind, tokens.into_iter().map(Into::into).collect());
        self
    }
}

impl CorpusSource for MemorySource {
    fn load(&self, kind: CorpusKind) -> Result<Vec<String>> {
        self.corpora
            .get(&kind)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no in-memory corpus for {kind}"))
    }
}

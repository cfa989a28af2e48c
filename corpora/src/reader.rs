//! Per-corpus file selection, decoding and tokenization.

use crate::encoding::Encoding;
use crate::error::{CorpusError, Result};
use crate::package::Package;
use crate::tokenize::{untag, word_punct};
use lazy_static::lazy_static;
use regex::Regex;
use wordcore::CorpusKind;

lazy_static! {
    static ref ANY: Regex = Regex::new(r"^.*$").expect("valid regex");
    static ref TXT: Regex = Regex::new(r"^.*\.txt$").expect("valid regex");
    static ref BROWN: Regex = Regex::new(r"^c[a-z]\d\d$").expect("valid regex");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRule {
    /// One token per non-blank line, taken verbatim.
    Lines,
    /// Whitespace-separated `word/TAG` pairs; keep the word.
    Tagged,
    /// Word-punct regex tokens.
    WordPunct,
}

/// How a package's files are picked and turned into tokens.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub skip_prefixes: &'static [&'static str],
    pub pattern: &'static Regex,
    pub encoding: Encoding,
    pub rule: TokenRule,
}

impl Layout {
    pub fn for_kind(kind: CorpusKind) -> Self {
        match kind {
            CorpusKind::Words => Self { skip_prefixes: &["README", "."], pattern: &ANY, encoding: Encoding::Ascii, rule: TokenRule::Lines },
            CorpusKind::Brown => Self { skip_prefixes: &[], pattern: &BROWN, encoding: Encoding::Ascii, rule: TokenRule::Tagged },
            CorpusKind::Webtext => Self { skip_prefixes: &["README", "."], pattern: &TXT, encoding: Encoding::Latin2, rule: TokenRule::WordPunct },
            CorpusKind::Gutenberg => Self { skip_prefixes: &["."], pattern: &TXT, encoding: Encoding::Latin1, rule: TokenRule::WordPunct },
        }
    }

    pub fn selects(&self, fileid: &str) -> bool {
        !self.skip_prefixes.iter().any(|p| fileid.starts_with(p)) && self.pattern.is_match(fileid)
    }
}

/// Line boundaries as Python's `str.splitlines` knows them. `\r\n` leaves an empty piece, dropped as blank.
fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

pub fn tokens(rule: TokenRule, text: &str, out: &mut Vec<String>) {
    match rule {
        TokenRule::Lines => out.extend(text.split(is_line_break).filter(|l| !l.trim_end().is_empty()).map(str::to_string)),
        TokenRule::Tagged => out.extend(text.split_whitespace().map(|t| untag(t).to_string())),
        TokenRule::WordPunct => out.extend(word_punct(text).map(str::to_string)),
    }
}

/// Every token of the corpus, file by file in file id order.
pub fn read_words(package: &mut Package, kind: CorpusKind) -> Result<Vec<String>> {
    let layout = Layout::for_kind(kind);
    let fileids: Vec<String> = package.fileids().into_iter().filter(|id| layout.selects(id)).collect();
    if fileids.is_empty() {
        return Err(CorpusError::Empty(kind.package().to_string()));
    }
    let mut words = Vec::new();
    for id in &fileids {
        let bytes = package.read(id)?;
        let text = layout.encoding.decode(id, &bytes)?;
        let before = words.len();
        tokens(layout.rule, &text, &mut words);
        tracing::debug!(fileid = %id, tokens = words.len() - before, "read corpus file");
    }
    tracing::info!(corpus = %kind, files = fileids.len(), tokens = words.len(), "read corpus");
    Ok(words)
}

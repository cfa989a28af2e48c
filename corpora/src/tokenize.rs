use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_PUNCT: Regex = Regex::new(r"\w+|[^\w\s]+").expect("valid regex");
}

/// Split text into runs of word characters and runs of punctuation.
pub fn word_punct(text: &str) -> impl Iterator<Item = &str> + '_ {
    WORD_PUNCT.find_iter(text).map(|m| m.as_str())
}

/// Word part of a `word/TAG` token: everything before the last `/`.
pub fn untag(token: &str) -> &str {
    match token.rfind('/') {
        Some(loc) => &token[..loc],
        None => token,
    }
}

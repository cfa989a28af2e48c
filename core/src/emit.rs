use crate::collect::WordSet;
use std::io::{self, BufWriter, Write};

/// Write the set, sorted, one word per line. Nothing else goes to `out`.
pub fn emit<W: Write>(set: WordSet, out: W) -> io::Result<usize> {
    let words = set.into_sorted();
    let mut w = BufWriter::new(out);
    for word in &words {
        w.write_all(word.as_bytes())?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(words.len())
}

/// `original: <N>`, the raw corpus size.
pub fn report_original<W: Write>(diag: &mut W, original: usize) -> io::Result<()> {
    writeln!(diag, "original: {original}")
}

/// `converted: <M>`, the deduplicated set size.
pub fn report_converted<W: Write>(diag: &mut W, converted: usize) -> io::Result<()> {
    writeln!(diag, "converted: {converted}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::collect;

    #[test]
    fn one_word_per_line_without_trailer() {
        let (set, _) = collect(["b", "a", "c"]);
        let mut out = Vec::new();
        assert_eq!(emit(set, &mut out).unwrap(), 3);
        assert_eq!(String::from_utf8(out).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn empty_set_writes_nothing() {
        let mut out = Vec::new();
        emit(WordSet::new(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn diagnostics_format() {
        let mut diag = Vec::new();
        report_original(&mut diag, 12).unwrap();
        report_converted(&mut diag, 7).unwrap();
        assert_eq!(String::from_utf8(diag).unwrap(), "original: 12\nconverted: 7\n");
    }
}

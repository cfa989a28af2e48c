use crate::collect::{collect_with, CollectOptions, CollectStats};
use crate::corpus::{CorpusKind, CorpusSource};
use crate::emit::{emit, report_converted, report_original};
use anyhow::{Context, Result};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The full sorted word list was written.
    Emitted(CollectStats),
    /// The mode argument did not name a corpus; nothing was written to `out`.
    InvalidMode,
}

/// Select the corpus named by `mode`, then normalize, dedup, sort and print it.
///
/// Counts and the invalid-mode message go to `diag`; only words go to `out`.
/// Source failures propagate untouched apart from added context.
pub fn run<S, O, D>(mode: &str, source: &S, opts: CollectOptions, out: O, mut diag: D) -> Result<Outcome>
where
    S: CorpusSource + ?Sized,
    O: Write,
    D: Write,
{
    let kind = match CorpusKind::from_mode(mode) {
        Ok(kind) => kind,
        Err(err) => {
            tracing::warn!(mode, "rejected corpus mode");
            writeln!(diag, "error: {err}")?;
            return Ok(Outcome::InvalidMode);
        }
    };

    let raw = source.load(kind).with_context(|| format!("corpus `{kind}` unavailable"))?;
    tracing::info!(corpus = %kind, tokens = raw.len(), "loaded corpus");
    report_original(&mut diag, raw.len())?;

    let (set, stats) = collect_with(&raw, opts);
    drop(raw);
    report_converted(&mut diag, stats.converted)?;
    diag.flush()?;

    emit(set, out).context("writing word list")?;
    Ok(Outcome::Emitted(stats))
}

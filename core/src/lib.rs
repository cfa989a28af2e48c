pub mod collect;
pub mod corpus;
pub mod emit;
pub mod normalize;
pub mod pipeline;

pub use collect::{collect, collect_with, CollectOptions, CollectStats, WordSet};
pub use corpus::{CorpusKind, CorpusSource, MemorySource, ModeError};
pub use emit::emit;
pub use normalize::{is_normalized, normalize};
pub use pipeline::{run, Outcome};

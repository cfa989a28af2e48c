use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("package `{package}` is not cached under {root} and downloads are disabled")]
    NotCached { package: String, root: PathBuf },
    #[error("cached {path} does not match its manifest (expected sha1 {expected}, found {actual})")]
    ChecksumMismatch { path: PathBuf, expected: String, actual: String },
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u16 },
    #[error("GET {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{fileid}: byte 0x{byte:02x} at offset {offset} is not {encoding}")]
    Decode { fileid: String, encoding: &'static str, byte: u8, offset: usize },
    #[error("package `{0}` contains no corpus files")]
    Empty(String),
    #[error("zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CorpusError>;

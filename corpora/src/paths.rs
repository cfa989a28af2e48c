use std::path::{Path, PathBuf};

/// Layout of an NLTK data directory.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub root: PathBuf,
}

impl DataPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    /// First entry of `NLTK_DATA`, else `$HOME/nltk_data`, else `./nltk_data`.
    pub fn from_env() -> Self {
        let from_var = std::env::var_os("NLTK_DATA").and_then(|v| std::env::split_paths(&v).next());
        let root = match from_var {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => match std::env::var_os("HOME") {
                Some(home) => PathBuf::from(home).join("nltk_data"),
                None => PathBuf::from("nltk_data"),
            },
        };
        Self { root }
    }

    pub fn corpora_dir(&self) -> PathBuf { self.root.join("corpora") }
    pub fn package_dir(&self, package: &str) -> PathBuf { self.corpora_dir().join(package) }
    pub fn package_zip(&self, package: &str) -> PathBuf { self.corpora_dir().join(format!("{package}.zip")) }
    pub fn manifest(&self, package: &str) -> PathBuf { self.corpora_dir().join(format!("{package}.zip.json")) }
    pub(crate) fn partial_zip(&self, package: &str) -> PathBuf { self.corpora_dir().join(format!("{package}.zip.part")) }
}

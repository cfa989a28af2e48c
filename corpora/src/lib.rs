//! Corpus provider backed by an NLTK data directory, downloading packages on demand.

pub mod download;
pub mod encoding;
pub mod error;
pub mod manifest;
pub mod package;
pub mod paths;
pub mod reader;
pub mod tokenize;

use anyhow::Result;
use std::time::Duration;
use wordcore::{CorpusKind, CorpusSource};

pub use download::{Downloader, DEFAULT_BASE_URL};
pub use error::CorpusError;
pub use manifest::Manifest;
pub use package::Package;
pub use paths::DataPaths;

#[derive(Debug, Clone)]
pub struct NltkConfig {
    pub paths: DataPaths,
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Never touch the network; a missing package is an error.
    pub offline: bool,
    /// Download again even when a cached copy exists.
    pub refresh: bool,
}

impl NltkConfig {
    pub fn new(paths: DataPaths) -> Self {
        Self {
            paths,
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("wordlist/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(60),
            offline: false,
            refresh: false,
        }
    }
}

pub struct NltkData {
    config: NltkConfig,
    downloader: Option<Downloader>,
}

impl NltkData {
    pub fn new(config: NltkConfig) -> Result<Self> {
        let downloader = if config.offline {
            None
        } else {
            Some(Downloader::new(&config.base_url, &config.user_agent, config.timeout)?)
        };
        Ok(Self { config, downloader })
    }

    /// Locate the package on disk, downloading it if allowed and needed.
    pub fn open(&self, kind: CorpusKind) -> std::result::Result<Package, CorpusError> {
        let paths = &self.config.paths;
        let package = kind.package();

        if !self.config.refresh {
            let dir = paths.package_dir(package);
            if dir.is_dir() {
                tracing::debug!(path = %dir.display(), "using unpacked package");
                return Ok(Package::open_dir(dir));
            }
            let zip = paths.package_zip(package);
            if zip.is_file() {
                match self.verify_cached(package) {
                    Ok(()) => {
                        tracing::debug!(path = %zip.display(), "using cached zip");
                        return Package::open_zip(&zip, package);
                    }
                    Err(err) if self.downloader.is_some() => {
                        tracing::warn!(error = %err, "cached package is damaged, downloading again");
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        let Some(downloader) = &self.downloader else {
            return Err(CorpusError::NotCached { package: package.to_string(), root: paths.root.clone() });
        };
        downloader.fetch(paths, package)?;
        // an unpacked copy is looked up first, so it must not outlive a fresh download
        let stale = paths.package_dir(package);
        if stale.is_dir() {
            tracing::info!(path = %stale.display(), "removing unpacked package superseded by download");
            std::fs::remove_dir_all(&stale)?;
        }
        Package::open_zip(paths.package_zip(package), package)
    }

    fn verify_cached(&self, package: &str) -> std::result::Result<(), CorpusError> {
        let paths = &self.config.paths;
        let Some(manifest) = manifest::load_manifest(&paths.manifest(package))? else {
            return Ok(());
        };
        let zip = paths.package_zip(package);
        let actual = manifest::sha1_file(&zip)?;
        if actual != manifest.sha1 {
            return Err(CorpusError::ChecksumMismatch { path: zip, expected: manifest.sha1, actual });
        }
        Ok(())
    }
}

impl CorpusSource for NltkData {
    fn load(&self, kind: CorpusKind) -> Result<Vec<String>> {
        let mut package = self.open(kind)?;
        Ok(reader::read_words(&mut package, kind)?)
    }
}

use crate::error::{CorpusError, Result};
use crate::manifest::{save_manifest, sha1_hex, Manifest};
use crate::paths::DataPaths;
use reqwest::blocking::Client;
use std::fs::{self, File};
use std::io::Write;
use std::time::Duration;
use time::format_description::well_known::Rfc3339;

pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/nltk/nltk_data/gh-pages/packages";

pub struct Downloader {
    client: Client,
    base_url: String,
}

impl Downloader {
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(5))
            .timeout(timeout)
            .build()
            .map_err(|source| CorpusError::Request { url: base_url.to_string(), source })?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
    }

    pub fn package_url(&self, package: &str) -> String {
        format!("{}/corpora/{}.zip", self.base_url, package)
    }

    /// Fetch `<base>/corpora/<package>.zip` into the cache and record its manifest.
    pub fn fetch(&self, paths: &DataPaths, package: &str) -> Result<Manifest> {
        let url = self.package_url(package);
        tracing::info!(%url, "downloading corpus package");
        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|source| CorpusError::Request { url: url.clone(), source })?;
        if !resp.status().is_success() {
            return Err(CorpusError::Http { url, status: resp.status().as_u16() });
        }
        let bytes = resp.bytes().map_err(|source| CorpusError::Request { url: url.clone(), source })?;

        fs::create_dir_all(paths.corpora_dir())?;
        let part = paths.partial_zip(package);
        {
            let mut f = File::create(&part)?;
            f.write_all(&bytes)?;
            f.sync_all()?;
        }
        fs::rename(&part, paths.package_zip(package))?;

        let manifest = Manifest {
            package: package.to_string(),
            url,
            bytes: bytes.len() as u64,
            sha1: sha1_hex(&bytes),
            fetched_at: time::OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default(),
        };
        save_manifest(&paths.manifest(package), &manifest)?;
        tracing::info!(package, bytes = manifest.bytes, sha1 = %manifest.sha1, "package cached");
        Ok(manifest)
    }
}

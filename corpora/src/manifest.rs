use crate::error::Result;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Sidecar written next to every downloaded package zip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub package: String,
    pub url: String,
    pub bytes: u64,
    pub sha1: String,
    pub fetched_at: String,
}

pub fn sha1_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

pub fn sha1_file(path: &Path) -> Result<String> {
    let mut f = File::open(path)?;
    let mut hasher = Sha1::new();
    io::copy(&mut f, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

pub fn save_manifest(path: &Path, manifest: &Manifest) -> Result<()> {
    let mut f = File::create(path)?;
    let json = serde_json::to_string_pretty(manifest)?;
    f.write_all(json.as_bytes())?;
    Ok(())
}

/// `Ok(None)` when no manifest was written for this package.
pub fn load_manifest(path: &Path) -> Result<Option<Manifest>> {
    if !path.is_file() {
        return Ok(None);
    }
    let mut f = File::open(path)?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)?;
    let manifest: Manifest = serde_json::from_str(&buf)?;
    Ok(Some(manifest))
}

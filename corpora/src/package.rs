use crate::error::Result;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::ZipArchive;

/// An installed corpus package: either unpacked on disk or still zipped.
pub enum Package {
    Dir(PathBuf),
    Zip { archive: ZipArchive<File>, prefix: String },
}

impl Package {
    pub fn open_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::Dir(dir.as_ref().to_path_buf())
    }

    /// Members of `<package>.zip` are expected under `<package>/`.
    pub fn open_zip<P: AsRef<Path>>(path: P, package: &str) -> Result<Self> {
        let archive = ZipArchive::new(File::open(path)?)?;
        Ok(Self::Zip { archive, prefix: format!("{package}/") })
    }

    /// File ids relative to the package root, `/`-separated and sorted. Directories are skipped.
    pub fn fileids(&self) -> Vec<String> {
        let mut ids: Vec<String> = match self {
            Self::Dir(root) => WalkDir::new(root)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .filter_map(|e| {
                    let rel = e.path().strip_prefix(root).ok()?;
                    let parts: Vec<String> = rel.components().map(|c| c.as_os_str().to_string_lossy().into_owned()).collect();
                    Some(parts.join("/"))
                })
                .collect(),
            Self::Zip { archive, prefix } => archive
                .file_names()
                .filter(|name| !name.ends_with('/'))
                .filter_map(|name| name.strip_prefix(prefix.as_str()))
                .filter(|rel| !rel.is_empty())
                .map(str::to_string)
                .collect(),
        };
        ids.sort();
        ids
    }

    pub fn read(&mut self, fileid: &str) -> Result<Vec<u8>> {
        match self {
            Self::Dir(root) => Ok(fs::read(root.join(fileid))?),
            Self::Zip { archive, prefix } => {
                let mut entry = archive.by_name(&format!("{prefix}{fileid}"))?;
                let mut buf = Vec::with_capacity(entry.size() as usize);
                entry.read_to_end(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

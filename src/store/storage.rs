//! Storage ports for the record collection.
//!
//! The store only ever reads or writes the whole serialized collection, so a
//! backend needs nothing more than get/set on one blob.
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Durable home for the serialized record collection.
pub trait StoragePort {
    /// Return the stored collection, or `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored collection. Implementations must never leave a
    /// half-written collection behind.
    fn save(&mut self, serialized: &str) -> Result<()>;

    /// Keep a copy of data the store could not parse before it gets
    /// overwritten by the next save.
    fn preserve_unreadable(&mut self, _raw: &str) -> Result<()> {
        Ok(())
    }
}

/// JSON file backend. Writes go to a sibling temp file that is synced and
/// then renamed over the target.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where unparseable data is copied aside.
    pub fn unreadable_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("records.json");
        self.path.with_file_name(format!("{file_name}.unreadable"))
    }

    /// The first unused backup name: `unreadable_path()`, then `.1`, `.2`, ...
    /// so an earlier copy is never overwritten.
    pub fn free_unreadable_path(&self) -> PathBuf {
        let first = self.unreadable_path();
        if !first.exists() {
            return first;
        }
        let mut counter = 1u32;
        loop {
            let mut name = first.clone().into_os_string();
            name.push(format!(".{counter}"));
            let candidate = PathBuf::from(name);
            if !candidate.exists() {
                return candidate;
            }
            counter += 1;
        }
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl StoragePort for FileStorage {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.is_file() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(text))
    }

    fn save(&mut self, serialized: &str) -> Result<()> {
        let parent = self.parent_dir();
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        let mut tmp = NamedTempFile::new_in(parent)
            .with_context(|| format!("create temp file in {}", parent.display()))?;
        tmp.write_all(serialized.as_bytes())
            .with_context(|| format!("write {}", tmp.path().display()))?;
        tmp.as_file()
            .sync_all()
            .with_context(|| format!("sync {}", tmp.path().display()))?;
        tmp.persist(&self.path)
            .with_context(|| format!("publish {}", self.path.display()))?;
        Ok(())
    }

    fn preserve_unreadable(&mut self, raw: &str) -> Result<()> {
        let backup = self.free_unreadable_path();
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&backup)
            .with_context(|| format!("create {}", backup.display()))?;
        file.write_all(raw.as_bytes())
            .with_context(|| format!("write {}", backup.display()))?;
        tracing::warn!(path = %backup.display(), "kept a copy of unreadable records");
        Ok(())
    }
}

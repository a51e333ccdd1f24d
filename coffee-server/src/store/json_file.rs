//! JSON file backend
//!
//! One pretty-printed JSON array per collection. Writes go to a sibling
//! `*.tmp` file which is then renamed over the target.

use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{RecordStore, StoreResult};

/// Indentation used by every collection file
const INDENT: &[u8] = b"    ";

pub struct JsonFileStore<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// Like [`JsonFileStore::new`], creating an empty file when none exists
    pub fn create(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let store = Self::new(path);
        if !store.path.exists() {
            fs::write(&store.path, b"")?;
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl<T> RecordStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned,
{
    fn read(&self) -> StoreResult<Vec<T>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        // `null` reads as an empty collection
        let records: Option<Vec<T>> = serde_json::from_slice(&bytes)?;
        Ok(records.unwrap_or_default())
    }

    fn write(&self, records: &[T]) -> StoreResult<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut serializer)?;

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, &buf)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to rename tmp collection file");
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        Ok(())
    }
}

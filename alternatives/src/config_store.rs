use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A named key-value configuration object served by an external store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigObject {
    pub name: String,
    #[serde(default)]
    pub data: HashMap<String, String>,
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("config object {0} not found")]
    NotFound(String),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("config object is not a valid manifest: {0}")]
    Format(#[from] serde_yaml::Error),
}

/// Read-only accessor for named configuration objects.
///
/// Implementations may be backed by a concurrently updated cache; `get`
/// returns whatever the store holds at call time.
pub trait ConfigStore: Send + Sync {
    fn get(&self, name: &str) -> Result<ConfigObject, StoreError>;
}

/// Store holding config objects in process memory.
///
/// Doubles as the write side for embeddings that receive configuration
/// through their own channels, and as the fixture store in tests.
#[derive(Default)]
pub struct InMemoryConfigStore {
    objects: RwLock<HashMap<String, ConfigObject>>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        InMemoryConfigStore::default()
    }

    /// Inserts or replaces an object under its own name.
    pub fn insert(&self, object: ConfigObject) {
        self.objects.write().insert(object.name.clone(), object);
    }

    pub fn remove(&self, name: &str) {
        self.objects.write().remove(name);
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn get(&self, name: &str) -> Result<ConfigObject, StoreError> {
        self.objects
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }
}

/// Store serving config objects from manifest files on disk.
///
/// An object named `n` lives at `<base_dir>/n.yaml` and is re-read on every
/// `get`, so an operator edit is visible to the next caller.
pub struct FileConfigStore {
    base_dir: PathBuf,
}

impl FileConfigStore {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        FileConfigStore {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn object_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{name}.yaml"))
    }

    /// Writes the object manifest, creating or overwriting the file.
    pub fn store(&self, object: &ConfigObject) -> Result<(), StoreError> {
        let file = File::create(self.object_path(&object.name))?;
        let mut writer = io::BufWriter::new(file);
        serde_yaml::to_writer(&mut writer, object)?;
        writer.flush()?;
        Ok(())
    }
}

impl ConfigStore for FileConfigStore {
    fn get(&self, name: &str) -> Result<ConfigObject, StoreError> {
        let file = match File::open(self.object_path(name)) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(name.to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_yaml::from_reader(io::BufReader::new(file))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_object() -> ConfigObject {
        ConfigObject {
            name: "scaling-config".to_string(),
            data: HashMap::from([("alternatives".to_string(), "pool-a: [pool-b]".to_string())]),
        }
    }

    #[test]
    fn test_in_memory_insert_get_remove() {
        let store = InMemoryConfigStore::new();
        assert!(matches!(
            store.get("scaling-config").unwrap_err(),
            StoreError::NotFound(_)
        ));

        store.insert(sample_object());
        assert_eq!(store.get("scaling-config").unwrap(), sample_object());

        store.remove("scaling-config");
        assert!(matches!(
            store.get("scaling-config").unwrap_err(),
            StoreError::NotFound(_)
        ));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConfigStore::new(dir.path());

        store.store(&sample_object()).unwrap();
        assert_eq!(store.get("scaling-config").unwrap(), sample_object());
    }

    #[test]
    fn test_file_store_missing_object() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConfigStore::new(dir.path());

        assert!(matches!(
            store.get("scaling-config").unwrap_err(),
            StoreError::NotFound(_)
        ));
    }

    #[test]
    fn test_file_store_invalid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("scaling-config.yaml"), "- just\n- a\n- list\n").unwrap();

        let store = FileConfigStore::new(dir.path());
        assert!(matches!(
            store.get("scaling-config").unwrap_err(),
            StoreError::Format(_)
        ));
    }
}

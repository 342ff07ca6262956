use crate::errors::Error;
use crate::settings::Setting;
use crate::{StorageAdapter, LOG_TARGET};
use log::warn;
use rasterfont_shared::types::Result;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Stores settings as a flat json object of `"key": "type:value"` pairs
pub struct JsonStorageAdapter {
    path: PathBuf,
    elements: Mutex<HashMap<String, Setting>>,
}

impl TryFrom<&String> for JsonStorageAdapter {
    type Error = anyhow::Error;

    fn try_from(path: &String) -> Result<Self> {
        Self::open(Path::new(path))
    }
}

impl JsonStorageAdapter {
    /// Opens the json file at `path`, creating an empty one when it does not exist yet
    pub fn open(path: &Path) -> Result<Self> {
        if let Ok(metadata) = fs::metadata(path) {
            if !metadata.is_file() {
                return Err(Error::Config(format!("{} is not a regular file", path.display())).into());
            }
        } else {
            fs::write(path, "{}").map_err(Error::from)?;
        }

        let adapter = JsonStorageAdapter {
            path: path.to_path_buf(),
            elements: Mutex::new(Self::read_file(path)?),
        };

        Ok(adapter)
    }

    /// Reads the whole json file
    fn read_file(path: &Path) -> Result<HashMap<String, Setting>> {
        let buf = fs::read_to_string(path).map_err(Error::from)?;
        let parsed_json: Value = serde_json::from_str(&buf).map_err(Error::from)?;

        let mut elements = HashMap::new();
        if let Value::Object(settings) = parsed_json {
            for (key, value) in settings {
                match serde_json::from_value(value) {
                    Ok(setting) => {
                        elements.insert(key, setting);
                    }
                    Err(err) => {
                        warn!(target: LOG_TARGET, "problem reading setting {key} from json: {err}");
                    }
                }
            }
        }

        Ok(elements)
    }

    /// Writes all elements back to the file, keys in sorted order
    fn write_file(&self, elements: &HashMap<String, Setting>) -> Result<()> {
        let sorted: BTreeMap<&String, &Setting> = elements.iter().collect();
        let json = serde_json::to_string_pretty(&sorted).map_err(Error::from)?;
        fs::write(&self.path, json).map_err(Error::from)?;
        Ok(())
    }
}

impl StorageAdapter for JsonStorageAdapter {
    fn set(&self, key: &str, value: Setting) {
        let mut lock = self.elements.lock().unwrap_or_else(PoisonError::into_inner);
        lock.insert(key.to_owned(), value);

        if let Err(err) = self.write_file(&lock) {
            warn!(target: LOG_TARGET, "cannot persist settings to {}: {err}", self.path.display());
        }
    }

    fn all(&self) -> Result<HashMap<String, Setting>> {
        let lock = self.elements.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(lock.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let adapter = JsonStorageAdapter::open(&path).unwrap();
        assert!(adapter.all().unwrap().is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");

        adapter.set("render.font_index", Setting::UInt(2));
        adapter.set("render.orientation", Setting::String("left".into()));

        let stored = JsonStorageAdapter::open(&path).unwrap().all().unwrap();
        assert_eq!(stored.get("render.font_index"), Some(&Setting::UInt(2)));
        assert_eq!(stored.get("render.orientation"), Some(&Setting::String("left".into())));
    }

    #[test]
    fn skips_invalid_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"render.bit_offset": "u:3", "render.raster": "nonsense"}"#).unwrap();

        let stored = JsonStorageAdapter::open(&path).unwrap().all().unwrap();
        assert_eq!(stored.get("render.bit_offset"), Some(&Setting::UInt(3)));
        assert!(!stored.contains_key("render.raster"));
    }

    #[test]
    fn rejects_directories() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonStorageAdapter::open(dir.path()).is_err());
    }
}

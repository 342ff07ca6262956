//! Render configuration for rasterfont.
//!
//! Every key is declared in `settings.json` together with its default value and a description.
//! Values may be loaded from and persisted to a [`StorageAdapter`]. Keys that are not declared and
//! values of the wrong type are refused with a warning.
pub mod errors;
pub mod settings;
pub mod storage;

use crate::errors::Error;
use crate::settings::{Setting, SettingInfo};
use crate::storage::MemoryStorageAdapter;
use lazy_static::lazy_static;
use log::{debug, warn};
use rasterfont_shared::types::Result;
use serde_derive::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use wildmatch::WildMatch;

pub const LOG_TARGET: &str = "rasterfont::config";

const SETTINGS_JSON: &str = include_str!("./settings.json");

/// Backing store for configuration values
pub trait StorageAdapter: Send + Sync {
    /// Stores a value. Persistent adapters write it out right away.
    fn set(&self, key: &str, value: Setting);

    /// All stored values, used to preload the config store
    fn all(&self) -> Result<HashMap<String, Setting>>;
}

lazy_static! {
    // Starts out in memory. The CLI swaps in a json file with `--config`.
    static ref CONFIG_STORE: RwLock<ConfigStore> = RwLock::new(ConfigStore::default());
}

/// Shared access to the config store: `config_store().get("render.raster")`
pub fn config_store() -> RwLockReadGuard<'static, ConfigStore> {
    CONFIG_STORE.read().unwrap_or_else(PoisonError::into_inner)
}

/// Exclusive access, needed to swap the storage adapter
pub fn config_store_write() -> RwLockWriteGuard<'static, ConfigStore> {
    CONFIG_STORE.write().unwrap_or_else(PoisonError::into_inner)
}

/// Reads a value from the config store:
///
/// let index = config!(uint "render.font_index");
/// let raster = config!(string "render.raster");
///
/// Unknown keys read as 0 or an empty string.
#[macro_export]
macro_rules! config {
    (uint $key:expr) => {
        $crate::config_store().get($key).map_or(0, |setting| setting.to_uint())
    };
    (string $key:expr) => {
        $crate::config_store()
            .get($key)
            .map(|setting| setting.value())
            .unwrap_or_default()
    };
}

/// One entry of a section in settings.json
#[derive(Debug, Deserialize)]
struct Declaration {
    key: String,
    default: String,
    description: String,
}

/// The declared render settings and their current values
pub struct ConfigStore {
    values: Mutex<HashMap<String, Setting>>,
    /// Declared settings, in settings.json order
    declared: Vec<SettingInfo>,
    storage: Box<dyn StorageAdapter>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        let declared = declarations().unwrap_or_else(|err| {
            warn!(target: LOG_TARGET, "cannot read declared settings: {err}");
            Vec::new()
        });
        let values = declared
            .iter()
            .map(|info| (info.key.clone(), info.default.clone()))
            .collect();

        Self {
            values: Mutex::new(values),
            declared,
            storage: Box::new(MemoryStorageAdapter::new()),
        }
    }
}

/// Parses the declarations embedded from settings.json
fn declarations() -> Result<Vec<SettingInfo>> {
    let sections: Map<String, Value> = serde_json::from_str(SETTINGS_JSON).map_err(Error::from)?;

    let mut declared = Vec::new();
    for (section, entries) in sections {
        let entries: Vec<Declaration> = serde_json::from_value(entries).map_err(Error::from)?;
        for entry in entries {
            declared.push(SettingInfo {
                key: format!("{section}.{}", entry.key),
                description: entry.description,
                default: entry.default.parse()?,
            });
        }
    }

    Ok(declared)
}

impl ConfigStore {
    fn values(&self) -> MutexGuard<'_, HashMap<String, Setting>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn info(&self, key: &str) -> Option<&SettingInfo> {
        self.declared.iter().find(|info| info.key == key)
    }

    /// Switches to another storage and takes over the values it holds. Stored values for
    /// undeclared keys or of the wrong type are skipped.
    pub fn set_storage(&mut self, storage: Box<dyn StorageAdapter>) {
        self.storage = storage;

        let stored = match self.storage.all() {
            Ok(stored) => stored,
            Err(err) => {
                warn!(target: LOG_TARGET, "cannot load stored settings: {err}");
                return;
            }
        };

        for (key, value) in stored {
            match self.info(&key) {
                Some(info) if info.default.same_type(&value) => {
                    debug!(target: LOG_TARGET, "loaded {key} = {value}");
                    self.values().insert(key, value);
                }
                Some(_) => warn!(target: LOG_TARGET, "stored value for {key} has the wrong type: {value}"),
                None => warn!(target: LOG_TARGET, "ignoring stored value for unknown setting {key}"),
            }
        }
    }

    /// Puts every setting back to its default, in the store and in the storage
    pub fn reset(&self) {
        let mut values = self.values();
        for info in &self.declared {
            values.insert(info.key.clone(), info.default.clone());
            self.storage.set(&info.key, info.default.clone());
        }
    }

    /// Declared keys matching a pattern with `?` and `*` wildcards, in declaration order
    pub fn find(&self, pattern: &str) -> Vec<String> {
        let pattern = WildMatch::new(pattern);

        self.declared
            .iter()
            .filter(|info| pattern.matches(&info.key))
            .map(|info| info.key.clone())
            .collect()
    }

    /// Description and default of a declared key
    pub fn get_info(&self, key: &str) -> Option<SettingInfo> {
        self.info(key).cloned()
    }

    /// Returns the current value of a key, or None (with a warning) when the key is not declared
    pub fn get(&self, key: &str) -> Option<Setting> {
        let setting = self.values().get(key).cloned();
        if setting.is_none() {
            warn!(target: LOG_TARGET, "setting {key} is not known");
        }
        setting
    }

    /// Changes a value and persists it to the storage
    pub fn set(&self, key: &str, value: Setting) -> std::result::Result<(), Error> {
        let Some(info) = self.info(key) else {
            warn!(target: LOG_TARGET, "setting {key} is not known");
            return Err(Error::Config(format!("unknown setting {key}")));
        };

        if !info.default.same_type(&value) {
            warn!(target: LOG_TARGET, "setting {key} expects a value like {}, got {value}", info.default);
            return Err(Error::Config(format!("{value} has the wrong type for {key}")));
        }

        self.values().insert(key.to_owned(), value.clone());
        self.storage.set(key, value);
        Ok(())
    }

    /// Changes a value given without type prefix, e.g. `("render.bit_offset", "3")`
    pub fn set_from_str(&self, key: &str, value: &str) -> std::result::Result<(), Error> {
        let Some(info) = self.info(key) else {
            return Err(Error::Config(format!("unknown setting {key}")));
        };

        let setting = info.default.parse_as_same(value)?;
        self.set(key, setting)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // The config store is global, tests that change it must not interleave
    static LOCK: Mutex<()> = Mutex::new(());

    fn fresh_store() -> MutexGuard<'static, ()> {
        let guard = LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        config_store_write().set_storage(Box::new(MemoryStorageAdapter::new()));
        config_store().reset();
        guard
    }

    #[test]
    fn defaults_and_overrides() {
        let _guard = fresh_store();

        assert_eq!(config_store().get("render.raster"), Some(Setting::String("row-major".into())));

        config_store()
            .set("render.raster", Setting::String("column-major".into()))
            .unwrap();
        assert_eq!(config_store().get("render.raster"), Some(Setting::String("column-major".into())));

        config_store().reset();
        assert_eq!(config!(string "render.raster"), "row-major");
    }

    #[test]
    fn declared_keys() {
        let store = ConfigStore::default();

        assert_eq!(
            store.find("render.*"),
            vec!["render.font_index", "render.raster", "render.orientation", "render.bit_offset"]
        );
        assert_eq!(store.find("*pixels"), vec!["layout.line_pixels"]);
        assert!(store.get("render.unknown").is_none());

        let info = store.get_info("layout.line_pixels").unwrap();
        assert_eq!(info.default, Setting::UInt(128));
        assert!(!info.description.is_empty());
    }

    #[test]
    fn refuses_unknown_and_mistyped() {
        let store = ConfigStore::default();
        testing_logger::setup();

        assert!(store
            .set("render.font_index", Setting::String("wont accept strings".into()))
            .is_err());
        assert!(store.set("render.unknown", Setting::UInt(1)).is_err());

        testing_logger::validate(|captured_logs| {
            assert_eq!(captured_logs.len(), 2);
            assert!(captured_logs.iter().all(|log| log.level == log::Level::Warn));
        });
        assert_eq!(store.get("render.font_index"), Some(Setting::UInt(0)));
    }

    #[test]
    fn set_bare_values() {
        let store = ConfigStore::default();

        store.set_from_str("render.bit_offset", "13").unwrap();
        store.set_from_str("render.orientation", "left").unwrap();
        assert_eq!(store.get("render.bit_offset"), Some(Setting::UInt(13)));
        assert_eq!(store.get("render.orientation"), Some(Setting::String("left".into())));

        assert!(store.set_from_str("render.bit_offset", "-1").is_err());
        assert!(store.set_from_str("render.nothing", "1").is_err());
        assert_eq!(store.get("render.bit_offset"), Some(Setting::UInt(13)));
    }

    #[test]
    fn stored_values_are_checked() {
        let storage = MemoryStorageAdapter::new();
        storage.set("render.font_index", Setting::String("two".into()));
        storage.set("render.bit_offset", Setting::UInt(5));
        storage.set("render.colour", Setting::String("blue".into()));

        let mut store = ConfigStore::default();
        store.set_storage(Box::new(storage));

        assert_eq!(store.get("render.font_index"), Some(Setting::UInt(0)));
        assert_eq!(store.get("render.bit_offset"), Some(Setting::UInt(5)));
        assert!(store.get("render.colour").is_none());
    }

    #[test]
    fn reset_reaches_storage() {
        let mut store = ConfigStore::default();
        store.set_storage(Box::new(MemoryStorageAdapter::new()));
        store.set("layout.line_pixels", Setting::UInt(64)).unwrap();

        store.reset();
        assert_eq!(store.get("layout.line_pixels"), Some(Setting::UInt(128)));
        let stored = store.storage.all().unwrap();
        assert_eq!(stored.get("layout.line_pixels"), Some(&Setting::UInt(128)));
    }

    #[test]
    fn macro_usage() {
        let _guard = fresh_store();

        config_store().set("render.bit_offset", Setting::UInt(13)).unwrap();
        assert_eq!(config!(uint "render.bit_offset"), 13);
        assert_eq!(config!(string "render.orientation"), "top");
        assert_eq!(config!(uint "render.missing"), 0);

        config_store().reset();
    }
}

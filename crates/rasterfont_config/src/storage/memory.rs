use crate::settings::Setting;
use crate::StorageAdapter;
use rasterfont_shared::types::Result;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Keeps settings for the lifetime of the process only
#[derive(Default)]
pub struct MemoryStorageAdapter {
    settings: Mutex<HashMap<String, Setting>>,
}

impl MemoryStorageAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings: Mutex::new(HashMap::new()),
        }
    }
}

impl StorageAdapter for MemoryStorageAdapter {
    fn set(&self, key: &str, value: Setting) {
        let mut lock = self.settings.lock().unwrap_or_else(PoisonError::into_inner);
        lock.insert(key.to_owned(), value);
    }

    fn all(&self) -> Result<HashMap<String, Setting>> {
        let lock = self.settings.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(lock.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_load() {
        let adapter = MemoryStorageAdapter::new();
        assert!(adapter.all().unwrap().is_empty());

        adapter.set("render.raster", Setting::String("column-major".into()));
        adapter.set("render.raster", Setting::String("row-major".into()));

        let all = adapter.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all.get("render.raster"), Some(&Setting::String("row-major".into())));
    }
}

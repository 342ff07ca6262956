use log::debug;
use rasterfont_config::config;
use rasterfont_fontmanager::{FontManager, FontRegistry, FontResult, Orientation, Raster};
use rasterfont_shared::types::{Error, Result};

const LOG_TARGET: &str = "rasterfont::render_settings";

/// Render defaults as found in the config store
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    pub font_index: usize,
    pub raster: Raster,
    pub orientation: Orientation,
    pub bit_offset: u16,
    /// Pixels in a display line, used for line breaking
    pub line_pixels: u16,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            font_index: 0,
            raster: Raster::default(),
            orientation: Orientation::default(),
            bit_offset: 0,
            line_pixels: 128,
        }
    }
}

impl RenderSettings {
    /// Reads the `render.*` and `layout.*` keys from the config store
    pub fn from_store() -> Result<Self> {
        let raster = config!(string "render.raster").parse::<Raster>()?;
        let orientation = config!(string "render.orientation").parse::<Orientation>()?;

        let settings = Self {
            font_index: config!(uint "render.font_index"),
            raster,
            orientation,
            bit_offset: to_u16("render.bit_offset", config!(uint "render.bit_offset"))?,
            line_pixels: to_u16("layout.line_pixels", config!(uint "layout.line_pixels"))?,
        };

        debug!(target: LOG_TARGET, "render settings from store: {settings:?}");
        Ok(settings)
    }

    /// Binds a font manager for these settings
    pub fn manager(&self, registry: &FontRegistry) -> FontResult<FontManager> {
        FontManager::new(registry, self.font_index, self.raster, self.orientation)
    }
}

fn to_u16(key: &str, value: usize) -> Result<u16> {
    u16::try_from(value).map_err(|_| Error::Config(format!("{key} is out of range: {value}")).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterfont_config::settings::Setting;
    use rasterfont_config::storage::MemoryStorageAdapter;
    use rasterfont_config::{config_store, config_store_write};
    use std::sync::{Mutex, PoisonError};

    static LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn defaults_from_store() {
        let _guard = LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        config_store_write().set_storage(Box::new(MemoryStorageAdapter::new()));
        config_store().reset();

        let settings = RenderSettings::from_store().unwrap();
        assert_eq!(settings, RenderSettings::default());
    }

    #[test]
    fn overridden_settings() {
        let _guard = LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        config_store_write().set_storage(Box::new(MemoryStorageAdapter::new()));

        config_store().set("render.font_index", Setting::UInt(2)).unwrap();
        config_store().set("render.raster", Setting::String("ptblr".into())).unwrap();
        config_store().set("render.orientation", Setting::String("left".into())).unwrap();
        config_store().set("render.bit_offset", Setting::UInt(11)).unwrap();

        let settings = RenderSettings::from_store().unwrap();
        assert_eq!(settings.font_index, 2);
        assert_eq!(settings.raster, Raster::ColumnMajor);
        assert_eq!(settings.orientation, Orientation::Left);
        assert_eq!(settings.bit_offset, 11);

        let manager = settings.manager(&FontRegistry::builtin()).unwrap();
        assert_eq!(manager.font_name(), "glcd_10x14");

        config_store().reset();
    }

    #[test]
    fn invalid_settings() {
        let _guard = LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        config_store_write().set_storage(Box::new(MemoryStorageAdapter::new()));

        config_store().set("render.raster", Setting::String("diagonal".into())).unwrap();
        assert!(RenderSettings::from_store().is_err());
        config_store().reset();

        config_store().set("layout.line_pixels", Setting::UInt(70_000)).unwrap();
        assert!(RenderSettings::from_store().is_err());
        config_store().reset();
    }
}

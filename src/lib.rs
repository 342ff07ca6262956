//! Rasterfont
//!
//! Bitmap font rasterization for small monochrome displays. The heavy lifting happens in the
//! workspace crates, this crate ties them together with the configuration store.
pub use rasterfont_config as config;
pub use rasterfont_fontmanager as fontmanager;
pub use rasterfont_shared as shared;

pub mod render_settings;

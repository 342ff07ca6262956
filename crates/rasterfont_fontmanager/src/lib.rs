//! Bitmap font rasterizer for monochrome displays.
//!
//! Glyphs from statically compiled fonts are packed into byte buffers using the pixel ordering of
//! the target display controller: row-major (8 horizontal pixels per byte) or paged column-major
//! (8 vertical pixels per byte).
//!
//! ```
//! use rasterfont_fontmanager::{FontManager, FontRegistry, Orientation, Raster};
//!
//! let registry = FontRegistry::builtin();
//! let manager = FontManager::new(&registry, 0, Raster::RowMajor, Orientation::Top)?;
//! let bitmap = manager.rasterize_char('|', 1)?;
//! assert_eq!(bitmap.data(), &[0x10, 0x10, 0x10, 0x00, 0x10, 0x10, 0x10]);
//! # Ok::<(), rasterfont_fontmanager::FontError>(())
//! ```

pub mod bitmap;
pub mod errors;
pub mod font;
pub mod fonts;
pub mod geometry;
pub mod manager;
pub mod metrics;
pub mod raster;
pub mod registry;

pub use bitmap::Bitmap;
pub use errors::{FontError, FontResult};
pub use font::{Font, GlyphDescriptor, Orientation, Raster};
pub use manager::FontManager;
pub use registry::FontRegistry;

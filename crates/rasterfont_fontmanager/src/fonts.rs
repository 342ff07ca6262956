//! Fonts compiled into the library

mod glcd_10x14;
mod glcd_5x7;
mod glcd_prop_5x7;

pub use glcd_10x14::GLCD_10X14;
pub use glcd_5x7::GLCD_5X7;
pub use glcd_prop_5x7::GLCD_PROP_5X7;

use crate::font::Font;

/// All built-in fonts, in font index order
pub static BUILTIN_FONTS: [&Font; 3] = [&GLCD_5X7, &GLCD_PROP_5X7, &GLCD_10X14];

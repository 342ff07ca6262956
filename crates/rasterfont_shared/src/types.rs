//! Error results and small geometry types shared across the workspace

use derive_more::Display;
use thiserror::Error;

/// Errors raised while turning configuration into render parameters
#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),
}

/// Result that can be returned which holds either T or an Error
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Pixel extent in two dimensions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[display("{width}x{height}")]
pub struct Size<T: Copy> {
    pub width: T,
    pub height: T,
}

impl<T: Copy> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_display() {
        let size = Size::new(12u16, 7u16);
        assert_eq!(size.to_string(), "12x7");
        assert_eq!(Size::<u16>::default(), Size::new(0, 0));
    }

    #[test]
    fn config_error_message() {
        let err = Error::Config("layout.line_pixels is out of range: 70000".into());
        assert_eq!(err.to_string(), "config error: layout.line_pixels is out of range: 70000");
    }
}

//! Symbolgen
//!
//! Headless view-to-bitmap snapshots, intended for producing icons and
//! sprites that a map renderer registers as symbol images.
//!
//! # Features
//!
//! - **View snapshots**: any element implementing [`Renderable`] is measured
//!   at its natural size, laid out at the origin and drawn into a fresh
//!   transparent RGBA8888 buffer
//! - **Resource snapshots**: bundled images are decoded through an injected
//!   [`AssetResolver`], with no global application context
//! - **Symbol registry**: [`SymbolImages`] keeps generated images by name
//!
//! # Example
//!
//! ```
//! use symbolgen::{Insets, Label, NoAssets, Rgba, Snapshotter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let snapshotter = Snapshotter::new(NoAssets);
//! let mut label = Label::new("Pin")
//!     .with_background(Rgba::BLUE)
//!     .with_padding(Insets::symmetric(12, 5));
//!
//! let icon = snapshotter.snapshot_view(&mut label)?;
//! assert_eq!((icon.width(), icon.height()), (42, 18));
//! assert_eq!(icon.len(), 3024);
//! # Ok(())
//! # }
//! ```

use serde::Deserialize;

pub mod error;
pub use error::{Error, Result};

pub mod assets;
pub mod rendering;
pub mod snapshot;
pub mod symbols;

pub use assets::{AssetId, AssetResolver, DirectoryAssets, MemoryAssets, NoAssets};
pub use rendering::layout::{Insets, MeasureSpec, Rect, Renderable, Size};
pub use rendering::paint::{Canvas, PaintCommand};
pub use rendering::views::{ColorView, ImageView, Label, Orientation, Stack};
pub use rendering::{PixelBuffer, PixelFormat, Rgba};
pub use snapshot::Snapshotter;
pub use symbols::SymbolImages;

/// Limits applied to every surface the snapshotter allocates.
///
/// Requests above either limit fail with `Error::ResourceExhaustion` before
/// any memory is reserved. The defaults are generous enough for any icon.
///
/// # Examples
///
/// ```
/// let cfg = symbolgen::SnapshotConfig::from_json(r#"{ "max_dimension": 512 }"#).unwrap();
/// assert_eq!(cfg.max_dimension, 512);
/// assert_eq!(cfg.max_bytes, symbolgen::SnapshotConfig::default().max_bytes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnapshotConfig {
    /// Largest allowed width or height in pixels
    pub max_dimension: u32,
    /// Largest allowed buffer size in bytes
    pub max_bytes: usize,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            max_dimension: 16384,
            max_bytes: 256 * 1024 * 1024,
        }
    }
}

impl SnapshotConfig {
    /// Parse a JSON configuration; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: SnapshotConfig =
            serde_json::from_str(json).map_err(|e| Error::ConfigError(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_dimension == 0 {
            return Err(Error::ConfigError("max_dimension must be positive".into()));
        }
        if self.max_bytes == 0 {
            return Err(Error::ConfigError("max_bytes must be positive".into()));
        }
        Ok(())
    }

    /// Check that a `width` x `height` surface fits within the limits.
    pub fn check_surface(&self, width: u32, height: u32) -> Result<()> {
        let fits = width <= self.max_dimension
            && height <= self.max_dimension
            && rendering::surface_len(width, height).is_some_and(|len| len <= self.max_bytes);
        if !fits {
            log::warn!(
                "refusing {}x{} surface (max_dimension {}, max_bytes {})",
                width,
                height,
                self.max_dimension,
                self.max_bytes
            );
            return Err(Error::ResourceExhaustion { width, height });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SnapshotConfig::default();
        assert_eq!(config.max_dimension, 16384);
        assert!(config.validate().is_ok());
        assert!(config.check_surface(0, 0).is_ok());
        assert!(config.check_surface(512, 512).is_ok());
    }

    #[test]
    fn test_byte_limit() {
        let config = SnapshotConfig { max_dimension: 100, max_bytes: 400 };
        assert!(config.check_surface(10, 10).is_ok());
        assert!(matches!(
            config.check_surface(11, 10),
            Err(Error::ResourceExhaustion { width: 11, height: 10 })
        ));
    }

    #[test]
    fn test_config_json_errors() {
        assert!(matches!(SnapshotConfig::from_json("{"), Err(Error::ConfigError(_))));
        assert!(matches!(
            SnapshotConfig::from_json(r#"{ "max_bytes": 0 }"#),
            Err(Error::ConfigError(_))
        ));
        assert!(matches!(
            SnapshotConfig::from_json(r#"{ "colour": "red" }"#),
            Err(Error::ConfigError(_))
        ));
    }
}

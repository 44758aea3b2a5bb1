//! Static asset resolution and decoding
//!
//! Assets are looked up through an injected `AssetResolver` rather than any
//! global application context, then decoded to RGBA8888 with the `image`
//! crate. Decoding never involves a measure/layout pass.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Component, Path, PathBuf};

use log::{debug, warn};

use crate::rendering::PixelBuffer;
use crate::{Error, Result, SnapshotConfig};

/// Stable identifier of a bundled asset, e.g. `"marker"` or `"icons/pin.png"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        AssetId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        AssetId(s.to_string())
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        AssetId(s)
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps asset identifiers to their encoded bytes.
pub trait AssetResolver: Send + Sync {
    /// Return the encoded asset, or `Error::ResourceNotFound`.
    fn resolve(&self, id: &AssetId) -> Result<Vec<u8>>;
}

impl<T: AssetResolver + ?Sized> AssetResolver for Box<T> {
    fn resolve(&self, id: &AssetId) -> Result<Vec<u8>> {
        (**self).resolve(id)
    }
}

impl<T: AssetResolver + ?Sized> AssetResolver for std::sync::Arc<T> {
    fn resolve(&self, id: &AssetId) -> Result<Vec<u8>> {
        (**self).resolve(id)
    }
}

/// Resolver with no assets; every lookup fails with `ResourceNotFound`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAssets;

impl AssetResolver for NoAssets {
    fn resolve(&self, id: &AssetId) -> Result<Vec<u8>> {
        Err(Error::ResourceNotFound(id.to_string()))
    }
}

/// In-memory asset catalog, typically filled with `include_bytes!` data.
#[derive(Debug, Default, Clone)]
pub struct MemoryAssets {
    assets: HashMap<AssetId, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<AssetId>, bytes: impl Into<Vec<u8>>) -> &mut Self {
        self.assets.insert(id.into(), bytes.into());
        self
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetResolver for MemoryAssets {
    fn resolve(&self, id: &AssetId) -> Result<Vec<u8>> {
        self.assets
            .get(id)
            .cloned()
            .ok_or_else(|| Error::ResourceNotFound(id.to_string()))
    }
}

/// Resolves identifiers to files below a root directory.
///
/// `id` is tried as-is, then with each configured extension appended.
/// Identifiers that would escape the root are never read.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
    extensions: Vec<String>,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: vec!["png".to_string()],
        }
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn candidates(&self, id: &AssetId) -> Option<Vec<PathBuf>> {
        let rel = Path::new(id.as_str());
        let contained = !id.as_str().is_empty()
            && rel.components().all(|c| matches!(c, Component::Normal(_)));
        if !contained {
            return None;
        }
        let base = self.root.join(rel);
        let mut paths = vec![base.clone()];
        for ext in &self.extensions {
            paths.push(PathBuf::from(format!("{}.{}", base.display(), ext)));
        }
        Some(paths)
    }
}

impl AssetResolver for DirectoryAssets {
    fn resolve(&self, id: &AssetId) -> Result<Vec<u8>> {
        let candidates = self.candidates(id).ok_or_else(|| {
            warn!("rejecting asset id outside of {}: {:?}", self.root.display(), id.as_str());
            Error::ResourceNotFound(id.to_string())
        })?;
        for path in candidates {
            if !path.is_file() {
                continue;
            }
            return std::fs::read(&path).map_err(|e| Error::DecodeFailure {
                id: id.to_string(),
                reason: format!("{}: {}", path.display(), e),
            });
        }
        Err(Error::ResourceNotFound(id.to_string()))
    }
}

/// Decode encoded image bytes into an RGBA8888 buffer at native size.
///
/// The header is probed first so oversized images are rejected with
/// `ResourceExhaustion` before any pixel memory is allocated.
pub fn decode_asset(id: &AssetId, bytes: &[u8], config: &SnapshotConfig) -> Result<PixelBuffer> {
    let decode_err = |reason: String| Error::DecodeFailure { id: id.to_string(), reason };

    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| decode_err(e.to_string()))?;
    if reader.format().is_none() {
        return Err(decode_err("unrecognised image format".into()));
    }
    let (width, height) = reader.into_dimensions().map_err(|e| decode_err(e.to_string()))?;
    config.check_surface(width, height)?;

    let decoded = image::load_from_memory(bytes).map_err(|e| match e {
        image::ImageError::Limits(_) => Error::ResourceExhaustion { width, height },
        other => decode_err(other.to_string()),
    })?;
    let rgba = decoded.to_rgba8();
    debug!("decoded asset {} at {}x{}", id, rgba.width(), rgba.height());
    PixelBuffer::from_rgba(rgba.width(), rgba.height(), rgba.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_1x1(rgba: [u8; 4]) -> Vec<u8> {
        PixelBuffer::from_rgba(1, 1, rgba.to_vec()).unwrap().to_png().unwrap()
    }

    #[test]
    fn memory_assets_resolve_and_miss() {
        let mut assets = MemoryAssets::new();
        assets.insert("dot", png_1x1([1, 2, 3, 4]));
        assert!(assets.resolve(&"dot".into()).is_ok());
        match assets.resolve(&"nope".into()) {
            Err(Error::ResourceNotFound(id)) => assert_eq!(id, "nope"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn no_assets_always_misses() {
        assert!(matches!(NoAssets.resolve(&"x".into()), Err(Error::ResourceNotFound(_))));
    }

    #[test]
    fn directory_ids_cannot_escape_root() {
        let d = DirectoryAssets::new("/srv/assets");
        assert!(d.candidates(&"../etc/passwd".into()).is_none());
        assert!(d.candidates(&"/etc/passwd".into()).is_none());
        assert!(d.candidates(&"".into()).is_none());
        let c = d.candidates(&"icons/pin".into()).unwrap();
        assert_eq!(c[0], PathBuf::from("/srv/assets/icons/pin"));
        assert_eq!(c[1], PathBuf::from("/srv/assets/icons/pin.png"));
    }

    #[test]
    fn decode_keeps_straight_alpha() {
        let bytes = png_1x1([200, 100, 50, 128]);
        let b = decode_asset(&"px".into(), &bytes, &SnapshotConfig::default()).unwrap();
        assert_eq!((b.width(), b.height()), (1, 1));
        assert_eq!(b.as_bytes(), &[200, 100, 50, 128]);
    }

    #[test]
    fn garbage_is_decode_failure() {
        match decode_asset(&"junk".into(), b"definitely not an image", &SnapshotConfig::default()) {
            Err(Error::DecodeFailure { id, .. }) => assert_eq!(id, "junk"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn truncated_png_is_decode_failure() {
        let bytes = png_1x1([0, 0, 0, 255]);
        let cut = &bytes[..bytes.len() / 2];
        let err = decode_asset(&"cut".into(), cut, &SnapshotConfig::default()).unwrap_err();
        assert!(err.is_recoverable());
    }
}

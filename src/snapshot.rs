//! The snapshot service: views and static resources to pixel buffers

use log::debug;

use crate::assets::{decode_asset, AssetId, AssetResolver};
use crate::rendering::layout::Renderable;
use crate::rendering::{raster, PixelBuffer};
use crate::{Result, SnapshotConfig};

/// Converts renderable elements or bundled images into `PixelBuffer`s.
///
/// Holds no per-call state: every call allocates a new buffer whose ownership
/// passes to the caller, and nothing is cached. Callers must invoke it on the
/// thread that owns the views being drawn.
#[derive(Debug, Clone)]
pub struct Snapshotter<R> {
    resolver: R,
    config: SnapshotConfig,
}

impl<R: AssetResolver> Snapshotter<R> {
    pub fn new(resolver: R) -> Self {
        Self::with_config(resolver, SnapshotConfig::default())
    }

    pub fn with_config(resolver: R, config: SnapshotConfig) -> Self {
        Self { resolver, config }
    }

    pub fn config(&self) -> &SnapshotConfig {
        &self.config
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Render `view` at its natural size.
    ///
    /// The view is given a layout position as a side effect. A zero-area
    /// measurement yields an empty buffer rather than an error; allocation
    /// failures surface as `Error::ResourceExhaustion`.
    pub fn snapshot_view(&self, view: &mut dyn Renderable) -> Result<PixelBuffer> {
        raster::rasterize(view, &self.config)
    }

    /// Decode the bundled image named `id` at its native dimensions.
    ///
    /// Fails with `ResourceNotFound` for unknown ids and `DecodeFailure` for
    /// unreadable data; no placeholder is substituted.
    pub fn snapshot_resource(&self, id: impl Into<AssetId>) -> Result<PixelBuffer> {
        let id = id.into();
        let bytes = self.resolver.resolve(&id)?;
        debug!("resolved asset {} ({} bytes)", id, bytes.len());
        decode_asset(&id, &bytes, &self.config)
    }
}

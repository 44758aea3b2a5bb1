//! Named registry of symbol images, the consumer side of a snapshot.
//!
//! A map style refers to icons by string id (a symbol layer's `icon-image`);
//! this registry holds the buffers behind those ids.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::assets::{AssetId, AssetResolver};
use crate::rendering::layout::Renderable;
use crate::rendering::PixelBuffer;
use crate::snapshot::Snapshotter;
use crate::Result;

#[derive(Debug, Default, Clone)]
pub struct SymbolImages {
    images: BTreeMap<String, PixelBuffer>,
}

impl SymbolImages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `image` under `name`, returning any image it replaces.
    pub fn add_image(&mut self, name: impl Into<String>, image: PixelBuffer) -> Option<PixelBuffer> {
        let name = name.into();
        debug!("adding symbol image {} ({}x{})", name, image.width(), image.height());
        self.images.insert(name, image)
    }

    pub fn get(&self, name: &str) -> Option<&PixelBuffer> {
        self.images.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<PixelBuffer> {
        self.images.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.images.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Snapshot `view` and register it. On failure the registry is untouched.
    pub fn add_view<R: AssetResolver>(
        &mut self,
        snapshotter: &Snapshotter<R>,
        name: impl Into<String>,
        view: &mut dyn Renderable,
    ) -> Result<Option<PixelBuffer>> {
        let image = snapshotter.snapshot_view(view)?;
        Ok(self.add_image(name, image))
    }

    /// Decode the asset `id` and register it under `name`.
    pub fn add_resource<R: AssetResolver>(
        &mut self,
        snapshotter: &Snapshotter<R>,
        name: impl Into<String>,
        id: impl Into<AssetId>,
    ) -> Result<Option<PixelBuffer>> {
        let image = snapshotter.snapshot_resource(id)?;
        Ok(self.add_image(name, image))
    }

    /// Like `add_resource`, but registers `fallback` when the asset is
    /// missing or undecodable. Allocation failures still propagate.
    pub fn add_resource_or<R: AssetResolver>(
        &mut self,
        snapshotter: &Snapshotter<R>,
        name: impl Into<String>,
        id: impl Into<AssetId>,
        fallback: PixelBuffer,
    ) -> Result<Option<PixelBuffer>> {
        let name = name.into();
        let image = match snapshotter.snapshot_resource(id) {
            Ok(image) => image,
            Err(e) if e.is_recoverable() => {
                warn!("using fallback for symbol image {}: {}", name, e);
                fallback
            }
            Err(e) => return Err(e),
        };
        Ok(self.add_image(name, image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::NoAssets;
    use crate::rendering::views::ColorView;
    use crate::rendering::Rgba;

    #[test]
    fn add_replace_remove() {
        let mut reg = SymbolImages::new();
        let a = PixelBuffer::transparent(1, 1).unwrap();
        let b = PixelBuffer::transparent(2, 2).unwrap();
        assert!(reg.add_image("pin", a.clone()).is_none());
        assert_eq!(reg.add_image("pin", b), Some(a));
        assert_eq!(reg.get("pin").map(|p| p.width()), Some(2));
        assert!(reg.remove("pin").is_some());
        assert!(reg.is_empty());
    }

    #[test]
    fn names_are_sorted() {
        let mut reg = SymbolImages::new();
        let s = Snapshotter::new(NoAssets);
        reg.add_view(&s, "b", &mut ColorView::new(1, 1, Rgba::RED)).unwrap();
        reg.add_view(&s, "a", &mut ColorView::new(1, 1, Rgba::BLUE)).unwrap();
        assert_eq!(reg.names(), vec!["a", "b"]);
    }

    #[test]
    fn failed_resource_leaves_registry_untouched() {
        let mut reg = SymbolImages::new();
        let s = Snapshotter::new(NoAssets);
        assert!(reg.add_resource(&s, "marker", "marker").is_err());
        assert!(!reg.contains("marker"));
    }
}

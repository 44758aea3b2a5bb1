//! Rendering module: pixel model plus the measure/layout/draw pipeline

pub mod font;
pub mod layout;
pub mod paint;
pub mod raster;
pub mod views;

use crate::{Error, Result};
use sha2::{Digest, Sha256};

/// A non-premultiplied RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba(255, 255, 255, 255);
    pub const RED: Rgba = Rgba(255, 0, 0, 255);
    pub const BLUE: Rgba = Rgba(0, 0, 255, 255);

    /// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Option<Rgba> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let bytes = hex::decode(digits).ok()?;
        match bytes.as_slice() {
            [r, g, b] => Some(Rgba(*r, *g, *b, 255)),
            [r, g, b, a] => Some(Rgba(*r, *g, *b, *a)),
            _ => None,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.0, self.1, self.2, self.3]
    }
}

/// Pixel layout of a `PixelBuffer`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8 bits per channel, R G B A byte order, straight (non-premultiplied) alpha
    Rgba8888,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgba8888 => 4,
        }
    }
}

/// Byte length of a `width` x `height` RGBA8888 surface, or `None` on overflow.
pub(crate) fn surface_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(PixelFormat::Rgba8888.bytes_per_pixel())
}

/// Allocate a zeroed (fully transparent) RGBA surface without aborting on OOM.
pub(crate) fn alloc_transparent(width: u32, height: u32) -> Result<Vec<u8>> {
    let exhausted = || Error::ResourceExhaustion { width, height };
    let len = surface_len(width, height).ok_or_else(exhausted)?;
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| exhausted())?;
    data.resize(len, 0);
    Ok(data)
}

/// An immutable RGBA8888 image.
///
/// The byte length always equals `width * height * 4`. Every byte is
/// initialised; untouched pixels are transparent black.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a fully transparent buffer.
    pub fn transparent(width: u32, height: u32) -> Result<Self> {
        let data = alloc_transparent(width, height)?;
        Ok(Self { width, height, data })
    }

    /// Wrap raw RGBA bytes, checking that the length matches the dimensions.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = surface_len(width, height).ok_or(Error::ResourceExhaustion { width, height })?;
        if data.len() != expected {
            return Err(Error::InvalidBuffer(format!(
                "{}x{} needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        PixelFormat::Rgba8888
    }

    /// Byte length of the pixel data
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for zero-area buffers, which are valid snapshot results.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Colour at (`x`, `y`), or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let p = &self.data[i..i + 4];
        Some(Rgba(p[0], p[1], p[2], p[3]))
    }

    /// Iterate over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.data.chunks_exact(4).map(|p| Rgba(p[0], p[1], p[2], p[3]))
    }

    /// Lowercase hex SHA-256 of the pixel bytes, prefixed by the dimensions
    /// so that differently shaped buffers with equal bytes never collide.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.width.to_le_bytes());
        hasher.update(self.height.to_le_bytes());
        hasher.update(&self.data);
        hex::encode(hasher.finalize())
    }

    /// Encode as PNG. Zero-area buffers have no PNG representation.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        if self.is_empty() {
            return Err(Error::EncodeFailure(format!(
                "cannot encode a zero-area {}x{} buffer",
                self.width, self.height
            )));
        }
        let img = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| Error::EncodeFailure("buffer does not match its dimensions".into()))?;
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .map_err(|e| Error::EncodeFailure(e.to_string()))?;
        Ok(out.into_inner())
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format())
            .field("len", &self.data.len())
            .finish()
    }
}

/// Paint commands and the offscreen canvas they execute against

use crate::rendering::font::{self, CELL_HEIGHT, CELL_WIDTH, GLYPH_WIDTH, LINE_ADVANCE};
use crate::rendering::layout::Rect;
use crate::rendering::{alloc_transparent, PixelBuffer, Rgba};
use crate::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        rgba: Rgba,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        rgba: Rgba,
        scale: u32,
    },
}

/// A freshly allocated, fully transparent RGBA surface.
///
/// All drawing is clipped to the current clip rect, which starts as the whole
/// surface. Colours are composited source-over with straight alpha.
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
    clip: Rect,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let data = alloc_transparent(width, height)?;
        Ok(Self {
            width,
            height,
            data,
            clip: Rect::new(0, 0, width, height),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clip_rect(&self) -> Rect {
        self.clip
    }

    /// Narrow the clip to its intersection with `rect`, returning the previous
    /// clip for `restore_clip`.
    pub fn clip(&mut self, rect: Rect) -> Rect {
        let prev = self.clip;
        self.clip = self.clip.intersect(&rect);
        prev
    }

    pub fn restore_clip(&mut self, prev: Rect) {
        self.clip = prev;
    }

    pub fn execute(&mut self, cmd: &PaintCommand) {
        match cmd {
            PaintCommand::SolidRect { x, y, width, height, rgba } => {
                self.fill_rect(*x, *y, *width, *height, *rgba)
            }
            PaintCommand::Text { x, y, text, rgba, scale } => {
                self.draw_text(*x, *y, text, *rgba, *scale)
            }
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
        if color.3 == 0 {
            return;
        }
        let area = self.clip.intersect(&Rect::new(x, y, width, height));
        if area.is_empty() {
            return;
        }
        // clip never leaves the surface, so the area is non-negative here
        for py in area.y as u32..area.bottom() as u32 {
            for px in area.x as u32..area.right() as u32 {
                self.blend(px, py, color);
            }
        }
    }

    /// Draw `text` with the built-in bitmap font; `(x, y)` is the top-left of
    /// the first cell.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgba, scale: u32) {
        let scale = scale.max(1);
        for (line_no, line) in text.split('\n').enumerate() {
            let line_y = y as i64 + line_no as i64 * LINE_ADVANCE as i64 * scale as i64;
            for (col_no, ch) in line.chars().enumerate() {
                let cell_x = x as i64 + col_no as i64 * CELL_WIDTH as i64 * scale as i64;
                let columns = font::glyph(ch);
                for (gx, bits) in columns.iter().enumerate().take(GLYPH_WIDTH as usize) {
                    for gy in 0..CELL_HEIGHT {
                        if bits & (1 << gy) == 0 {
                            continue;
                        }
                        let px = cell_x + gx as i64 * scale as i64;
                        let py = line_y + gy as i64 * scale as i64;
                        if let (Ok(px), Ok(py)) = (i32::try_from(px), i32::try_from(py)) {
                            self.fill_rect(px, py, scale, scale, color);
                        }
                    }
                }
            }
        }
    }

    /// Composite `image` with its top-left corner at (`x`, `y`).
    pub fn draw_image(&mut self, image: &PixelBuffer, x: i32, y: i32) {
        let area = self.clip.intersect(&Rect::new(x, y, image.width(), image.height()));
        if area.is_empty() {
            return;
        }
        for py in area.y..area.bottom() as i32 {
            for px in area.x..area.right() as i32 {
                let src = image.pixel((px - x) as u32, (py - y) as u32);
                if let Some(src) = src {
                    self.blend(px as u32, py as u32, src);
                }
            }
        }
    }

    fn blend(&mut self, x: u32, y: u32, src: Rgba) {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let dst = &mut self.data[i..i + 4];
        let sa = src.3 as u32;
        if sa == 255 {
            dst.copy_from_slice(&src.to_array());
            return;
        }
        if sa == 0 {
            return;
        }
        let da = dst[3] as u32;
        // weights scaled by 255*255
        let src_w = sa * 255;
        let dst_w = da * (255 - sa);
        let total = src_w + dst_w;
        let channel = |s: u8, d: u8| ((s as u32 * src_w + d as u32 * dst_w + total / 2) / total) as u8;
        dst[0] = channel(src.0, dst[0]);
        dst[1] = channel(src.1, dst[1]);
        dst[2] = channel(src.2, dst[2]);
        dst[3] = ((total + 127) / 255) as u8;
    }

    /// Freeze the surface into an immutable buffer.
    pub fn finish(self) -> PixelBuffer {
        PixelBuffer {
            width: self.width,
            height: self.height,
            data: self.data,
        }
    }
}

//! Headless views implementing `Renderable`.
//!
//! These stand in for a GUI toolkit's widgets: each one measures itself,
//! accepts the bounds its parent assigns, and paints into a `Canvas`.

use crate::rendering::font;
use crate::rendering::layout::{Insets, MeasureSpec, Rect, Renderable, Size};
use crate::rendering::paint::{Canvas, PaintCommand};
use crate::rendering::{PixelBuffer, Rgba};

/// A solid block with a fixed natural size.
#[derive(Debug, Clone)]
pub struct ColorView {
    pub size: Size,
    pub color: Rgba,
    bounds: Rect,
}

impl ColorView {
    pub fn new(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            size: Size::new(width, height),
            color,
            bounds: Rect::default(),
        }
    }
}

impl Renderable for ColorView {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        Size::new(width.resolve(self.size.width), height.resolve(self.size.height))
    }

    fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.execute(&PaintCommand::SolidRect {
            x: self.bounds.x,
            y: self.bounds.y,
            width: self.bounds.width,
            height: self.bounds.height,
            rgba: self.color,
        });
    }
}

/// A text label in the built-in bitmap font, with optional background and
/// padding (the typical shape of a map callout or button).
#[derive(Debug, Clone)]
pub struct Label {
    pub text: String,
    pub color: Rgba,
    pub background: Option<Rgba>,
    pub padding: Insets,
    pub scale: u32,
    bounds: Rect,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Rgba::BLACK,
            background: None,
            padding: Insets::default(),
            scale: 1,
            bounds: Rect::default(),
        }
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn with_background(mut self, background: Rgba) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }
}

impl Renderable for Label {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let (tw, th) = font::text_size(&self.text, self.scale);
        Size::new(
            width.resolve(tw.saturating_add(self.padding.horizontal())),
            height.resolve(th.saturating_add(self.padding.vertical())),
        )
    }

    fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn draw(&self, canvas: &mut Canvas) {
        let prev = canvas.clip(self.bounds);
        if let Some(bg) = self.background {
            canvas.fill_rect(self.bounds.x, self.bounds.y, self.bounds.width, self.bounds.height, bg);
        }
        let content = self.bounds.inset(self.padding);
        canvas.execute(&PaintCommand::Text {
            x: content.x,
            y: content.y,
            text: self.text.clone(),
            rgba: self.color,
            scale: self.scale,
        });
        canvas.restore_clip(prev);
    }
}

/// Draws an already decoded image at its natural size.
#[derive(Debug, Clone)]
pub struct ImageView {
    pub image: PixelBuffer,
    bounds: Rect,
}

impl ImageView {
    pub fn new(image: PixelBuffer) -> Self {
        Self { image, bounds: Rect::default() }
    }
}

impl Renderable for ImageView {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        Size::new(width.resolve(self.image.width()), height.resolve(self.image.height()))
    }

    fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn draw(&self, canvas: &mut Canvas) {
        let prev = canvas.clip(self.bounds);
        canvas.draw_image(&self.image, self.bounds.x, self.bounds.y);
        canvas.restore_clip(prev);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Linear container: children are stacked along one axis in insertion order,
/// each at its natural size, and clipped to their own bounds when drawn.
pub struct Stack {
    pub orientation: Orientation,
    pub spacing: u32,
    pub padding: Insets,
    pub background: Option<Rgba>,
    children: Vec<Box<dyn Renderable>>,
    measured: Vec<Size>,
    placed: Vec<Rect>,
    bounds: Rect,
}

impl Stack {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            spacing: 0,
            padding: Insets::default(),
            background: None,
            children: Vec::new(),
            measured: Vec::new(),
            placed: Vec::new(),
            bounds: Rect::default(),
        }
    }

    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_background(mut self, background: Rgba) -> Self {
        self.background = Some(background);
        self
    }

    pub fn push(mut self, child: impl Renderable + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Renderable for Stack {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        self.measured = self
            .children
            .iter_mut()
            .map(|c| c.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified))
            .collect();

        let gaps = self.spacing.saturating_mul(self.measured.len().saturating_sub(1) as u32);
        let (along, across) = self.measured.iter().fold((0u32, 0u32), |(along, across), s| {
            match self.orientation {
                Orientation::Vertical => (along.saturating_add(s.height), across.max(s.width)),
                Orientation::Horizontal => (along.saturating_add(s.width), across.max(s.height)),
            }
        });
        let along = along.saturating_add(gaps);
        let (w, h) = match self.orientation {
            Orientation::Vertical => (across, along),
            Orientation::Horizontal => (along, across),
        };
        Size::new(
            width.resolve(w.saturating_add(self.padding.horizontal())),
            height.resolve(h.saturating_add(self.padding.vertical())),
        )
    }

    fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.placed.clear();
        let content = bounds.inset(self.padding);
        let mut cursor = match self.orientation {
            Orientation::Vertical => content.y,
            Orientation::Horizontal => content.x,
        };
        for (child, size) in self.children.iter_mut().zip(self.measured.iter()) {
            let child_bounds = match self.orientation {
                Orientation::Vertical => Rect::new(content.x, cursor, size.width, size.height),
                Orientation::Horizontal => Rect::new(cursor, content.y, size.width, size.height),
            };
            child.layout(child_bounds);
            self.placed.push(child_bounds);
            let advance = match self.orientation {
                Orientation::Vertical => size.height,
                Orientation::Horizontal => size.width,
            };
            let step = advance.saturating_add(self.spacing);
            cursor = cursor.saturating_add(i32::try_from(step).unwrap_or(i32::MAX));
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        let outer = canvas.clip(self.bounds);
        if let Some(bg) = self.background {
            canvas.fill_rect(self.bounds.x, self.bounds.y, self.bounds.width, self.bounds.height, bg);
        }
        let content = self.bounds.inset(self.padding);
        let inner = canvas.clip(content);
        for (child, bounds) in self.children.iter().zip(self.placed.iter()) {
            let prev = canvas.clip(*bounds);
            child.draw(canvas);
            canvas.restore_clip(prev);
        }
        canvas.restore_clip(inner);
        canvas.restore_clip(outer);
    }
}

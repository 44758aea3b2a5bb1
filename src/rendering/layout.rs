/// Measure/layout primitives shared by every renderable element

use crate::rendering::paint::Canvas;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Overlap of two rects; empty (zero-sized) when they do not intersect.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let left = (self.x as i64).max(other.x as i64);
        let top = (self.y as i64).max(other.y as i64);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return Rect::new(left as i32, top as i32, 0, 0);
        }
        Rect::new(left as i32, top as i32, (right - left) as u32, (bottom - top) as u32)
    }

    /// Shrink by `insets`, saturating at zero size.
    pub fn inset(&self, insets: Insets) -> Rect {
        Rect::new(
            self.x.saturating_add(i32::try_from(insets.left).unwrap_or(i32::MAX)),
            self.y.saturating_add(i32::try_from(insets.top).unwrap_or(i32::MAX)),
            self.width.saturating_sub(insets.horizontal()),
            self.height.saturating_sub(insets.vertical()),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Insets {
    pub fn uniform(v: u32) -> Self {
        Self { left: v, top: v, right: v, bottom: v }
    }

    pub fn symmetric(horizontal: u32, vertical: u32) -> Self {
        Self { left: horizontal, top: vertical, right: horizontal, bottom: vertical }
    }

    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Constraint handed to `Renderable::measure` for one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// No constraint: the element reports its natural size
    Unspecified,
    /// The element may be at most this large
    AtMost(u32),
    /// The element must be exactly this large
    Exactly(u32),
}

impl MeasureSpec {
    /// Apply this constraint to a desired size.
    pub fn resolve(self, desired: u32) -> u32 {
        match self {
            MeasureSpec::Unspecified => desired,
            MeasureSpec::AtMost(max) => desired.min(max),
            MeasureSpec::Exactly(size) => size,
        }
    }
}

/// Capability every element must provide to be snapshotted.
///
/// Calls arrive in order: `measure`, then `layout` with the bounds the parent
/// chose, then `draw`. Drawing is synchronous and must be complete when `draw`
/// returns.
pub trait Renderable {
    /// Compute the element's size under the given constraints.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Assign the element its position and size.
    fn layout(&mut self, bounds: Rect);

    /// Paint the element into `canvas` within its layout bounds.
    fn draw(&self, canvas: &mut Canvas);
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        (**self).measure(width, height)
    }

    fn layout(&mut self, bounds: Rect) {
        (**self).layout(bounds)
    }

    fn draw(&self, canvas: &mut Canvas) {
        (**self).draw(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_spec_resolution() {
        assert_eq!(MeasureSpec::Unspecified.resolve(42), 42);
        assert_eq!(MeasureSpec::AtMost(10).resolve(42), 10);
        assert_eq!(MeasureSpec::AtMost(100).resolve(42), 42);
        assert_eq!(MeasureSpec::Exactly(7).resolve(42), 7);
    }

    #[test]
    fn rect_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, -3, 10, 5);
        assert_eq!(a.intersect(&b), Rect::new(5, 0, 5, 2));
        assert!(a.intersect(&Rect::new(20, 20, 1, 1)).is_empty());
    }

    #[test]
    fn rect_inset_saturates() {
        let r = Rect::new(2, 2, 10, 4);
        assert_eq!(r.inset(Insets::symmetric(1, 1)), Rect::new(3, 3, 8, 2));
        assert!(r.inset(Insets::uniform(6)).is_empty());
    }

    #[test]
    fn rect_inset_position_saturates() {
        let r = Rect::new(10, 10, 4, 4).inset(Insets::uniform(u32::MAX));
        assert_eq!((r.x, r.y), (i32::MAX, i32::MAX));
        assert!(r.is_empty());
    }
}

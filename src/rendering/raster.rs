/// Rasterizer: drives an element through measure, layout and draw onto a
/// fresh transparent surface.

use log::debug;

use crate::rendering::layout::{MeasureSpec, Rect, Renderable};
use crate::rendering::paint::Canvas;
use crate::rendering::PixelBuffer;
use crate::{Result, SnapshotConfig};

/// Render `view` at its natural size.
///
/// The element is measured with unspecified constraints, placed at the
/// origin with the measured size, and drawn into a surface of exactly that
/// size. A zero-area measurement yields a zero-length buffer.
pub fn rasterize(view: &mut dyn Renderable, config: &SnapshotConfig) -> Result<PixelBuffer> {
    let size = view.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
    debug!("measured view at {}x{}", size.width, size.height);

    view.layout(Rect::from_size(size));

    config.check_surface(size.width, size.height)?;
    let mut canvas = Canvas::new(size.width, size.height)?;
    view.draw(&mut canvas);
    Ok(canvas.finish())
}

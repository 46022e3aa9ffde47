use kurbo::{Affine, Shape, Stroke};
use peniko::{BrushRef, Fill};

/// The drawing surface the decoration pipeline paints into.
///
/// Implementations own the actual rasterization; the pipeline only decides
/// what to fill and stroke. The host's render surface implements this once and
/// every decoration paints through it.
pub trait Painter {
    /// Fills a shape using the specified style and brush.
    fn fill<'a>(
        &mut self,
        style: Fill,
        transform: Affine,
        brush: impl Into<BrushRef<'a>>,
        brush_transform: Option<Affine>,
        shape: &impl Shape,
    );

    /// Strokes a shape using the specified style and brush.
    fn stroke<'a>(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: impl Into<BrushRef<'a>>,
        brush_transform: Option<Affine>,
        shape: &impl Shape,
    );
}

use inkspan_traits::{LineInfo, Painter, TextMeasure};
use kurbo::{Affine, Cap, Join, Stroke};
use peniko::Fill;

use crate::decoration::{LineGeometry, SpanDecoration};
use crate::style::{Color, SpanStyle};

/// Fills and strokes one line's decorated segment.
///
/// The fill and the stroke share the same rounded rect so the border exactly
/// outlines the background. Fully transparent fills and zero-width or
/// transparent strokes are skipped.
pub fn paint_geometry(
    scene: &mut impl Painter,
    style: &SpanStyle,
    geometry: &LineGeometry,
    transform: Affine,
) {
    let shape = geometry.to_rounded_rect();

    if style.background_color != Color::TRANSPARENT {
        scene.fill(
            Fill::NonZero,
            transform,
            style.background_color,
            None,
            &shape,
        );
    }

    if style.border_width > 0.0 && style.border_color != Color::TRANSPARENT {
        let stroke = Stroke::new(style.border_width)
            .with_caps(Cap::Round)
            .with_join(Join::Round);
        scene.stroke(&stroke, transform, style.border_color, None, &shape);
    }
}

impl SpanDecoration {
    /// Computes and paints this decoration's segment on one rendered line.
    ///
    /// No-op for lines the span does not touch, so hosts may call this for
    /// every line of a paragraph. Invisible styles skip measurement entirely.
    pub fn paint_line(
        &self,
        scene: &mut impl Painter,
        text: &str,
        line: &LineInfo,
        measure: &impl TextMeasure,
        transform: Affine,
    ) {
        if self.style().is_invisible() {
            return;
        }
        let Some(geometry) = self.line_geometry(text, line, measure) else {
            return;
        };
        paint_geometry(scene, self.style(), &geometry, transform);
    }
}

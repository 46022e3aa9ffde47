use std::ops::Range;

use inkspan_traits::{LineInfo, TextMeasure};
use kurbo::{Rect, RoundedRect, RoundedRectRadii};

use crate::bounds::{WRAP_OVERFLOW, segment_rect};
use crate::clip::clip_to_line;
use crate::corners::LinePosition;
use crate::style::SpanStyle;

/// Rounded rectangle for one line's segment of a decorated span, in
/// line-local device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineGeometry {
    pub rect: Rect,
    pub radii: RoundedRectRadii,
}

impl LineGeometry {
    pub fn to_rounded_rect(&self) -> RoundedRect {
        RoundedRect::from_rect(self.rect, self.radii)
    }
}

/// A rounded, bordered background behind one contiguous character span of
/// (possibly wrapped) text.
///
/// Immutable once constructed. Per-line geometry is recomputed fresh on every
/// call, so identical inputs always produce identical output and relayout
/// passes can re-invoke the pipeline freely.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanDecoration {
    span: Range<usize>,
    font_size: f32,
    style: SpanStyle,
    scale: f64,
}

impl SpanDecoration {
    /// Creates a decoration covering `span`, measuring text at `font_size`.
    ///
    /// `scale` is the same logical-to-device factor the style was resolved
    /// with; it sizes the wrap-overflow bleed. A degenerate `span`
    /// (`start >= end`) is accepted and clips empty on every line, so it
    /// never paints.
    pub fn new(span: Range<usize>, font_size: f32, style: SpanStyle, scale: f64) -> Self {
        Self {
            span,
            font_size,
            style,
            scale,
        }
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn style(&self) -> &SpanStyle {
        &self.style
    }

    /// Character range of `line` covered by this decoration.
    pub fn clip(&self, line: &LineInfo) -> Range<usize> {
        clip_to_line(line.char_range(), self.span.clone())
    }

    /// Computes the decorated geometry for one rendered line, or `None` when
    /// the line does not intersect the span.
    pub fn line_geometry(
        &self,
        text: &str,
        line: &LineInfo,
        measure: &impl TextMeasure,
    ) -> Option<LineGeometry> {
        let clipped = self.clip(line);
        if clipped.is_empty() {
            return None;
        }

        let position = LinePosition::new(line.index, clipped.end >= self.span.end);
        let rect = segment_rect(
            text,
            line,
            &clipped,
            self.span.end,
            self.font_size,
            self.style.border_width,
            WRAP_OVERFLOW * self.scale,
            measure,
        );

        Some(LineGeometry {
            rect,
            radii: position.radii(self.style.border_radius),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corners::LinePosition;

    fn measure() -> impl TextMeasure {
        |_: &str, range: Range<usize>, _: f32| range.len() as f64 * 8.0
    }

    fn line(char_start: usize, char_end: usize, index: usize) -> LineInfo {
        LineInfo {
            char_start,
            char_end,
            index,
            top: 0.0,
            baseline: 16.0,
            bottom: 20.0,
        }
    }

    fn style() -> SpanStyle {
        SpanStyle {
            border_radius: 4.0,
            border_width: 2.0,
            ..Default::default()
        }
    }

    #[test]
    fn untouched_line_yields_no_geometry() {
        let decoration = SpanDecoration::new(6..18, 16.0, style(), 1.0);
        assert!(
            decoration
                .line_geometry("", &line(18, 22, 1), &measure())
                .is_none()
        );
    }

    #[test]
    fn degenerate_span_yields_no_geometry() {
        let decoration = SpanDecoration::new(9..9, 16.0, style(), 1.0);
        assert!(
            decoration
                .line_geometry("", &line(0, 22, 0), &measure())
                .is_none()
        );
    }

    #[test]
    fn single_line_geometry_rounds_all_corners() {
        let decoration = SpanDecoration::new(6..18, 16.0, style(), 1.0);
        let geometry = decoration
            .line_geometry("", &line(0, 22, 0), &measure())
            .unwrap();

        assert_eq!(geometry.rect, Rect::new(48.0, 1.0, 144.0, 19.0));
        assert_eq!(geometry.radii, LinePosition::Only.radii(4.0));
    }

    #[test]
    fn scale_sizes_the_wrap_overflow() {
        let decoration = SpanDecoration::new(6..18, 16.0, style(), 2.0);
        let geometry = decoration
            .line_geometry("", &line(0, 12, 0), &measure())
            .unwrap();

        // Continues onto the next line: right edge bleeds by 5 * scale.
        assert_eq!(geometry.rect.x1, 48.0 + 48.0 + 10.0);
    }

    #[test]
    fn geometry_is_reproducible() {
        let decoration = SpanDecoration::new(6..18, 16.0, style(), 1.0);
        let first = decoration.line_geometry("", &line(0, 22, 0), &measure());
        let second = decoration.line_geometry("", &line(0, 22, 0), &measure());
        assert_eq!(first, second);
    }
}

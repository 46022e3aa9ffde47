use std::ops::Range;

use inkspan_traits::{LineInfo, TextMeasure};
use kurbo::Rect;

/// Overflow bleed past a wrap boundary, logical pixels.
///
/// Continuation edges extend outward by this much (converted to device
/// pixels) so adjoining line segments overlap instead of meeting at a visible
/// seam; the extra corner area hides under the neighbouring segment.
pub const WRAP_OVERFLOW: f64 = 5.0;

/// Computes the rectangle covering `clipped` on `line`, in line-local device
/// pixels.
///
/// The left edge sits after the measured width of the line text preceding the
/// segment. Continuation edges (left on wrapped-onto lines, right on lines
/// the span runs past) bleed outward by `overflow`. The rect is inset
/// vertically by half the border width on each side, keeping the stroke
/// centerline inside the line box.
///
/// `clipped` must be non-empty; callers skip empty clips.
pub(crate) fn segment_rect(
    text: &str,
    line: &LineInfo,
    clipped: &Range<usize>,
    span_end: usize,
    font_size: f32,
    border_width: f64,
    overflow: f64,
    measure: &impl TextMeasure,
) -> Rect {
    let prefix_width = measure.text_width(text, line.char_start..clipped.start, font_size);
    let segment_width = measure.text_width(text, clipped.clone(), font_size);

    let left = prefix_width - if line.index > 0 { overflow } else { 0.0 };
    let right =
        prefix_width + segment_width + if clipped.end < span_end { overflow } else { 0.0 };

    let inset = border_width / 2.0;
    Rect::new(left, line.top + inset, right, line.bottom - inset)
}

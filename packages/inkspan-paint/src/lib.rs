//! Paint rounded, bordered backgrounds behind wrapped inline text spans.
//!
//! The host text-layout engine invokes the pipeline once per rendered line,
//! passing that line's character range and vertical extents. The pipeline
//! clips the decorated span to the line, positions a rectangle from
//! host-supplied text measurements, decides which corners to round so the
//! wrapped segments read as a single seamless block, and issues fill/stroke
//! commands through the [`Painter`](inkspan_traits::Painter) seam. Shaping,
//! line breaking and rasterization all stay on the host's side.

mod bounds;
mod clip;
mod corners;
mod decoration;
mod paint;
mod style;

pub use bounds::WRAP_OVERFLOW;
pub use clip::clip_to_line;
pub use corners::LinePosition;
pub use decoration::{LineGeometry, SpanDecoration};
pub use paint::paint_geometry;
pub use style::{Color, SpanConfig, SpanStyle, StyleError};

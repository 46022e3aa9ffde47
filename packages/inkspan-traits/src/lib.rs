//! Shared traits and types for Inkspan
//!
//! These are the seams between the decoration pipeline ([`inkspan-paint`]) and
//! the host text-layout/rendering engine: per-line layout data, a text
//! measurement capability, and a fill/stroke drawing surface.
//!
//! [`inkspan-paint`]: https://docs.rs/inkspan-paint

mod line;
pub use line::LineInfo;

mod measure;
pub use measure::TextMeasure;

mod painter;
pub use painter::Painter;

mod recording;
pub use recording::{PaintCommand, Recording};

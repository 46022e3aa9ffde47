use kurbo::RoundedRectRadii;

/// Where a rendered line sits within the decorated span.
///
/// Corner rounding is a pure function of this position: the leading edge of
/// the span rounds its left corners, the trailing edge its right corners, and
/// a span contained in a single line rounds all four. Middle lines stay
/// square so their segments butt together seamlessly. Assumes left-to-right,
/// top-to-bottom line flow; right-to-left text is the host's coordinate
/// transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePosition {
    /// The span is contained entirely in this line.
    Only,
    /// First line of a span that continues below.
    First,
    /// Final line of a multi-line span.
    Last,
    /// A line between the first and the last.
    Middle,
}

impl LinePosition {
    /// Classifies a line from its span-relative index and whether its clipped
    /// range reaches the end of the span.
    pub fn new(line_index: usize, reaches_end: bool) -> Self {
        match (line_index == 0, reaches_end) {
            (true, true) => Self::Only,
            (true, false) => Self::First,
            (false, true) => Self::Last,
            (false, false) => Self::Middle,
        }
    }

    /// The corner radii for this position, with `radius` on each rounded
    /// corner and zero elsewhere.
    pub fn radii(self, radius: f64) -> RoundedRectRadii {
        match self {
            Self::Only => RoundedRectRadii::from_single_radius(radius),
            Self::First => RoundedRectRadii::new(radius, 0.0, 0.0, radius),
            Self::Last => RoundedRectRadii::new(0.0, radius, radius, 0.0),
            Self::Middle => RoundedRectRadii::from_single_radius(0.0),
        }
    }
}

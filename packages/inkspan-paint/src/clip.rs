use std::ops::Range;

/// Intersects a decorated span with one rendered line's character range.
///
/// Hosts may invoke the pipeline for every line of a paragraph, so lines that
/// do not overlap the span at all (and degenerate spans) produce the empty
/// range `line.start..line.start` and callers skip painting for them.
///
/// The result always satisfies `line.start <= start <= end <= line.end`.
pub fn clip_to_line(line: Range<usize>, span: Range<usize>) -> Range<usize> {
    if span.start >= span.end || line.end <= span.start || line.start >= span.end {
        return line.start..line.start;
    }

    // The span either begins strictly inside this line, or the segment
    // carries over from a previous line and continues from the line start.
    let start = if line.start < span.start {
        span.start
    } else {
        line.start
    };
    let end = line.end.min(span.end);

    start..end
}

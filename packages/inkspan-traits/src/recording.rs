use kurbo::{Affine, BezPath, Shape, Stroke};
use peniko::{Brush, BrushRef, Fill};

use crate::Painter;

const DEFAULT_TOLERANCE: f64 = 0.1;

/// A recorded drawing command.
///
/// Shapes are flattened to [`BezPath`]s at record time so commands stay
/// self-contained.
#[derive(Clone, Debug)]
pub enum PaintCommand {
    Fill {
        style: Fill,
        transform: Affine,
        brush: Brush,
        brush_transform: Option<Affine>,
        shape: BezPath,
    },
    Stroke {
        style: Stroke,
        transform: Affine,
        brush: Brush,
        brush_transform: Option<Affine>,
        shape: BezPath,
    },
}

/// A [`Painter`] that records commands instead of drawing them.
///
/// Useful for tests and for hosts that replay drawing on another thread or
/// surface.
pub struct Recording {
    pub tolerance: f64,
    pub cmds: Vec<PaintCommand>,
}

impl Default for Recording {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            cmds: Vec::new(),
        }
    }
}

impl Recording {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            cmds: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.cmds.clear()
    }
}

impl Painter for Recording {
    fn fill<'a>(
        &mut self,
        style: Fill,
        transform: Affine,
        brush: impl Into<BrushRef<'a>>,
        brush_transform: Option<Affine>,
        shape: &impl Shape,
    ) {
        self.cmds.push(PaintCommand::Fill {
            style,
            transform,
            brush: brush.into().to_owned(),
            brush_transform,
            shape: shape.into_path(self.tolerance),
        });
    }

    fn stroke<'a>(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: impl Into<BrushRef<'a>>,
        brush_transform: Option<Affine>,
        shape: &impl Shape,
    ) {
        self.cmds.push(PaintCommand::Stroke {
            style: style.clone(),
            transform,
            brush: brush.into().to_owned(),
            brush_transform,
            shape: shape.into_path(self.tolerance),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;
    use peniko::Color;

    #[test]
    fn records_commands_in_draw_order() {
        let rect = Rect::new(0.0, 0.0, 10.0, 4.0);
        let mut recording = Recording::new();
        recording.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            Color::WHITE,
            None,
            &rect,
        );
        recording.stroke(
            &Stroke::new(1.0),
            Affine::IDENTITY,
            Color::BLACK,
            None,
            &rect,
        );

        assert_eq!(recording.cmds.len(), 2);
        assert!(matches!(recording.cmds[0], PaintCommand::Fill { .. }));
        assert!(matches!(recording.cmds[1], PaintCommand::Stroke { .. }));
    }
}

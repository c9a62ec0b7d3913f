use crate::foundation::core::Point;

/// Horizontal stroke for one magnitude reading.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LinePrim {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub thickness: f64,
}

impl LinePrim {
    pub fn length(&self) -> f64 {
        ((self.x2 - self.x1).powi(2) + (self.y2 - self.y1).powi(2)).sqrt()
    }

    pub fn to_kurbo(&self) -> kurbo::Line {
        kurbo::Line::new((self.x1, self.y1), (self.x2, self.y2))
    }
}

/// Two short perpendicular strokes marking a circle's center.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Cross {
    pub horizontal: LinePrim,
    pub vertical: LinePrim,
}

impl Cross {
    pub fn at(center: Point, half: f64, thickness: f64) -> Self {
        Self {
            horizontal: LinePrim {
                x1: center.x - half,
                y1: center.y,
                x2: center.x + half,
                y2: center.y,
                thickness,
            },
            vertical: LinePrim {
                x1: center.x,
                y1: center.y - half,
                x2: center.x,
                y2: center.y + half,
                thickness,
            },
        }
    }
}

/// Unfilled circle for one completed on/off interval.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CirclePrim {
    pub center: Point,
    pub radius: f64,
    pub cross: Cross,
}

impl CirclePrim {
    /// Centerline of an outline of width `outline` drawn inside the circle's bounding box.
    pub fn inset_outline(&self, outline: f64) -> kurbo::Circle {
        kurbo::Circle::new(self.center, (self.radius - outline / 2.0).max(0.0))
    }
}

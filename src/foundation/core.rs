pub use kurbo::Point;

/// Millimeters to pixels at 96 dpi.
pub const MM_TO_PX: f64 = 3.779528;

/// Physical width of the sheet the composition is laid out for.
pub const CANVAS_WIDTH_MM: f64 = 210.0;
/// Physical height of the sheet the composition is laid out for.
pub const CANVAS_HEIGHT_MM: f64 = 290.0;

/// Convert a physical length to a whole pixel count (truncating).
pub fn mm_to_px(mm: f64) -> u32 {
    (mm * MM_TO_PX).trunc().max(0.0) as u32
}

/// Pixel dimensions of the output surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn from_mm(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width: mm_to_px(width_mm),
            height: mm_to_px(height_mm),
        }
    }

    /// The fixed 210 x 290 mm sheet.
    pub fn physical() -> Self {
        Self::from_mm(CANVAS_WIDTH_MM, CANVAS_HEIGHT_MM)
    }

    pub fn region(self) -> DrawingRegion {
        DrawingRegion::centered(self.width, self.height)
    }
}

/// Square sub-area centered on the canvas; all primitives are placed relative to it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DrawingRegion {
    pub x: f64,
    pub y: f64,
    pub side: f64,
}

impl DrawingRegion {
    pub fn centered(width_px: u32, height_px: u32) -> Self {
        let side = width_px.min(height_px);
        Self {
            x: f64::from(width_px - side) / 2.0,
            y: f64::from(height_px - side) / 2.0,
            side: f64::from(side),
        }
    }

    /// Horizontal axis shared by every line and circle.
    pub fn mid_x(self) -> f64 {
        self.x + self.side / 2.0
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const RED: Self = Self {
        r: 255,
        g: 0,
        b: 0,
        a: 255,
    };

    /// `#rrggbb` form, used when the color is handed to the SVG text path.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

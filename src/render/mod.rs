pub mod annotate;
pub mod composite;
pub mod cpu;
pub mod output;

use crate::foundation::core::Rgba8;

/// A rendered image held in memory.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha copy of the pixels.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if self.premultiplied {
            composite::unpremultiply_in_place(&mut out);
        }
        out
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[derive(Clone, Debug)]
pub struct RenderSettings {
    /// Stroke and caption color.
    pub ink: Rgba8,
    /// Background; `None` leaves the canvas transparent.
    pub clear_rgba: Option<[u8; 4]>,
    /// Draw the elapsed-time caption.
    pub annotate: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            ink: Rgba8::RED,
            clear_rgba: None,
            annotate: true,
        }
    }
}

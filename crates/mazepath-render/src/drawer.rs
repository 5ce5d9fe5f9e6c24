use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};
use rusttype::{Font, Scale, point as rt_point};

use crate::error::RenderError;
use crate::palette::Color;

/// Draws text labels onto RGB images using a TrueType font.
pub struct LabelDrawer {
    font: Font<'static>,
}

impl LabelDrawer {
    /// Create a drawer from raw TrueType font data.
    pub fn new(font_data: Vec<u8>) -> Option<Self> {
        Font::try_from_vec(font_data).map(|font| Self { font })
    }

    /// Load the font file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let data = fs::read(path).map_err(|e| RenderError::io(path, e))?;
        Self::new(data).ok_or_else(|| RenderError::InvalidFont(path.to_path_buf()))
    }

    /// Width in pixels of `text` at font size `px`.
    pub fn text_width(&self, text: &str, px: f32) -> f32 {
        let scale = Scale::uniform(px);
        self.font
            .layout(text, scale, rt_point(0.0, 0.0))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
    }

    /// Draw `text` with its top-left corner at (`x`, `y`), alpha-blended over
    /// the existing pixels.
    pub fn draw(&self, img: &mut RgbImage, x: f32, y: f32, px: f32, text: &str, color: Color) {
        let scale = Scale::uniform(px);
        let ascent = self.font.v_metrics(scale).ascent;
        let fg = color.rgb();
        let (w, h) = img.dimensions();

        for glyph in self.font.layout(text, scale, rt_point(x, y + ascent)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, v| {
                let ix = gx as i32 + bb.min.x;
                let iy = gy as i32 + bb.min.y;
                if ix < 0 || iy < 0 || ix as u32 >= w || iy as u32 >= h {
                    return;
                }
                let bg = img.get_pixel(ix as u32, iy as u32).0;
                let blended = [
                    blend(bg[0], fg[0], v),
                    blend(bg[1], fg[1], v),
                    blend(bg[2], fg[2], v),
                ];
                img.put_pixel(ix as u32, iy as u32, Rgb(blended));
            });
        }
    }
}

/// Simple alpha-blend of two u8 color channels.
fn blend(bg: u8, fg: u8, alpha: f32) -> u8 {
    ((1.0 - alpha) * bg as f32 + alpha * fg as f32) as u8
}

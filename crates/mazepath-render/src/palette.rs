//! Cell colours shared by the image, diagram and terminal renderers.

use mazepath_core::{Cell, Marker};

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    #[inline]
    pub const fn rgb(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }

    /// Every channel multiplied by `f` (truncating).
    pub fn scaled(self, f: f32) -> Self {
        let s = |c: u8| (c as f32 * f).clamp(0.0, 255.0) as u8;
        Self::from_rgb(s(self.r()), s(self.g()), s(self.b()))
    }

    /// Colour of the square border drawn around a cell of this colour.
    pub fn outline(self) -> Self {
        if self == Self::WHITE {
            OUTLINE_GRAY
        } else {
            self.scaled(0.85)
        }
    }

    /// Black or white, whichever reads better on top of this colour.
    pub fn contrast_text(self) -> Self {
        let luma = 299 * self.r() as u32 + 587 * self.g() as u32 + 114 * self.b() as u32;
        if luma < 128_000 { Self::WHITE } else { Self::BLACK }
    }
}

pub const WALL: Color = Color::BLACK;
pub const START: Color = Color::from_rgb(0, 255, 0);
pub const END: Color = Color::from_rgb(255, 0, 0);
pub const PATH: Color = Color::from_rgb(137, 207, 240);
pub const EMPTY: Color = Color::WHITE;
pub const OUTLINE_GRAY: Color = Color::from_rgb(225, 225, 225);
/// Diagram colour of any weighted node.
pub const BROWN: Color = Color::from_rgb(165, 42, 42);
/// Diagram edge colour.
pub const EDGE: Color = Color::from_rgb(160, 160, 160);

/// Brown shade for weight `w` given the grid's weight bounds.
///
/// Lighter for light weights, darker for heavy ones. A grid whose weights
/// are all equal gets the darkest shade.
pub fn weight_shade(w: u32, (min, max): (u32, u32)) -> Color {
    let span = max.saturating_sub(min) as u64;
    let offset = if span == 0 {
        255
    } else {
        (255 * (w.saturating_sub(min) as u64).min(span) / span) as u32
    };
    let red = (50 + (255 - offset)).min(255);
    let green = red / 2;
    let blue = green / 2;
    Color::from_rgb(red as u8, green as u8, blue as u8)
}

/// Raster/terminal colour of a cell.
///
/// Start and end win over everything, then the path, then walls, then
/// weights above 1. Anything else is white.
pub fn cell_color(cell: &Cell, bounds: (u32, u32)) -> Color {
    match &cell.marker {
        Marker::Start => START,
        Marker::End => END,
        _ if cell.on_path => PATH,
        Marker::Wall => WALL,
        Marker::Weight(w) if *w > 1 => weight_shade(*w, bounds),
        _ => EMPTY,
    }
}

/// Diagram colour of a node.
pub fn node_color(cell: &Cell) -> Color {
    match &cell.marker {
        Marker::Start => START,
        Marker::End => END,
        _ if cell.on_path => PATH,
        Marker::Wall => WALL,
        Marker::Weight(_) => BROWN,
        _ => EMPTY,
    }
}

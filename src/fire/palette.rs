//! Fixed fire color ramp, cold (transparent) to hot (white)

use crossterm::style::Color;

/// Number of intensity levels
pub const N_COLORS: usize = 39;
/// Hottest intensity, used to ignite the bottom row
pub const MAX_INTENSITY: u8 = (N_COLORS - 1) as u8;

/// Straight (non-premultiplied) RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn clear(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0x00 }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 0xFF
    }

    /// Blend over an opaque background
    pub fn over(&self, background: Rgba) -> Rgba {
        let a = self.a as u16;
        let mix = |fg: u8, bg: u8| ((fg as u16 * a + bg as u16 * (255 - a)) / 255) as u8;
        Rgba::rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

/// Doom-style fire ramp. The two coldest entries are fully transparent
/// so the scene background shows through where the fire has died out.
pub static FIRE_PALETTE: [Rgba; N_COLORS] = [
    Rgba::clear(0x07, 0x07, 0x07),
    Rgba::clear(0x1F, 0x07, 0x07),
    Rgba::rgb(0x2F, 0x0F, 0x07),
    Rgba::rgb(0x47, 0x0F, 0x07),
    Rgba::rgb(0x57, 0x17, 0x07),
    Rgba::rgb(0x67, 0x1F, 0x07),
    Rgba::rgb(0x77, 0x1F, 0x07),
    Rgba::rgb(0x8F, 0x27, 0x07),
    Rgba::rgb(0x9F, 0x2F, 0x07),
    Rgba::rgb(0xAF, 0x3F, 0x07),
    Rgba::rgb(0xBF, 0x47, 0x07),
    Rgba::rgb(0xC7, 0x47, 0x07),
    Rgba::rgb(0xDF, 0x4F, 0x07),
    Rgba::rgb(0xDF, 0x57, 0x07),
    Rgba::rgb(0xDF, 0x57, 0x07),
    Rgba::rgb(0xD7, 0x5F, 0x07),
    Rgba::rgb(0xD7, 0x5F, 0x07),
    Rgba::rgb(0xD7, 0x67, 0x0F),
    Rgba::rgb(0xCF, 0x6F, 0x0F),
    Rgba::rgb(0xCF, 0x77, 0x0F),
    Rgba::rgb(0xCF, 0x7F, 0x0F),
    Rgba::rgb(0xCF, 0x87, 0x17),
    Rgba::rgb(0xC7, 0x87, 0x17),
    Rgba::rgb(0xC7, 0x8F, 0x17),
    Rgba::rgb(0xC7, 0x97, 0x1F),
    Rgba::rgb(0xBF, 0x9F, 0x1F),
    Rgba::rgb(0xBF, 0x9F, 0x1F),
    Rgba::rgb(0xBF, 0xA7, 0x27),
    Rgba::rgb(0xBF, 0xA7, 0x27),
    Rgba::rgb(0xBF, 0xAF, 0x2F),
    Rgba::rgb(0xB7, 0xAF, 0x2F),
    Rgba::rgb(0xB7, 0xB7, 0x2F),
    Rgba::rgb(0xB7, 0xB7, 0x37),
    Rgba::rgb(0xC3, 0xC3, 0x4F),
    Rgba::rgb(0xCF, 0xCF, 0x6F),
    Rgba::rgb(0xDF, 0xDF, 0x9F),
    Rgba::rgb(0xE7, 0xE7, 0xB3),
    Rgba::rgb(0xEF, 0xEF, 0xC7),
    Rgba::rgb(0xFF, 0xFF, 0xFF),
];

/// Color for an intensity index.
///
/// Panics if `intensity` is outside `0..N_COLORS`; the simulation never
/// produces such values.
#[inline]
pub fn color_for(intensity: u8) -> Rgba {
    FIRE_PALETTE[intensity as usize]
}

/// Non-panicking lookup
pub fn try_color_for(intensity: u8) -> Option<Rgba> {
    FIRE_PALETTE.get(intensity as usize).copied()
}

/// Convert to a terminal color, compositing over the background
pub fn to_terminal(color: Rgba, background: Rgba) -> Color {
    let c = color.over(background);
    Color::Rgb { r: c.r, g: c.g, b: c.b }
}

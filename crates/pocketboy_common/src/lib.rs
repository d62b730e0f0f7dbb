//! Types shared between the emulation core and its hosts.

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::new_rgb(0xFF, 0xFF, 0xFF);
    pub const LIGHT_GRAY: Color = Color::new_rgb(0xA5, 0xA5, 0xA5);
    pub const DARK_GRAY: Color = Color::new_rgb(0x52, 0x52, 0x52);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    #[inline]
    pub const fn rgba(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }
}

/// The four screen shades, indexed by the 2-bit value the PPU produces
/// (0 = lightest).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Palette {
    shades: [Color; 4],
}

impl Palette {
    pub const fn new(shades: [Color; 4]) -> Self {
        Self { shades }
    }

    /// Color for a shade index; only the low two bits are used.
    #[inline]
    pub fn shade(&self, index: u8) -> Color {
        self.shades[(index & 0x03) as usize]
    }
}

impl Default for Palette {
    /// High-contrast grayscale.
    fn default() -> Self {
        Self::new([Color::WHITE, Color::LIGHT_GRAY, Color::DARK_GRAY, Color::BLACK])
    }
}

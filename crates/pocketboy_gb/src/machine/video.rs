//! Host-side conversion of the PPU's shade framebuffer.

use pocketboy_common::Palette;

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Bytes needed for one RGBA frame.
pub const RGBA_FRAME_LEN: usize = SCREEN_WIDTH * SCREEN_HEIGHT * 4;

/// Map 2-bit shade indices to RGBA through `palette`.
///
/// Writes as many pixels as both buffers hold; `out` is RGBA, 4 bytes per
/// pixel.
pub fn render_rgba(framebuffer: &[u8], palette: &Palette, out: &mut [u8]) {
    for (&shade, pixel) in framebuffer.iter().zip(out.chunks_exact_mut(4)) {
        let (r, g, b, a) = palette.shade(shade).rgba();
        pixel.copy_from_slice(&[r, g, b, a]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketboy_common::Color;

    #[test]
    fn shades_map_through_palette() {
        let frame = [0u8, 1, 2, 3];
        let mut out = [0u8; 16];
        render_rgba(&frame, &Palette::default(), &mut out);
        assert_eq!(&out[0..4], &[0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(&out[4..8], &[0xA5, 0xA5, 0xA5, 0xFF]);
        assert_eq!(&out[8..12], &[0x52, 0x52, 0x52, 0xFF]);
        assert_eq!(&out[12..16], &[0x00, 0x00, 0x00, 0xFF]);
    }

    #[test]
    fn short_output_is_not_overrun() {
        let palette = Palette::new([Color::new_rgb(0xFF, 0x00, 0x00); 4]);
        let mut out = [0u8; 6];
        render_rgba(&[3, 3, 3], &palette, &mut out);
        assert_eq!(&out[0..4], &[0xFF, 0, 0, 0xFF]);
        assert_eq!(&out[4..6], &[0, 0]);
    }
}

use super::{Lcdc, Ppu};
use crate::SCREEN_WIDTH;

const BG_MAP_LOW: usize = 0x1800;
const BG_MAP_HIGH: usize = 0x1C00;

/// VRAM offset of the 16 bytes of tile data for background tile `index`.
///
/// In unsigned mode tiles count up from 0x0000; in signed mode the index is
/// a two's-complement offset from 0x1000.
pub fn tile_data_offset(unsigned: bool, index: u8) -> usize {
    if unsigned {
        index as usize * 16
    } else {
        (0x1000 + index as i8 as isize * 16) as usize
    }
}

/// Decode one bit-planed tile row into eight 2-bit color indices, leftmost
/// pixel first. `lo` holds bit 0 of each pixel and `hi` bit 1.
pub fn tile_row(lo: u8, hi: u8) -> [u8; 8] {
    let mut row = [0u8; 8];
    for (i, px) in row.iter_mut().enumerate() {
        let bit = 7 - i;
        *px = (((hi >> bit) & 1) << 1) | ((lo >> bit) & 1);
    }
    row
}

impl Ppu {
    /// Shade of background pixel `x` on the current line, after BGP.
    pub(super) fn background_pixel(&self, x: u8) -> u8 {
        if !self.lcdc.contains(Lcdc::BG_ENABLE) {
            return 0;
        }
        let bg_x = x.wrapping_add(self.scx);
        let bg_y = self.ly.wrapping_add(self.scy);

        let map_base = if self.lcdc.contains(Lcdc::BG_MAP) {
            BG_MAP_HIGH
        } else {
            BG_MAP_LOW
        };
        let map_index = map_base + (bg_y as usize / 8) * 32 + bg_x as usize / 8;
        let tile = self.vram[map_index];

        let row_addr = tile_data_offset(self.lcdc.contains(Lcdc::TILE_DATA), tile)
            + (bg_y as usize % 8) * 2;
        let row = tile_row(self.vram[row_addr], self.vram[row_addr + 1]);
        let color = row[bg_x as usize % 8];

        (self.bgp >> (color * 2)) & 0x03
    }

    pub(super) fn draw_pixel(&mut self, x: u8) {
        let shade = self.background_pixel(x);
        let index = self.ly as usize * SCREEN_WIDTH + x as usize;
        if let Some(px) = self.framebuffer.get_mut(index) {
            *px = shade;
        }
    }
}

use super::{Lcdc, Ppu};
use crate::error::{GbError, Result};

/// Bytes of object attribute memory (40 entries of 4 bytes).
pub const OAM_SIZE: usize = 0xA0;

/// One OAM entry. Positions are stored as on hardware: Y is offset by 16 and
/// X by 8.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObjectEntry {
    pub y: u8,
    pub x: u8,
    pub tile: u8,
    pub flags: u8,
}

impl ObjectEntry {
    fn byte(&self, index: usize) -> u8 {
        match index {
            0 => self.y,
            1 => self.x,
            2 => self.tile,
            _ => self.flags,
        }
    }

    pub(super) fn set_byte(&mut self, index: usize, value: u8) {
        match index {
            0 => self.y = value,
            1 => self.x = value,
            2 => self.tile = value,
            _ => self.flags = value,
        }
    }
}

impl Ppu {
    /// Read OAM by byte offset (0..0xA0).
    pub fn read_oam(&self, offset: usize) -> Result<u8> {
        if offset >= OAM_SIZE {
            return Err(GbError::InvalidOamAddress { offset });
        }
        Ok(self.oam[offset / 4].byte(offset % 4))
    }

    /// Write OAM by byte offset (0..0xA0). Shared by the bus window and DMA.
    pub fn write_oam(&mut self, offset: usize, value: u8) -> Result<()> {
        if offset >= OAM_SIZE {
            return Err(GbError::InvalidOamAddress { offset });
        }
        self.oam[offset / 4].set_byte(offset % 4, value);
        Ok(())
    }

    pub fn objects(&self) -> &[ObjectEntry] {
        &self.oam
    }

    /// Collect the objects that overlap the current line for the pixel pass.
    pub(super) fn oam_scan(&mut self) {
        let height: u16 = if self.lcdc.contains(Lcdc::OBJ_SIZE) { 16 } else { 8 };
        let y = self.ly as u16 + 16;
        self.line_objects.clear();
        self.line_objects.extend(
            self.oam
                .iter()
                .filter(|obj| y >= obj.y as u16 && y < obj.y as u16 + height)
                .copied(),
        );
    }
}

use bitflags::bitflags;

use super::Ppu;
use crate::error::Result;

bitflags! {
    /// LCDC (FF40) bits.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Lcdc: u8 {
        const ENABLE = 0x80;
        const WINDOW_MAP = 0x40;
        const WINDOW_ENABLE = 0x20;
        /// Set: unsigned tile data at 0x8000. Clear: signed around 0x9000.
        const TILE_DATA = 0x10;
        /// Set: background map at 0x9C00. Clear: 0x9800.
        const BG_MAP = 0x08;
        /// Set: 8x16 objects.
        const OBJ_SIZE = 0x04;
        const OBJ_ENABLE = 0x02;
        const BG_ENABLE = 0x01;
    }
}

pub const PPU_REGISTER_COUNT: usize = 12;

const STAT_COINCIDENCE: u8 = 0x04;
const STAT_SELECT_MASK: u8 = 0x78;

/// The LCD register block at FF40..=FF4B, in address order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PpuRegister {
    Lcdc,
    Stat,
    Scy,
    Scx,
    Ly,
    Lyc,
    Dma,
    Bgp,
    Obp0,
    Obp1,
    Wy,
    Wx,
}

impl PpuRegister {
    pub const ALL: [PpuRegister; PPU_REGISTER_COUNT] = [
        PpuRegister::Lcdc,
        PpuRegister::Stat,
        PpuRegister::Scy,
        PpuRegister::Scx,
        PpuRegister::Ly,
        PpuRegister::Lyc,
        PpuRegister::Dma,
        PpuRegister::Bgp,
        PpuRegister::Obp0,
        PpuRegister::Obp1,
        PpuRegister::Wy,
        PpuRegister::Wx,
    ];

    /// Register at `addr`, if it is inside FF40..=FF4B.
    pub fn from_addr(addr: u16) -> Option<Self> {
        addr.checked_sub(0xFF40)
            .and_then(|i| Self::ALL.get(i as usize).copied())
    }
}

impl Ppu {
    pub fn read_register(&self, reg: PpuRegister) -> u8 {
        match reg {
            PpuRegister::Lcdc => self.lcdc.bits(),
            PpuRegister::Stat => {
                let coincidence = if self.ly == self.lyc { STAT_COINCIDENCE } else { 0 };
                0x80 | self.stat_select | coincidence | self.mode as u8
            }
            PpuRegister::Scy => self.scy,
            PpuRegister::Scx => self.scx,
            PpuRegister::Ly => self.ly,
            PpuRegister::Lyc => self.lyc,
            PpuRegister::Dma => self.dma,
            PpuRegister::Bgp => self.bgp,
            PpuRegister::Obp0 => self.obp0,
            PpuRegister::Obp1 => self.obp1,
            PpuRegister::Wy => self.wy,
            PpuRegister::Wx => self.wx,
        }
    }

    /// CPU-side register write.
    ///
    /// STAT's mode and coincidence bits and all of LY are read-only. Writing
    /// DMA starts an OAM transfer and fails if one is already running.
    pub fn write_register(&mut self, reg: PpuRegister, value: u8) -> Result<()> {
        match reg {
            PpuRegister::Lcdc => {
                let was_enabled = self.lcd_enabled();
                self.lcdc = Lcdc::from_bits_retain(value);
                if was_enabled != self.lcd_enabled() {
                    log::debug!("LCD {}", if was_enabled { "off" } else { "on" });
                }
            }
            PpuRegister::Stat => self.stat_select = value & STAT_SELECT_MASK,
            PpuRegister::Ly => log::trace!("ignoring write of {value:02X} to LY"),
            PpuRegister::Dma => self.start_dma(value)?,
            other => self.restore_register(other, value),
        }
        Ok(())
    }

    /// Store a register value without side effects.
    pub(super) fn restore_register(&mut self, reg: PpuRegister, value: u8) {
        match reg {
            PpuRegister::Lcdc => self.lcdc = Lcdc::from_bits_retain(value),
            PpuRegister::Stat => self.stat_select = value & STAT_SELECT_MASK,
            PpuRegister::Scy => self.scy = value,
            PpuRegister::Scx => self.scx = value,
            PpuRegister::Ly => self.ly = value.min(153),
            PpuRegister::Lyc => self.lyc = value,
            PpuRegister::Dma => self.dma = value,
            PpuRegister::Bgp => self.bgp = value,
            PpuRegister::Obp0 => self.obp0 = value,
            PpuRegister::Obp1 => self.obp1 = value,
            PpuRegister::Wy => self.wy = value,
            PpuRegister::Wx => self.wx = value,
        }
    }

    #[inline]
    pub fn lcdc(&self) -> Lcdc {
        self.lcdc
    }
}

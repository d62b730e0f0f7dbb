mod dma;
mod oam;
mod regs;
mod render;

pub use oam::{ObjectEntry, OAM_SIZE};
pub use regs::{Lcdc, PpuRegister, PPU_REGISTER_COUNT};
pub use render::{tile_data_offset, tile_row};

use super::interrupts::{Interrupt, InterruptController};
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub const VRAM_SIZE: usize = 0x2000;

pub const DOTS_PER_LINE: u16 = 456;
const OAM_SCAN_DOTS: u16 = 80;
const PIXEL_TRANSFER_DOTS: u16 = 168;
/// First line of the vertical blanking period.
const VBLANK_LINE: u8 = 144;
const LAST_LINE: u8 = 153;

/// LCD controller mode, as reported in STAT bits 0-1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    HBlank = 0,
    VBlank = 1,
    OamScan = 2,
    PixelTransfer = 3,
}

/// Picture processing unit (DMG).
///
/// Owns VRAM, OAM and the LCD register block, and walks a 456-dot scanline
/// state machine one T-cycle at a time. Only the background layer is drawn;
/// the framebuffer holds one 2-bit shade index per pixel and knows nothing
/// about host colors.
#[derive(Clone, Debug)]
pub struct Ppu {
    vram: Vec<u8>,
    oam: [ObjectEntry; 40],
    line_objects: Vec<ObjectEntry>,

    lcdc: Lcdc,
    /// STAT interrupt-select bits (3-6); mode and coincidence are derived.
    stat_select: u8,
    scy: u8,
    scx: u8,
    ly: u8,
    lyc: u8,
    dma: u8,
    bgp: u8,
    obp0: u8,
    obp1: u8,
    wy: u8,
    wx: u8,

    dot: u16,
    mode: Mode,
    dma_transfer: Option<dma::DmaTransfer>,
    framebuffer: Vec<u8>,
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new()
    }
}

impl Ppu {
    /// Power-on state: LCD off, line 0, about to scan OAM.
    pub fn new() -> Self {
        Self {
            vram: vec![0; VRAM_SIZE],
            oam: [ObjectEntry::default(); 40],
            line_objects: Vec::with_capacity(10),
            lcdc: Lcdc::empty(),
            stat_select: 0,
            scy: 0,
            scx: 0,
            ly: 0,
            lyc: 0,
            dma: 0xFF,
            bgp: 0xFC,
            obp0: 0xFF,
            obp1: 0xFF,
            wy: 0,
            wx: 0,
            dot: 0,
            mode: Mode::OamScan,
            dma_transfer: None,
            framebuffer: vec![0; SCREEN_WIDTH * SCREEN_HEIGHT],
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Position within the current line, 0..456.
    #[inline]
    pub fn dot(&self) -> u16 {
        self.dot
    }

    #[inline]
    pub fn ly(&self) -> u8 {
        self.ly
    }

    #[inline]
    pub fn lcd_enabled(&self) -> bool {
        self.lcdc.contains(Lcdc::ENABLE)
    }

    /// One 2-bit shade index per pixel, row-major, 160x144.
    #[inline]
    pub fn framebuffer(&self) -> &[u8] {
        &self.framebuffer
    }

    #[inline]
    pub fn vram(&self) -> &[u8] {
        &self.vram
    }

    /// Objects found on the current line by the last OAM scan.
    #[inline]
    pub fn line_objects(&self) -> &[ObjectEntry] {
        &self.line_objects
    }

    /// VRAM access by offset from 0x8000.
    #[inline]
    pub fn read_vram(&self, offset: u16) -> u8 {
        self.vram[offset as usize % VRAM_SIZE]
    }

    #[inline]
    pub fn write_vram(&mut self, offset: u16, value: u8) {
        self.vram[offset as usize % VRAM_SIZE] = value;
    }

    /// Advance the LCD by one dot.
    ///
    /// Does nothing while LCDC bit 7 is clear. Mode 3 writes one pixel per
    /// dot for dots 81..=240, and the VBlank interrupt is requested exactly
    /// once per frame, when LY reaches 144.
    pub fn tick(&mut self, interrupts: &mut InterruptController) {
        if !self.lcd_enabled() {
            return;
        }
        self.dot += 1;

        match self.mode {
            Mode::OamScan => {
                if self.dot == OAM_SCAN_DOTS {
                    self.oam_scan();
                    self.mode = Mode::PixelTransfer;
                }
            }
            Mode::PixelTransfer => {
                if self.dot == OAM_SCAN_DOTS + PIXEL_TRANSFER_DOTS {
                    self.mode = Mode::HBlank;
                } else if self.dot <= OAM_SCAN_DOTS + SCREEN_WIDTH as u16 {
                    let x = (self.dot - OAM_SCAN_DOTS - 1) as u8;
                    self.draw_pixel(x);
                }
            }
            Mode::HBlank => {
                if self.dot == DOTS_PER_LINE {
                    self.dot = 0;
                    self.ly += 1;
                    if self.ly >= VBLANK_LINE {
                        self.mode = Mode::VBlank;
                        interrupts.request(Interrupt::VBlank);
                        log::debug!("entering VBlank");
                    } else {
                        self.mode = Mode::OamScan;
                    }
                }
            }
            Mode::VBlank => {
                if self.dot == DOTS_PER_LINE {
                    self.dot = 0;
                    if self.ly >= LAST_LINE {
                        self.ly = 0;
                        self.mode = Mode::OamScan;
                    } else {
                        self.ly += 1;
                    }
                }
            }
        }
    }

    /// Install VRAM, the LCD register window and OAM from a saved state.
    ///
    /// Registers are stored as-is (no DMA is started by the DMA byte) and any
    /// transfer in flight is dropped. The line restarts at dot 0 in the mode
    /// the restored LY belongs to.
    pub fn restore(&mut self, vram: &[u8], registers: &[u8], oam: &[u8]) {
        for (i, &value) in vram.iter().take(VRAM_SIZE).enumerate() {
            self.vram[i] = value;
        }
        for (reg, &value) in PpuRegister::ALL.iter().zip(registers) {
            self.restore_register(*reg, value);
        }
        for (i, &value) in oam.iter().take(OAM_SIZE).enumerate() {
            self.oam[i / 4].set_byte(i % 4, value);
        }
        self.dma_transfer = None;
        self.dot = 0;
        self.mode = if self.ly >= VBLANK_LINE {
            Mode::VBlank
        } else {
            Mode::OamScan
        };
    }
}

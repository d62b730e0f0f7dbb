use super::apu::Apu;
use super::cartridge::Cartridge;
use super::config::UnmappedPolicy;
use super::interrupts::{Interrupt, InterruptController};
use super::joypad::Joypad;
use super::ppu::{Ppu, PpuRegister};
use super::serial::Serial;
use super::timer::Timer;
use crate::cpu::Bus;
use crate::error::{GbError, Result};

const WRAM_SIZE: usize = 0x2000;
const HRAM_SIZE: usize = 0x7F;
pub const BOOT_ROM_SIZE: usize = 0x100;

/// System bus: the single dispatcher between the CPU and the rest of the
/// machine.
///
/// Owns every peripheral plus internal RAM and routes each address to exactly
/// one of them. Addresses outside the map are handled according to the
/// configured [`UnmappedPolicy`].
#[derive(Clone, Debug)]
pub struct GameBoyBus {
    pub(super) cartridge: Cartridge,
    pub(super) ppu: Ppu,
    pub(super) timer: Timer,
    pub(super) interrupts: InterruptController,
    pub(super) serial: Serial,
    pub(super) joypad: Joypad,
    pub(super) apu: Apu,
    wram: Vec<u8>,
    hram: [u8; HRAM_SIZE],
    /// Overlay for 0x0000-0x00FF until FF50 is written.
    boot_rom: Option<Vec<u8>>,
    policy: UnmappedPolicy,
}

impl GameBoyBus {
    pub(super) fn new(cartridge: Cartridge, boot_rom: Option<Vec<u8>>, policy: UnmappedPolicy) -> Self {
        Self {
            cartridge,
            ppu: Ppu::new(),
            timer: Timer::new(),
            interrupts: InterruptController::new(),
            serial: Serial::default(),
            joypad: Joypad::default(),
            apu: Apu::default(),
            wram: vec![0; WRAM_SIZE],
            hram: [0; HRAM_SIZE],
            boot_rom,
            policy,
        }
    }

    #[inline]
    pub fn boot_rom_active(&self) -> bool {
        self.boot_rom.is_some()
    }

    pub fn ppu(&self) -> &Ppu {
        &self.ppu
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn interrupts(&self) -> &InterruptController {
        &self.interrupts
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }

    /// Advance every clocked peripheral by one T-cycle.
    ///
    /// While the LCD is on, an active OAM DMA moves one byte first; then the
    /// PPU and the timer tick. Interrupts they raise become visible to the
    /// CPU at its next step.
    pub(super) fn tick(&mut self) -> Result<()> {
        if self.ppu.lcd_enabled() {
            if let Some(source) = self.ppu.dma_source() {
                let value = self.read8(source)?;
                self.ppu.dma_step(value)?;
            }
        }
        self.ppu.tick(&mut self.interrupts);
        self.timer.tick(&mut self.interrupts);
        Ok(())
    }

    fn unmapped_read(&self, addr: u16) -> Result<u8> {
        match self.policy {
            UnmappedPolicy::Fatal => Err(GbError::UnmappedRead { addr }),
            UnmappedPolicy::OpenBus => {
                log::warn!("open-bus read from {addr:04X}");
                Ok(0xFF)
            }
        }
    }

    fn unmapped_write(&self, addr: u16, value: u8) -> Result<()> {
        match self.policy {
            UnmappedPolicy::Fatal => Err(GbError::UnmappedWrite { addr, value }),
            UnmappedPolicy::OpenBus => {
                log::warn!("dropping write of {value:02X} to {addr:04X}");
                Ok(())
            }
        }
    }
}

impl Bus for GameBoyBus {
    fn read8(&self, addr: u16) -> Result<u8> {
        if let (0x0000..=0x00FF, Some(boot)) = (addr, self.boot_rom.as_deref()) {
            return Ok(boot[addr as usize]);
        }
        match addr {
            0x0000..=0x7FFF | 0xA000..=0xBFFF => self.cartridge.read(addr),
            0x8000..=0x9FFF => Ok(self.ppu.read_vram(addr - 0x8000)),
            0xC000..=0xDFFF => Ok(self.wram[(addr - 0xC000) as usize]),
            0xFE00..=0xFE9F => self.ppu.read_oam((addr - 0xFE00) as usize),
            0xFF00 => Ok(self.joypad.read()),
            0xFF01 => Ok(self.serial.read_sb()),
            0xFF02 => Ok(self.serial.read_sc()),
            0xFF04..=0xFF07 => Ok(self.timer.read(addr)),
            0xFF0F => Ok(self.interrupts.read_request()),
            0xFF10..=0xFF3F => Ok(self.apu.read(addr)),
            0xFF40..=0xFF4B => match PpuRegister::from_addr(addr) {
                Some(reg) => Ok(self.ppu.read_register(reg)),
                None => self.unmapped_read(addr),
            },
            0xFF80..=0xFFFE => Ok(self.hram[(addr - 0xFF80) as usize]),
            0xFFFF => Ok(self.interrupts.read_enable()),
            _ => self.unmapped_read(addr),
        }
    }

    fn write8(&mut self, addr: u16, value: u8) -> Result<()> {
        match addr {
            0x0000..=0x7FFF | 0xA000..=0xBFFF => self.cartridge.write(addr, value),
            0x8000..=0x9FFF => {
                self.ppu.write_vram(addr - 0x8000, value);
                Ok(())
            }
            0xC000..=0xDFFF => {
                self.wram[(addr - 0xC000) as usize] = value;
                Ok(())
            }
            0xFE00..=0xFE9F => self.ppu.write_oam((addr - 0xFE00) as usize, value),
            0xFF00 => {
                self.joypad.write(value);
                Ok(())
            }
            0xFF01 => {
                self.serial.write_sb(value);
                Ok(())
            }
            0xFF02 => self.serial.write_sc(value),
            0xFF04..=0xFF07 => {
                self.timer.write(addr, value);
                Ok(())
            }
            0xFF0F => {
                self.interrupts.write_request(value);
                Ok(())
            }
            0xFF10..=0xFF3F => {
                self.apu.write(addr, value);
                Ok(())
            }
            0xFF40..=0xFF4B => match PpuRegister::from_addr(addr) {
                Some(reg) => self.ppu.write_register(reg, value),
                None => self.unmapped_write(addr, value),
            },
            0xFF50 => {
                if self.boot_rom.take().is_some() {
                    log::info!("boot ROM disabled");
                }
                Ok(())
            }
            0xFF80..=0xFFFE => {
                self.hram[(addr - 0xFF80) as usize] = value;
                Ok(())
            }
            0xFFFF => {
                self.interrupts.write_enable(value);
                Ok(())
            }
            _ => self.unmapped_write(addr, value),
        }
    }

    fn pending_interrupt(&self) -> Result<Option<Interrupt>> {
        Ok(self.interrupts.pending())
    }

    fn acknowledge_interrupt(&mut self, source: Interrupt) -> Result<()> {
        self.interrupts.clear(source);
        Ok(())
    }
}

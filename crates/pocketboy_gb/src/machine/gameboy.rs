use super::apu::Apu;
use super::bus::{GameBoyBus, BOOT_ROM_SIZE};
use super::cartridge::Cartridge;
use super::config::GameBoyConfig;
use super::interrupts::Interrupt;
use super::joypad::Buttons;
use super::ppu::PpuRegister;
use super::timer::Timer;
use crate::cpu::Cpu;
use crate::error::{GbError, Result};
use crate::savestate::BessState;
use crate::CYCLES_PER_FRAME;

/// LCDC value the boot ROM leaves behind: LCD and background on, tile data
/// at 0x8000.
const POST_BOOT_LCDC: u8 = 0x91;

/// High-level Game Boy machine.
///
/// Owns the CPU core and the bus (which in turn owns every peripheral). Each
/// CPU step is followed by the same number of T-cycles on the bus, so the
/// PPU and timer stay in lockstep with the instruction stream.
pub struct GameBoy {
    pub cpu: Cpu,
    bus: GameBoyBus,
    cycles: u64,
}

impl GameBoy {
    /// Build a session around a cartridge image.
    ///
    /// With a boot ROM in `config` the CPU starts from zero at 0x0000 with
    /// the overlay mapped; otherwise the machine is put directly into the
    /// state the boot ROM hands over with.
    pub fn new(rom: Vec<u8>, config: GameBoyConfig) -> Result<Self> {
        let cartridge = Cartridge::new(rom)?;

        let gb = match config.boot_rom {
            Some(boot) => {
                if boot.len() != BOOT_ROM_SIZE {
                    return Err(GbError::InvalidBootRom { len: boot.len() });
                }
                log::info!("starting from boot ROM");
                Self {
                    cpu: Cpu::new(),
                    bus: GameBoyBus::new(cartridge, Some(boot), config.unmapped),
                    cycles: 0,
                }
            }
            None => {
                let mut bus = GameBoyBus::new(cartridge, None, config.unmapped);
                bus.ppu.write_register(PpuRegister::Lcdc, POST_BOOT_LCDC)?;
                bus.timer = Timer::post_boot();
                bus.apu = Apu::post_boot();
                log::info!("starting from post-boot state");
                Self {
                    cpu: Cpu::post_boot(),
                    bus,
                    cycles: 0,
                }
            }
        };
        Ok(gb)
    }

    /// Execute one instruction (or interrupt dispatch, or halted wait) and
    /// advance the rest of the machine by the cycles it took.
    ///
    /// A peripheral failure during those cycles (an OAM DMA read the map does
    /// not answer) is reported as a fault at the current PC; only the cycles
    /// that completed are counted.
    pub fn step(&mut self) -> Result<u32> {
        let cycles = self.cpu.step(&mut self.bus)?;
        for done in 0..cycles {
            if let Err(err) = self.bus.tick() {
                self.cycles += u64::from(done);
                let pc = self.cpu.regs.pc;
                return Err(self.cpu.fault(&self.bus, pc, err));
            }
        }
        self.cycles += u64::from(cycles);
        Ok(cycles)
    }

    /// Run at least one frame's worth of cycles.
    pub fn step_frame(&mut self) -> Result<()> {
        let target = self.cycles + CYCLES_PER_FRAME;
        while self.cycles < target {
            self.step()?;
        }
        Ok(())
    }

    /// Step until PC equals `target` or `max_cycles` have elapsed.
    ///
    /// Returns whether `target` was reached.
    pub fn run_until_pc(&mut self, target: u16, max_cycles: u64) -> Result<bool> {
        let limit = self.cycles.saturating_add(max_cycles);
        while self.cycles < limit {
            if self.cpu.regs.pc == target {
                return Ok(true);
            }
            self.step()?;
        }
        Ok(self.cpu.regs.pc == target)
    }

    /// Replace the set of held buttons. A newly pressed button raises the
    /// joypad interrupt.
    pub fn set_buttons(&mut self, buttons: Buttons) {
        if self.bus.joypad.set_pressed(buttons) {
            self.bus.interrupts.request(Interrupt::Joypad);
        }
    }

    /// Seed VRAM, the LCD registers and OAM from a BESS snapshot.
    pub fn install_video_state(&mut self, state: &BessState) {
        self.bus
            .ppu
            .restore(&state.vram, state.ppu_registers(), &state.oam);
        log::debug!(
            "installed video state: {} bytes VRAM, {} bytes OAM",
            state.vram.len(),
            state.oam.len()
        );
    }

    pub fn framebuffer(&self) -> &[u8] {
        self.bus.ppu.framebuffer()
    }

    pub fn vram(&self) -> &[u8] {
        self.bus.ppu.vram()
    }

    /// Bytes sent through the serial port so far.
    pub fn serial_output(&self) -> &[u8] {
        self.bus.serial.output()
    }

    pub fn total_cycles(&self) -> u64 {
        self.cycles
    }

    pub fn boot_rom_active(&self) -> bool {
        self.bus.boot_rom_active()
    }

    pub fn bus(&self) -> &GameBoyBus {
        &self.bus
    }

    /// Mutable bus access, for poking memory from tests and tools.
    pub fn bus_mut(&mut self) -> &mut GameBoyBus {
        &mut self.bus
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.bus.cartridge
    }

    pub fn cartridge_mut(&mut self) -> &mut Cartridge {
        &mut self.bus.cartridge
    }
}

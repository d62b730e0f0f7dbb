mod apu;
mod bus;
mod cartridge;
mod config;
mod gameboy;
mod interrupts;
mod joypad;
mod ppu;
mod serial;
mod timer;
pub mod video;

pub use bus::{GameBoyBus, BOOT_ROM_SIZE};
pub use cartridge::{Cartridge, CartridgeHeader};
pub use config::{GameBoyConfig, UnmappedPolicy};
pub use gameboy::GameBoy;
pub use interrupts::{Interrupt, InterruptController};
pub use joypad::Buttons;
pub use ppu::{
    tile_data_offset, tile_row, Lcdc, Mode, ObjectEntry, Ppu, PpuRegister, DOTS_PER_LINE,
    OAM_SIZE, PPU_REGISTER_COUNT, VRAM_SIZE,
};
pub use timer::Timer;

pub mod cpu;
pub mod error;
pub mod machine;
pub mod savestate;
pub mod trace;

pub use error::{CpuFault, GbError, Result};
pub use machine::{Buttons, GameBoy, GameBoyConfig, UnmappedPolicy};

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
/// T-cycles in one full frame (154 lines of 456 dots).
pub const CYCLES_PER_FRAME: u64 = 70_224;

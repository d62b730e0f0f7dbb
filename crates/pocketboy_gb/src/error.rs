use std::fmt::Write as _;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GbError>;

/// Every way the emulation core can fail.
///
/// Bus, decode and execute paths return these directly. `Cpu::step` wraps
/// whatever escaped an instruction into [`GbError::Fault`] so the driving
/// loop gets a register dump alongside the cause.
#[derive(Error, Debug)]
pub enum GbError {
    #[error("read from unmapped address {addr:#06X}")]
    UnmappedRead { addr: u16 },
    #[error("write of {value:#04X} to unmapped address {addr:#06X}")]
    UnmappedWrite { addr: u16, value: u8 },
    #[error("cartridge RAM access at {addr:#06X} while RAM is absent or disabled")]
    CartridgeRamDisabled { addr: u16 },
    #[error("unsupported cartridge write of {value:#04X} at {addr:#06X}")]
    UnsupportedCartridgeWrite { addr: u16, value: u8 },
    #[error("unsupported serial control value {value:#04X}")]
    UnsupportedSerialControl { value: u8 },

    #[error("unrecognized opcode {opcode:#04X} at {addr:#06X}")]
    UnrecognizedOpcode { addr: u16, opcode: u8 },

    #[error("read at {addr:#06X} with ROM bank {bank} maps to {index:#X}, past the end of a {rom_len:#X} byte ROM")]
    RomBankOutOfBounds {
        addr: u16,
        bank: u8,
        index: usize,
        rom_len: usize,
    },
    #[error("OAM DMA triggered with {value:#04X} while a transfer is in progress")]
    DmaInProgress { value: u8 },
    #[error("OAM offset {offset:#X} is out of range")]
    InvalidOamAddress { offset: usize },

    #[error("invalid save state: {0}")]
    InvalidSaveState(String),
    #[error("unsupported cartridge type {0:#04X}")]
    UnsupportedCartridgeType(u8),
    #[error("unsupported ROM size class {0:#04X}")]
    UnsupportedRomSize(u8),
    #[error("unsupported RAM size class {0:#04X}")]
    UnsupportedRamSize(u8),
    #[error("boot ROM must be 256 bytes, got {len}")]
    InvalidBootRom { len: usize },
    #[error("ROM image of {len} bytes is too small to hold a cartridge header")]
    RomTooSmall { len: usize },

    #[error(transparent)]
    Fault(Box<CpuFault>),
}

/// Diagnostic snapshot captured when an instruction fails.
#[derive(Error, Debug)]
#[error("error while executing instruction at {pc:#06X}: {source}\n  {registers}\n  stack: {}", format_stack(.stack))]
pub struct CpuFault {
    /// Address of the instruction (or interrupt entry) that failed.
    pub pc: u16,
    pub registers: String,
    /// `(address, word)` pairs read upward from SP; unreadable words are skipped.
    pub stack: Vec<(u16, u16)>,
    pub source: GbError,
}

impl GbError {
    /// The underlying cause, looking through a [`GbError::Fault`] wrapper.
    pub fn root(&self) -> &GbError {
        match self {
            GbError::Fault(fault) => fault.source.root(),
            other => other,
        }
    }
}

fn format_stack(stack: &[(u16, u16)]) -> String {
    if stack.is_empty() {
        return "<unreadable>".to_string();
    }
    let mut out = String::new();
    for (i, (addr, word)) in stack.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{addr:04X}={word:04X}");
    }
    out
}

mod alu;
mod bus;
mod cb;
mod decode;
mod exec;
mod instruction;
mod interrupts;
mod operand;
mod regs;
mod step;

pub use bus::{Bus, IE_ADDR, IF_ADDR};
pub use decode::decode;
pub use instruction::{AluOp, CbOp, Instruction, Op};
pub use interrupts::INTERRUPT_CYCLES;
pub use operand::{Cond, Operand};
pub use regs::{Flags, Reg16, Reg8, Registers};

use crate::error::Result;

/// Game Boy CPU core (LR35902).
///
/// This holds the architectural register state plus the interrupt and halt
/// latches. Memory lives behind the [`Bus`] passed into [`Cpu::step`].
#[derive(Clone, Debug, Default)]
pub struct Cpu {
    pub regs: Registers,
    pub ime: bool,
    pub halted: bool,
    /// EI was executed; IME turns on once the following instruction is done.
    ime_enable_pending: bool,
}

impl Cpu {
    /// Power-on state: everything zero, execution starts at 0x0000 where the
    /// boot ROM is mapped.
    pub fn new() -> Self {
        Self::default()
    }

    /// The state the boot ROM hands over to the cartridge with.
    pub fn post_boot() -> Self {
        Self {
            regs: Registers::post_boot(),
            ..Self::default()
        }
    }

    /// One-line register dump used by fault reports.
    pub fn dump(&self) -> String {
        let r = &self.regs;
        format!(
            "pc {:04X} sp {:04X} af {:04X} bc {:04X} de {:04X} hl {:04X} ime {} halted {}",
            r.pc,
            r.sp,
            r.af(),
            r.bc(),
            r.de(),
            r.hl(),
            u8::from(self.ime),
            u8::from(self.halted),
        )
    }
}

/// Decode `count` consecutive instructions starting at `start` without
/// executing anything.
///
/// Unassigned opcodes come back as `db` entries rather than errors; the only
/// failure is a bus read the memory map does not answer.
pub fn disassemble<B: Bus + ?Sized>(
    bus: &B,
    start: u16,
    count: usize,
) -> Result<Vec<(u16, Instruction)>> {
    let mut out = Vec::with_capacity(count);
    let mut addr = start;
    for _ in 0..count {
        let instruction = decode(addr, bus)?;
        out.push((addr, instruction));
        addr = addr.wrapping_add(instruction.length);
    }
    Ok(out)
}

#[cfg(test)]
mod tests;

use std::fmt;

use super::regs::{Flags, Reg16, Reg8, Registers};
use super::Bus;
use crate::error::Result;

/// Source or destination of an 8-bit transfer.
///
/// Operands carry no captured state: reading and writing take the register
/// file and the bus explicitly, so the same decoded operand can be executed
/// against any machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Reg(Reg8),
    /// `(hl)`
    AtHl,
    /// `(bc)` / `(de)`
    At(Reg16),
    /// `(hl)` followed by HL += 1.
    AtHlInc,
    /// `(hl)` followed by HL -= 1.
    AtHlDec,
    Imm(u8),
    /// `(nnnn)`
    AtImm(u16),
    /// `(ff00+nn)`
    HighImm(u8),
    /// `(ff00+c)`
    HighC,
}

/// Branch condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cond {
    Nz,
    Z,
    Nc,
    C,
}

impl Operand {
    /// Operand for the 3-bit register field used all over the opcode table:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    pub(super) fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Operand::Reg(Reg8::B),
            1 => Operand::Reg(Reg8::C),
            2 => Operand::Reg(Reg8::D),
            3 => Operand::Reg(Reg8::E),
            4 => Operand::Reg(Reg8::H),
            5 => Operand::Reg(Reg8::L),
            6 => Operand::AtHl,
            _ => Operand::Reg(Reg8::A),
        }
    }

    pub(super) fn read<B: Bus + ?Sized>(self, regs: &mut Registers, bus: &B) -> Result<u8> {
        match self {
            Operand::Reg(r) => Ok(regs.get(r)),
            Operand::Imm(n) => Ok(n),
            Operand::AtHlInc => {
                let hl = regs.hl();
                let value = bus.read8(hl)?;
                regs.set_hl(hl.wrapping_add(1));
                Ok(value)
            }
            Operand::AtHlDec => {
                let hl = regs.hl();
                let value = bus.read8(hl)?;
                regs.set_hl(hl.wrapping_sub(1));
                Ok(value)
            }
            other => bus.read8(other.address(regs)),
        }
    }

    pub(super) fn write<B: Bus + ?Sized>(
        self,
        regs: &mut Registers,
        bus: &mut B,
        value: u8,
    ) -> Result<()> {
        match self {
            Operand::Reg(r) => {
                regs.set(r, value);
                Ok(())
            }
            Operand::AtHlInc => {
                let hl = regs.hl();
                bus.write8(hl, value)?;
                regs.set_hl(hl.wrapping_add(1));
                Ok(())
            }
            Operand::AtHlDec => {
                let hl = regs.hl();
                bus.write8(hl, value)?;
                regs.set_hl(hl.wrapping_sub(1));
                Ok(())
            }
            // Immediates never appear as destinations in the decode table.
            Operand::Imm(_) => Ok(()),
            other => bus.write8(other.address(regs), value),
        }
    }

    /// Effective address for the memory forms that do not touch HL.
    fn address(self, regs: &Registers) -> u16 {
        match self {
            Operand::At(rr) => regs.pair(rr),
            Operand::AtImm(nn) => nn,
            Operand::HighImm(n) => 0xFF00 | n as u16,
            Operand::HighC => 0xFF00 | regs.c as u16,
            _ => regs.hl(),
        }
    }

    /// Extra T-cycles the operand adds over a register-only form.
    pub(super) fn access_cycles(self) -> u32 {
        match self {
            Operand::Reg(_) => 0,
            Operand::AtImm(_) => 12,
            Operand::HighImm(_) => 8,
            _ => 4,
        }
    }

    pub(super) fn is_memory(self) -> bool {
        !matches!(self, Operand::Reg(_) | Operand::Imm(_))
    }
}

impl Cond {
    pub(super) fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Cond::Nz,
            1 => Cond::Z,
            2 => Cond::Nc,
            _ => Cond::C,
        }
    }

    pub(super) fn holds(self, f: Flags) -> bool {
        match self {
            Cond::Nz => !f.contains(Flags::Z),
            Cond::Z => f.contains(Flags::Z),
            Cond::Nc => !f.contains(Flags::C),
            Cond::C => f.contains(Flags::C),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Operand::Reg(r) => f.write_str(r.name()),
            Operand::AtHl | Operand::AtHlInc | Operand::AtHlDec => f.write_str("(hl)"),
            Operand::At(rr) => write!(f, "({})", rr.name()),
            Operand::Imm(n) => write!(f, "{n:02X}"),
            Operand::AtImm(nn) => write!(f, "({nn:04X})"),
            Operand::HighImm(n) => write!(f, "(ff00+{n:02X})"),
            Operand::HighC => f.write_str("(ff00+c)"),
        }
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Cond::Nz => "nz",
            Cond::Z => "z",
            Cond::Nc => "nc",
            Cond::C => "c",
        })
    }
}

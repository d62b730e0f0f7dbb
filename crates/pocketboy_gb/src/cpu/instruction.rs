use std::fmt;

use super::operand::{Cond, Operand};
use super::regs::Reg16;

/// Accumulator ALU operations, in opcode-table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

/// CB-prefixed operations, in opcode-table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CbOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
    Bit(u8),
    Res(u8),
    Set(u8),
}

/// The executable part of a decoded instruction.
///
/// Jump and call targets are already resolved to absolute addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,
    Ld8 { dst: Operand, src: Operand },
    Ld16(Reg16, u16),
    LdSpHl,
    /// `ld (nnnn),sp`
    LdImmSp(u16),
    /// `ld hl,sp+e`
    LdHlSpOffset(i8),
    Push(Reg16),
    Pop(Reg16),
    Alu(AluOp, Operand),
    Inc8(Operand),
    Dec8(Operand),
    Inc16(Reg16),
    Dec16(Reg16),
    AddHl(Reg16),
    AddSp(i8),
    Rlca,
    Rrca,
    Rla,
    Rra,
    Daa,
    Cpl,
    Scf,
    Ccf,
    Jp(Option<Cond>, u16),
    JpHl,
    Jr(Option<Cond>, u16),
    Call(Option<Cond>, u16),
    Ret(Option<Cond>),
    Reti,
    Rst(u16),
    Cb(CbOp, Operand),
    /// One of the gaps in the opcode table. Only fails when executed.
    Invalid(u8),
}

/// A decoded instruction: its encoded length and what it does.
///
/// `Display` renders the mnemonic used by the disassembler and traces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub length: u16,
    pub op: Op,
}

impl Instruction {
    pub fn mnemonic(&self) -> String {
        self.op.to_string()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.op.fmt(f)
    }
}

fn signed(offset: i8) -> String {
    if offset < 0 {
        format!("-{:02X}", offset.unsigned_abs())
    } else {
        format!("+{offset:02X}")
    }
}

fn cond_prefix(cond: Option<Cond>) -> String {
    cond.map(|c| format!("{c},")).unwrap_or_default()
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Mnemonics are left-aligned in a 4 column field followed by one space.
        macro_rules! m {
            ($name:expr) => { f.write_str($name) };
            ($name:expr, $($arg:tt)*) => {
                write!(f, "{:<4} {}", $name, format_args!($($arg)*))
            };
        }

        match *self {
            Op::Nop => m!("nop"),
            Op::Stop => m!("stop"),
            Op::Halt => m!("halt"),
            Op::Di => m!("di"),
            Op::Ei => m!("ei"),
            Op::Ld8 { dst, src } => {
                let name = if matches!(dst, Operand::AtHlInc) || matches!(src, Operand::AtHlInc) {
                    "ldi"
                } else if matches!(dst, Operand::AtHlDec) || matches!(src, Operand::AtHlDec) {
                    "ldd"
                } else {
                    "ld"
                };
                m!(name, "{dst},{src}")
            }
            Op::Ld16(rr, nn) => m!("ld", "{},{nn:04X}", rr.name()),
            Op::LdSpHl => m!("ld", "sp,hl"),
            Op::LdImmSp(nn) => m!("ld", "({nn:04X}),sp"),
            Op::LdHlSpOffset(e) => m!("ld", "hl,sp{}", signed(e)),
            Op::Push(rr) => m!("push", "{}", rr.name()),
            Op::Pop(rr) => m!("pop", "{}", rr.name()),
            Op::Alu(op, src) => match op {
                AluOp::Add => m!("add", "a,{src}"),
                AluOp::Adc => m!("adc", "a,{src}"),
                AluOp::Sub => m!("sub", "{src}"),
                AluOp::Sbc => m!("sbc", "a,{src}"),
                AluOp::And => m!("and", "{src}"),
                AluOp::Xor => m!("xor", "{src}"),
                AluOp::Or => m!("or", "{src}"),
                AluOp::Cp => m!("cp", "a,{src}"),
            },
            Op::Inc8(o) => m!("inc", "{o}"),
            Op::Dec8(o) => m!("dec", "{o}"),
            Op::Inc16(rr) => m!("inc", "{}", rr.name()),
            Op::Dec16(rr) => m!("dec", "{}", rr.name()),
            Op::AddHl(rr) => m!("add", "hl,{}", rr.name()),
            Op::AddSp(e) => m!("add", "sp,{}", signed(e)),
            Op::Rlca => m!("rlca"),
            Op::Rrca => m!("rrca"),
            Op::Rla => m!("rla"),
            Op::Rra => m!("rra"),
            Op::Daa => m!("daa"),
            Op::Cpl => m!("cpl"),
            Op::Scf => m!("scf"),
            Op::Ccf => m!("ccf"),
            Op::Jp(cond, nn) => m!("jp", "{}{nn:04X}", cond_prefix(cond)),
            Op::JpHl => m!("jp", "hl"),
            Op::Jr(cond, target) => m!("jr", "{}{target:04X}", cond_prefix(cond)),
            Op::Call(cond, nn) => m!("call", "{}{nn:04X}", cond_prefix(cond)),
            Op::Ret(None) => m!("ret"),
            Op::Ret(Some(cond)) => m!("ret", "{cond}"),
            Op::Reti => m!("reti"),
            Op::Rst(vector) => m!("rst", "{vector:02X}"),
            Op::Cb(op, o) => match op {
                CbOp::Rlc => m!("rlc", "{o}"),
                CbOp::Rrc => m!("rrc", "{o}"),
                CbOp::Rl => m!("rl", "{o}"),
                CbOp::Rr => m!("rr", "{o}"),
                CbOp::Sla => m!("sla", "{o}"),
                CbOp::Sra => m!("sra", "{o}"),
                CbOp::Swap => m!("swap", "{o}"),
                CbOp::Srl => m!("srl", "{o}"),
                CbOp::Bit(b) => m!("bit", "{b},{o}"),
                CbOp::Res(b) => m!("res", "{b},{o}"),
                CbOp::Set(b) => m!("set", "{b},{o}"),
            },
            Op::Invalid(opcode) => m!("db", "{opcode:02X}"),
        }
    }
}

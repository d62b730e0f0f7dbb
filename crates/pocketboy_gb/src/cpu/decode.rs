use super::instruction::{AluOp, CbOp, Instruction, Op};
use super::operand::{Cond, Operand};
use super::regs::{Reg16, Reg8};
use super::Bus;
use crate::error::Result;

const ALU_OPS: [AluOp; 8] = [
    AluOp::Add,
    AluOp::Adc,
    AluOp::Sub,
    AluOp::Sbc,
    AluOp::And,
    AluOp::Xor,
    AluOp::Or,
    AluOp::Cp,
];

/// `rp` table: 16-bit pairs used by loads and arithmetic.
fn rp(p: u8) -> Reg16 {
    match p & 0x03 {
        0 => Reg16::BC,
        1 => Reg16::DE,
        2 => Reg16::HL,
        _ => Reg16::SP,
    }
}

/// `rp2` table: 16-bit pairs used by PUSH/POP.
fn rp2(p: u8) -> Reg16 {
    match p & 0x03 {
        0 => Reg16::BC,
        1 => Reg16::DE,
        2 => Reg16::HL,
        _ => Reg16::AF,
    }
}

/// Reads immediates after the opcode, tracking how many bytes were consumed.
struct Cursor<'a, B: Bus + ?Sized> {
    bus: &'a B,
    addr: u16,
    length: u16,
}

impl<B: Bus + ?Sized> Cursor<'_, B> {
    fn imm8(&mut self) -> Result<u8> {
        let value = self.bus.read8(self.addr.wrapping_add(self.length))?;
        self.length += 1;
        Ok(value)
    }

    fn imm16(&mut self) -> Result<u16> {
        let lo = self.imm8()?;
        let hi = self.imm8()?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Absolute target of a relative jump, measured from the next instruction.
    fn rel_target(&mut self) -> Result<u16> {
        let offset = self.imm8()? as i8;
        Ok(self
            .addr
            .wrapping_add(self.length)
            .wrapping_add(offset as i16 as u16))
    }
}

/// Decode the instruction at `addr` without executing it.
///
/// This only reads the bus: registers are untouched, so it is safe to call
/// on arbitrary code regions (see [`super::disassemble`]). Gaps in the opcode
/// table decode to [`Op::Invalid`] and fail only when executed.
pub fn decode<B: Bus + ?Sized>(addr: u16, bus: &B) -> Result<Instruction> {
    let mut cur = Cursor {
        bus,
        addr,
        length: 0,
    };
    let opcode = cur.imm8()?;

    let x = opcode >> 6;
    let y = (opcode >> 3) & 0x07;
    let z = opcode & 0x07;
    let p = y >> 1;
    let q = y & 0x01;

    let op = match (x, z) {
        (0, 0) => match y {
            0 => Op::Nop,
            1 => Op::LdImmSp(cur.imm16()?),
            2 => {
                // STOP is encoded with a padding byte.
                cur.imm8()?;
                Op::Stop
            }
            3 => Op::Jr(None, cur.rel_target()?),
            _ => Op::Jr(Some(Cond::from_index(y - 4)), cur.rel_target()?),
        },
        (0, 1) if q == 0 => Op::Ld16(rp(p), cur.imm16()?),
        (0, 1) => Op::AddHl(rp(p)),
        (0, 2) => {
            let mem = match p {
                0 => Operand::At(Reg16::BC),
                1 => Operand::At(Reg16::DE),
                2 => Operand::AtHlInc,
                _ => Operand::AtHlDec,
            };
            let a = Operand::Reg(Reg8::A);
            if q == 0 {
                Op::Ld8 { dst: mem, src: a }
            } else {
                Op::Ld8 { dst: a, src: mem }
            }
        }
        (0, 3) if q == 0 => Op::Inc16(rp(p)),
        (0, 3) => Op::Dec16(rp(p)),
        (0, 4) => Op::Inc8(Operand::from_index(y)),
        (0, 5) => Op::Dec8(Operand::from_index(y)),
        (0, 6) => Op::Ld8 {
            dst: Operand::from_index(y),
            src: Operand::Imm(cur.imm8()?),
        },
        (0, _) => match y {
            0 => Op::Rlca,
            1 => Op::Rrca,
            2 => Op::Rla,
            3 => Op::Rra,
            4 => Op::Daa,
            5 => Op::Cpl,
            6 => Op::Scf,
            _ => Op::Ccf,
        },

        // LD r,r' with the (HL),(HL) slot taken by HALT.
        (1, 6) if y == 6 => Op::Halt,
        (1, _) => Op::Ld8 {
            dst: Operand::from_index(y),
            src: Operand::from_index(z),
        },

        (2, _) => Op::Alu(ALU_OPS[y as usize], Operand::from_index(z)),

        (_, 0) => match y {
            0..=3 => Op::Ret(Some(Cond::from_index(y))),
            4 => Op::Ld8 {
                dst: Operand::HighImm(cur.imm8()?),
                src: Operand::Reg(Reg8::A),
            },
            5 => Op::AddSp(cur.imm8()? as i8),
            6 => Op::Ld8 {
                dst: Operand::Reg(Reg8::A),
                src: Operand::HighImm(cur.imm8()?),
            },
            _ => Op::LdHlSpOffset(cur.imm8()? as i8),
        },
        (_, 1) if q == 0 => Op::Pop(rp2(p)),
        (_, 1) => match p {
            0 => Op::Ret(None),
            1 => Op::Reti,
            2 => Op::JpHl,
            _ => Op::LdSpHl,
        },
        (_, 2) => match y {
            0..=3 => Op::Jp(Some(Cond::from_index(y)), cur.imm16()?),
            4 => Op::Ld8 {
                dst: Operand::HighC,
                src: Operand::Reg(Reg8::A),
            },
            5 => Op::Ld8 {
                dst: Operand::AtImm(cur.imm16()?),
                src: Operand::Reg(Reg8::A),
            },
            6 => Op::Ld8 {
                dst: Operand::Reg(Reg8::A),
                src: Operand::HighC,
            },
            _ => Op::Ld8 {
                dst: Operand::Reg(Reg8::A),
                src: Operand::AtImm(cur.imm16()?),
            },
        },
        (_, 3) => match y {
            0 => Op::Jp(None, cur.imm16()?),
            1 => decode_cb(cur.imm8()?),
            6 => Op::Di,
            7 => Op::Ei,
            _ => Op::Invalid(opcode),
        },
        (_, 4) if y < 4 => Op::Call(Some(Cond::from_index(y)), cur.imm16()?),
        (_, 4) => Op::Invalid(opcode),
        (_, 5) if q == 0 => Op::Push(rp2(p)),
        (_, 5) if p == 0 => Op::Call(None, cur.imm16()?),
        (_, 5) => Op::Invalid(opcode),
        (_, 6) => Op::Alu(ALU_OPS[y as usize], Operand::Imm(cur.imm8()?)),
        (_, _) => Op::Rst(u16::from(y) * 8),
    };

    Ok(Instruction {
        length: cur.length,
        op,
    })
}

/// Second-level table behind the 0xCB prefix. Every entry is assigned.
fn decode_cb(cb: u8) -> Op {
    let y = (cb >> 3) & 0x07;
    let target = Operand::from_index(cb);
    let op = match cb >> 6 {
        0 => match y {
            0 => CbOp::Rlc,
            1 => CbOp::Rrc,
            2 => CbOp::Rl,
            3 => CbOp::Rr,
            4 => CbOp::Sla,
            5 => CbOp::Sra,
            6 => CbOp::Swap,
            _ => CbOp::Srl,
        },
        1 => CbOp::Bit(y),
        2 => CbOp::Res(y),
        _ => CbOp::Set(y),
    };
    Op::Cb(op, target)
}

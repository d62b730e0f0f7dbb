mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::instruction::Op;
use super::{Bus, Cpu};
use crate::error::{GbError, Result};

impl Cpu {
    /// Execute an already-decoded operation and return the number of cycles.
    ///
    /// PC must already point past the instruction: relative jumps, calls and
    /// RST push or build on that value.
    pub fn execute<B: Bus>(&mut self, bus: &mut B, op: Op) -> Result<u32> {
        match op {
            Op::Nop => Ok(4),

            // Low-power and interrupt-master control.
            Op::Stop => self.exec_stop(),
            Op::Halt => self.exec_halt(),
            Op::Di => self.exec_di(),
            Op::Ei => self.exec_ei(),

            // 8-bit and 16-bit loads.
            Op::Ld8 { dst, src } => self.exec_ld8(bus, dst, src),
            Op::Ld16(rr, value) => self.exec_ld16(rr, value),
            Op::LdSpHl => self.exec_ld_sp_hl(),
            Op::LdImmSp(addr) => self.exec_ld_imm_sp(bus, addr),
            Op::LdHlSpOffset(offset) => self.exec_ld_hl_sp_offset(offset),

            // Stack.
            Op::Push(rr) => self.exec_push(bus, rr),
            Op::Pop(rr) => self.exec_pop(bus, rr),

            // Arithmetic.
            Op::Alu(alu_op, src) => self.exec_alu(bus, alu_op, src),
            Op::Inc8(target) => self.exec_inc8(bus, target),
            Op::Dec8(target) => self.exec_dec8(bus, target),
            Op::Inc16(rr) => self.exec_inc16(rr),
            Op::Dec16(rr) => self.exec_dec16(rr),
            Op::AddHl(rr) => self.exec_add_hl(rr),
            Op::AddSp(offset) => self.exec_add_sp(offset),
            Op::Rlca => self.exec_rotate_a(true, false),
            Op::Rrca => self.exec_rotate_a(false, false),
            Op::Rla => self.exec_rotate_a(true, true),
            Op::Rra => self.exec_rotate_a(false, true),
            Op::Daa => self.exec_daa(),
            Op::Cpl => self.exec_cpl(),
            Op::Scf => self.exec_scf(),
            Op::Ccf => self.exec_ccf(),

            // Jumps, calls and returns.
            Op::Jp(cond, addr) => self.exec_jp(cond, addr),
            Op::JpHl => self.exec_jp_hl(),
            Op::Jr(cond, target) => self.exec_jr(cond, target),
            Op::Call(cond, addr) => self.exec_call(bus, cond, addr),
            Op::Ret(cond) => self.exec_ret(bus, cond),
            Op::Reti => self.exec_reti(bus),
            Op::Rst(vector) => self.exec_rst(bus, vector),

            Op::Cb(cb_op, target) => self.exec_cb(bus, cb_op, target),

            // Gaps are always single-byte opcodes.
            Op::Invalid(opcode) => Err(GbError::UnrecognizedOpcode {
                addr: self.regs.pc.wrapping_sub(1),
                opcode,
            }),
        }
    }
}

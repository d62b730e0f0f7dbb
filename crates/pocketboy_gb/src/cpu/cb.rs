use super::instruction::CbOp;
use super::operand::Operand;
use super::{Bus, Cpu, Flags};
use crate::error::Result;

impl Cpu {
    /// Execute a CB-prefixed bit operation, shift or rotate.
    ///
    /// Register forms take 8 cycles; `(hl)` forms take 16, except BIT which
    /// only reads and takes 12.
    pub(super) fn exec_cb<B: Bus>(&mut self, bus: &mut B, op: CbOp, target: Operand) -> Result<u32> {
        let value = target.read(&mut self.regs, bus)?;

        if let CbOp::Bit(bit) = op {
            self.regs.set_flag(Flags::Z, value & (1 << bit) == 0);
            self.regs.set_flag(Flags::N, false);
            self.regs.set_flag(Flags::H, true);
            return Ok(8 + target.access_cycles());
        }

        let result = match op {
            CbOp::Res(bit) => value & !(1 << bit),
            CbOp::Set(bit) => value | (1 << bit),
            shift => self.cb_shift(shift, value),
        };
        target.write(&mut self.regs, bus, result)?;
        Ok(8 + 2 * target.access_cycles())
    }

    /// Rotates and shifts: Z from the result, N and H cleared, C from the
    /// bit shifted out (SWAP clears C).
    fn cb_shift(&mut self, op: CbOp, value: u8) -> u8 {
        let carry_in = self.regs.flag(Flags::C);
        let (result, carry) = match op {
            CbOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            CbOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            CbOp::Rl => ((value << 1) | carry_in as u8, value & 0x80 != 0),
            CbOp::Rr => ((value >> 1) | ((carry_in as u8) << 7), value & 0x01 != 0),
            CbOp::Sla => (value << 1, value & 0x80 != 0),
            CbOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            CbOp::Swap => (value.rotate_left(4), false),
            CbOp::Srl => (value >> 1, value & 0x01 != 0),
            CbOp::Bit(_) | CbOp::Res(_) | CbOp::Set(_) => (value, carry_in),
        };
        self.regs.f = Flags::empty();
        self.regs.set_flag(Flags::Z, result == 0);
        self.regs.set_flag(Flags::C, carry);
        result
    }
}

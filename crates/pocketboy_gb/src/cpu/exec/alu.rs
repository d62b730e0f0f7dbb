use crate::cpu::{AluOp, Bus, Cpu, Operand, Reg16};
use crate::error::Result;

impl Cpu {
    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP against A.
    pub(super) fn exec_alu<B: Bus>(&mut self, bus: &mut B, op: AluOp, src: Operand) -> Result<u32> {
        let value = src.read(&mut self.regs, bus)?;
        self.alu(op, value);
        Ok(4 + src.access_cycles())
    }

    pub(super) fn exec_add_hl(&mut self, rr: Reg16) -> Result<u32> {
        let value = self.regs.pair(rr);
        self.alu_add16_hl(value);
        Ok(8)
    }

    pub(super) fn exec_add_sp(&mut self, offset: i8) -> Result<u32> {
        self.regs.sp = self.alu_add16_signed(self.regs.sp, offset);
        Ok(16)
    }

    pub(super) fn exec_rotate_a(&mut self, left: bool, through_carry: bool) -> Result<u32> {
        self.alu_rotate_a(left, through_carry);
        Ok(4)
    }

    pub(super) fn exec_daa(&mut self) -> Result<u32> {
        self.alu_daa();
        Ok(4)
    }
}

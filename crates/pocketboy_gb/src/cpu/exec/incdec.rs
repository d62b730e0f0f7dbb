use crate::cpu::{Bus, Cpu, Operand, Reg16};
use crate::error::Result;

impl Cpu {
    /// INC r is 4 cycles, INC (HL) reads and writes back for 12.
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, target: Operand) -> Result<u32> {
        let value = target.read(&mut self.regs, bus)?;
        let result = self.alu_inc8(value);
        target.write(&mut self.regs, bus, result)?;
        Ok(4 + 2 * target.access_cycles())
    }

    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, target: Operand) -> Result<u32> {
        let value = target.read(&mut self.regs, bus)?;
        let result = self.alu_dec8(value);
        target.write(&mut self.regs, bus, result)?;
        Ok(4 + 2 * target.access_cycles())
    }

    // 16-bit INC/DEC never touch flags.
    pub(super) fn exec_inc16(&mut self, rr: Reg16) -> Result<u32> {
        let value = self.regs.pair(rr).wrapping_add(1);
        self.regs.set_pair(rr, value);
        Ok(8)
    }

    pub(super) fn exec_dec16(&mut self, rr: Reg16) -> Result<u32> {
        let value = self.regs.pair(rr).wrapping_sub(1);
        self.regs.set_pair(rr, value);
        Ok(8)
    }
}

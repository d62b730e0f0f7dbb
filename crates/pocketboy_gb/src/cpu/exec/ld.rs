use crate::cpu::{Bus, Cpu, Operand, Reg16};
use crate::error::Result;

impl Cpu {
    pub(super) fn exec_ld8<B: Bus>(&mut self, bus: &mut B, dst: Operand, src: Operand) -> Result<u32> {
        let value = src.read(&mut self.regs, bus)?;
        dst.write(&mut self.regs, bus, value)?;
        Ok(4 + src.access_cycles() + dst.access_cycles())
    }

    pub(super) fn exec_ld16(&mut self, rr: Reg16, value: u16) -> Result<u32> {
        self.regs.set_pair(rr, value);
        Ok(12)
    }

    pub(super) fn exec_ld_sp_hl(&mut self) -> Result<u32> {
        self.regs.sp = self.regs.hl();
        Ok(8)
    }

    pub(super) fn exec_ld_imm_sp<B: Bus>(&mut self, bus: &mut B, addr: u16) -> Result<u32> {
        bus.write16(addr, self.regs.sp)?;
        Ok(20)
    }

    pub(super) fn exec_ld_hl_sp_offset(&mut self, offset: i8) -> Result<u32> {
        let value = self.alu_add16_signed(self.regs.sp, offset);
        self.regs.set_hl(value);
        Ok(12)
    }
}

use crate::cpu::{Cond, Cpu};
use crate::error::Result;

impl Cpu {
    pub(super) fn exec_jp(&mut self, cond: Option<Cond>, addr: u16) -> Result<u32> {
        if cond.is_some_and(|c| !c.holds(self.regs.f)) {
            return Ok(12);
        }
        self.regs.pc = addr;
        Ok(16)
    }

    pub(super) fn exec_jp_hl(&mut self) -> Result<u32> {
        self.regs.pc = self.regs.hl();
        Ok(4)
    }

    /// The target was resolved at decode time relative to the next instruction.
    pub(super) fn exec_jr(&mut self, cond: Option<Cond>, target: u16) -> Result<u32> {
        if cond.is_some_and(|c| !c.holds(self.regs.f)) {
            return Ok(8);
        }
        self.regs.pc = target;
        Ok(12)
    }
}

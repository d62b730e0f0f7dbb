use crate::cpu::{Bus, Cond, Cpu, Reg16};
use crate::error::Result;

impl Cpu {
    /// Push a word: high byte at SP-1, low byte at SP-2.
    pub(in crate::cpu) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) -> Result<()> {
        let [lo, hi] = value.to_le_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi)?;
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo)
    }

    pub(in crate::cpu) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> Result<u16> {
        let lo = bus.read8(self.regs.sp)?;
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = bus.read8(self.regs.sp)?;
        self.regs.sp = self.regs.sp.wrapping_add(1);
        Ok(u16::from_le_bytes([lo, hi]))
    }

    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, rr: Reg16) -> Result<u32> {
        let value = self.regs.pair(rr);
        self.push_u16(bus, value)?;
        Ok(16)
    }

    /// POP AF drops the low nibble of F on the way in.
    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, rr: Reg16) -> Result<u32> {
        let value = self.pop_u16(bus)?;
        self.regs.set_pair(rr, value);
        Ok(12)
    }

    pub(super) fn exec_call<B: Bus>(&mut self, bus: &mut B, cond: Option<Cond>, addr: u16) -> Result<u32> {
        if cond.is_some_and(|c| !c.holds(self.regs.f)) {
            return Ok(12);
        }
        let ret = self.regs.pc;
        self.push_u16(bus, ret)?;
        self.regs.pc = addr;
        Ok(24)
    }

    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B, cond: Option<Cond>) -> Result<u32> {
        match cond {
            None => {
                self.regs.pc = self.pop_u16(bus)?;
                Ok(16)
            }
            Some(c) if c.holds(self.regs.f) => {
                self.regs.pc = self.pop_u16(bus)?;
                Ok(20)
            }
            Some(_) => Ok(8),
        }
    }

    /// RETI re-enables interrupts immediately, unlike EI.
    pub(super) fn exec_reti<B: Bus>(&mut self, bus: &mut B) -> Result<u32> {
        self.regs.pc = self.pop_u16(bus)?;
        self.ime = true;
        Ok(16)
    }

    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, vector: u16) -> Result<u32> {
        let ret = self.regs.pc;
        self.push_u16(bus, ret)?;
        self.regs.pc = vector;
        Ok(16)
    }
}

use crate::cpu::{Cpu, Flags};
use crate::error::Result;

impl Cpu {
    /// STOP is treated as a 4-cycle no-op; its padding byte was consumed at decode.
    pub(super) fn exec_stop(&mut self) -> Result<u32> {
        log::debug!("STOP at {:04X} ignored", self.regs.pc.wrapping_sub(2));
        Ok(4)
    }

    pub(super) fn exec_halt(&mut self) -> Result<u32> {
        self.halted = true;
        Ok(4)
    }

    pub(super) fn exec_di(&mut self) -> Result<u32> {
        self.ime = false;
        self.ime_enable_pending = false;
        Ok(4)
    }

    /// IME turns on after the next instruction completes.
    pub(super) fn exec_ei(&mut self) -> Result<u32> {
        self.ime_enable_pending = true;
        Ok(4)
    }

    pub(super) fn exec_cpl(&mut self) -> Result<u32> {
        self.regs.a = !self.regs.a;
        self.regs.set_flag(Flags::N, true);
        self.regs.set_flag(Flags::H, true);
        Ok(4)
    }

    pub(super) fn exec_scf(&mut self) -> Result<u32> {
        self.regs.set_flag(Flags::N, false);
        self.regs.set_flag(Flags::H, false);
        self.regs.set_flag(Flags::C, true);
        Ok(4)
    }

    pub(super) fn exec_ccf(&mut self) -> Result<u32> {
        let carry = self.regs.flag(Flags::C);
        self.regs.set_flag(Flags::N, false);
        self.regs.set_flag(Flags::H, false);
        self.regs.set_flag(Flags::C, !carry);
        Ok(4)
    }
}

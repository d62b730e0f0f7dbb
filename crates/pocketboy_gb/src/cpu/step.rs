use super::decode::decode;
use super::{Bus, Cpu};
use crate::error::{CpuFault, GbError, Result};

/// Words of stack captured in a fault report.
const STACK_SCAN_WORDS: u16 = 8;

impl Cpu {
    /// Execute a single step and return the number of T-cycles it took.
    ///
    /// A step is exactly one of: entering an interrupt handler, idling one
    /// M-cycle while halted, or decoding and executing one instruction.
    /// Interrupts are therefore only ever sampled between instructions.
    ///
    /// Any error is returned as [`GbError::Fault`] carrying the address of
    /// the failed instruction, a register dump and a scan of the stack.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32> {
        let pc = self.regs.pc;
        self.step_inner(bus).map_err(|err| self.fault(bus, pc, err))
    }

    fn step_inner<B: Bus>(&mut self, bus: &mut B) -> Result<u32> {
        if let Some(cycles) = self.service_interrupt(bus)? {
            return Ok(cycles);
        }

        if self.halted {
            // With IME off a pending interrupt still ends HALT, it just is
            // not serviced.
            if bus.pending_interrupt()?.is_some() {
                self.halted = false;
            }
            return Ok(4);
        }

        let apply_ei = self.ime_enable_pending;
        let instruction = decode(self.regs.pc, bus)?;
        log::trace!("{:04X}: {}", self.regs.pc, instruction);
        self.regs.pc = self.regs.pc.wrapping_add(instruction.length);
        let cycles = self.execute(bus, instruction.op)?;

        // DI in the shadow of EI clears the pending flag and wins.
        if apply_ei && self.ime_enable_pending {
            self.ime_enable_pending = false;
            self.ime = true;
        }
        Ok(cycles)
    }

    /// Wrap `source` into a [`GbError::Fault`] report for the instruction at `pc`.
    pub(crate) fn fault<B: Bus>(&self, bus: &B, pc: u16, source: GbError) -> GbError {
        let stack = (0..STACK_SCAN_WORDS)
            .filter_map(|i| {
                let addr = self.regs.sp.wrapping_add(i * 2);
                bus.read16(addr).ok().map(|word| (addr, word))
            })
            .collect();
        let fault = CpuFault {
            pc,
            registers: self.dump(),
            stack,
            source,
        };
        log::error!("{fault}");
        GbError::Fault(Box::new(fault))
    }
}

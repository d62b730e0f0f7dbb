use super::{Bus, Cpu};
use crate::error::Result;

/// T-cycles spent entering an interrupt handler: 4 for the check plus the
/// 16 of the implied call.
pub const INTERRUPT_CYCLES: u32 = 20;

impl Cpu {
    /// Service the highest-priority pending interrupt if IME allows it.
    ///
    /// On dispatch this clears IME and HALT, acknowledges the source, pushes
    /// PC and jumps to the fixed vector, all as a single step.
    pub(super) fn service_interrupt<B: Bus>(&mut self, bus: &mut B) -> Result<Option<u32>> {
        if !self.ime {
            return Ok(None);
        }
        let Some(source) = bus.pending_interrupt()? else {
            return Ok(None);
        };

        self.ime = false;
        self.ime_enable_pending = false;
        self.halted = false;
        bus.acknowledge_interrupt(source)?;

        let ret = self.regs.pc;
        self.push_u16(bus, ret)?;
        self.regs.pc = source.vector();
        log::debug!(
            "dispatching {:?} interrupt from {:04X} to {:04X}",
            source,
            ret,
            self.regs.pc
        );
        Ok(Some(INTERRUPT_CYCLES))
    }
}

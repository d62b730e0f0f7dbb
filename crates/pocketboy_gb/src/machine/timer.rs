use super::interrupts::{Interrupt, InterruptController};

const TAC_ENABLE: u8 = 0x04;

/// Internal-counter masks per TAC rate select: /1024, /16, /64, /256.
const RATE_MASKS: [u16; 4] = [0x03FF, 0x000F, 0x003F, 0x00FF];

/// Timer / divider unit.
///
/// A free-running internal counter advances once per T-cycle and DIV exposes
/// its upper byte. While TAC is enabled, TIMA counts every tick on which the
/// bits under the selected rate mask roll over to zero.
#[derive(Clone, Debug, Default)]
pub struct Timer {
    counter: u16,
    tima: u8,
    tma: u8,
    tac: u8,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timer state at the hand-over from the boot ROM: DIV reads 0xAB.
    pub fn post_boot() -> Self {
        Self {
            counter: 0xAB00,
            ..Self::default()
        }
    }

    /// Advance by one T-cycle.
    ///
    /// TIMA overflow reloads from TMA and requests the timer interrupt in the
    /// same tick, so 0x00 is never observable in between.
    pub fn tick(&mut self, interrupts: &mut InterruptController) {
        self.counter = self.counter.wrapping_add(1);
        if self.tac & TAC_ENABLE == 0 {
            return;
        }
        let mask = RATE_MASKS[(self.tac & 0x03) as usize];
        if self.counter & mask != 0 {
            return;
        }
        match self.tima.checked_add(1) {
            Some(next) => self.tima = next,
            None => {
                self.tima = self.tma;
                interrupts.request(Interrupt::Timer);
                log::trace!("TIMA overflow, reloaded {:02X}", self.tma);
            }
        }
    }

    #[inline]
    pub fn div(&self) -> u8 {
        (self.counter >> 8) as u8
    }

    /// Any write to DIV resets the whole internal counter.
    #[inline]
    pub fn reset_div(&mut self) {
        self.counter = 0;
    }

    #[inline]
    pub fn tima(&self) -> u8 {
        self.tima
    }

    #[inline]
    pub fn set_tima(&mut self, value: u8) {
        self.tima = value;
    }

    #[inline]
    pub fn tma(&self) -> u8 {
        self.tma
    }

    #[inline]
    pub fn set_tma(&mut self, value: u8) {
        self.tma = value;
    }

    /// TAC with the five unused bits reading high.
    #[inline]
    pub fn tac(&self) -> u8 {
        0xF8 | self.tac
    }

    #[inline]
    pub fn set_tac(&mut self, value: u8) {
        self.tac = value & 0x07;
    }

    /// Bus read for FF04..=FF07.
    pub(super) fn read(&self, addr: u16) -> u8 {
        match addr {
            0xFF04 => self.div(),
            0xFF05 => self.tima(),
            0xFF06 => self.tma(),
            _ => self.tac(),
        }
    }

    /// Bus write for FF04..=FF07.
    pub(super) fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0xFF04 => self.reset_div(),
            0xFF05 => self.set_tima(value),
            0xFF06 => self.set_tma(value),
            _ => self.set_tac(value),
        }
    }
}

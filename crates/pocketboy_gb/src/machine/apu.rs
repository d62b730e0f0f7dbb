/// Sound register file (FF10..=FF3F).
///
/// No audio is produced. Registers are stored as written, subject to the
/// NR52 power switch: while the unit is off, writes to FF10..=FF25 are
/// dropped, and switching it off clears them.
#[derive(Clone, Debug)]
pub(crate) struct Apu {
    regs: [u8; 0x30],
}

const BASE: u16 = 0xFF10;
const NR52: u16 = 0xFF26;
const POWER: u8 = 0x80;

impl Default for Apu {
    fn default() -> Self {
        Self { regs: [0; 0x30] }
    }
}

impl Apu {
    /// Power-on state left by the boot ROM: sound enabled.
    pub(crate) fn post_boot() -> Self {
        let mut apu = Self::default();
        apu.regs[(NR52 - BASE) as usize] = POWER;
        apu
    }

    fn powered(&self) -> bool {
        self.regs[(NR52 - BASE) as usize] & POWER != 0
    }

    pub(crate) fn read(&self, addr: u16) -> u8 {
        self.regs[(addr - BASE) as usize]
    }

    pub(crate) fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0xFF10..=0xFF25 => {
                if self.powered() {
                    self.regs[(addr - BASE) as usize] = value;
                }
            }
            NR52 => {
                if self.powered() && value & POWER == 0 {
                    log::debug!("sound unit powered off");
                    self.regs[..=(0xFF25 - BASE) as usize].fill(0);
                }
                // Only the power bit is writable.
                let slot = &mut self.regs[(NR52 - BASE) as usize];
                *slot = (*slot & !POWER) | (value & POWER);
            }
            _ => self.regs[(addr - BASE) as usize] = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_are_dropped_while_powered_off() {
        let mut apu = Apu::default();
        apu.write(0xFF12, 0xF3);
        assert_eq!(apu.read(0xFF12), 0x00);

        apu.write(NR52, 0x80);
        apu.write(0xFF12, 0xF3);
        assert_eq!(apu.read(0xFF12), 0xF3);

        // Wave RAM is not affected by power.
        apu.write(0xFF30, 0x12);
        apu.write(NR52, 0x00);
        assert_eq!(apu.read(0xFF12), 0x00);
        assert_eq!(apu.read(0xFF30), 0x12);
    }
}

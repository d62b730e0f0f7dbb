use bitflags::bitflags;

bitflags! {
    /// Buttons currently held down. The low nibble is the d-pad group and the
    /// high nibble the action group, each in P1 bit order.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Buttons: u8 {
        const RIGHT = 0x01;
        const LEFT = 0x02;
        const UP = 0x04;
        const DOWN = 0x08;
        const A = 0x10;
        const B = 0x20;
        const SELECT = 0x40;
        const START = 0x80;
    }
}

const SELECT_DPAD: u8 = 0x10;
const SELECT_ACTION: u8 = 0x20;

/// P1/JOYP register (FF00).
#[derive(Clone, Debug)]
pub(crate) struct Joypad {
    select: u8,
    pressed: Buttons,
}

impl Default for Joypad {
    fn default() -> Self {
        Self {
            select: SELECT_DPAD | SELECT_ACTION,
            pressed: Buttons::empty(),
        }
    }
}

impl Joypad {
    pub(crate) fn read(&self) -> u8 {
        // Bits 7-6 always read as 1; a pressed button reads as 0.
        let mut low = 0x0F;
        if self.select & SELECT_DPAD == 0 {
            low &= !self.pressed.bits() & 0x0F;
        }
        if self.select & SELECT_ACTION == 0 {
            low &= !(self.pressed.bits() >> 4) & 0x0F;
        }
        0xC0 | self.select | low
    }

    /// Only the two group-select bits are writable.
    pub(crate) fn write(&mut self, value: u8) {
        self.select = value & (SELECT_DPAD | SELECT_ACTION);
    }

    /// Replace the pressed set; returns true if any button went down.
    pub(crate) fn set_pressed(&mut self, buttons: Buttons) -> bool {
        let newly_pressed = buttons & !self.pressed;
        self.pressed = buttons;
        !newly_pressed.is_empty()
    }
}

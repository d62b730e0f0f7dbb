/// Interrupt sources, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interrupt {
    VBlank = 0,
    LcdStat = 1,
    Timer = 2,
    Serial = 3,
    Joypad = 4,
}

impl Interrupt {
    /// All sources, highest priority first.
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    /// Bit of this source in IE/IF.
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self as u8
    }

    /// Fixed handler address: 0x40, 0x48, 0x50, 0x58, 0x60.
    #[inline]
    pub const fn vector(self) -> u16 {
        0x40 + 8 * self as u16
    }

    /// Highest-priority source whose bit is set in `bits`.
    pub fn highest(bits: u8) -> Option<Interrupt> {
        Self::ALL.into_iter().find(|source| bits & source.mask() != 0)
    }
}

/// IE/IF register pair.
///
/// Producers (PPU, timer) only ever call [`InterruptController::request`];
/// deciding whether to act on a pending source is the CPU's job.
#[derive(Clone, Debug, Default)]
pub struct InterruptController {
    enable: u8,
    request: u8,
}

impl InterruptController {
    pub fn new() -> Self {
        Self::default()
    }

    /// IF as seen on the bus; the three unused bits read back as 1.
    #[inline]
    pub fn read_request(&self) -> u8 {
        0xE0 | self.request
    }

    #[inline]
    pub fn write_request(&mut self, value: u8) {
        self.request = value & 0x1F;
    }

    #[inline]
    pub fn read_enable(&self) -> u8 {
        self.enable
    }

    #[inline]
    pub fn write_enable(&mut self, value: u8) {
        self.enable = value;
    }

    #[inline]
    pub fn request(&mut self, source: Interrupt) {
        self.request |= source.mask();
    }

    #[inline]
    pub fn clear(&mut self, source: Interrupt) {
        self.request &= !source.mask();
    }

    /// Whether `source` has been requested, regardless of IE.
    #[inline]
    pub fn is_requested(&self, source: Interrupt) -> bool {
        self.request & source.mask() != 0
    }

    /// Highest-priority source that is both requested and enabled.
    pub fn pending(&self) -> Option<Interrupt> {
        Interrupt::highest(self.request & self.enable)
    }
}

use typed_builder::TypedBuilder;

/// What the bus does with an address outside the memory map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmappedPolicy {
    /// Fail the access; the session stops with a fault report.
    #[default]
    Fatal,
    /// Log a warning, read 0xFF and drop writes.
    OpenBus,
}

/// Session options for [`super::GameBoy::new`].
///
/// ```
/// use pocketboy_gb::{GameBoyConfig, UnmappedPolicy};
///
/// let config = GameBoyConfig::builder()
///     .unmapped(UnmappedPolicy::OpenBus)
///     .build();
/// assert!(config.boot_rom.is_none());
/// ```
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct GameBoyConfig {
    /// 256-byte DMG boot ROM. Without one the session starts in the state the
    /// boot ROM would have left behind, at PC=0x0100.
    #[builder(default, setter(strip_option))]
    pub boot_rom: Option<Vec<u8>>,
    #[builder(default)]
    pub unmapped: UnmappedPolicy,
}

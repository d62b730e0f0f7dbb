use crate::error::{GbError, Result};

const TITLE: std::ops::Range<usize> = 0x0134..0x0144;
const CART_TYPE: usize = 0x0147;
const ROM_SIZE: usize = 0x0148;
const RAM_SIZE: usize = 0x0149;
/// First byte after the header; anything shorter cannot be a cartridge.
const HEADER_END: usize = 0x0150;

/// Metadata decoded from the cartridge header at 0x0134..=0x014F.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartridgeHeader {
    pub title: String,
    pub cart_type: u8,
    pub rom_size_class: u8,
    pub ram_size_class: u8,
}

impl CartridgeHeader {
    /// Decode and validate the header.
    ///
    /// Only the MBC1 family is accepted: 0x01 (plain), 0x02 (+RAM) and
    /// 0x03 (+RAM+battery).
    pub fn parse(rom: &[u8]) -> Result<Self> {
        if rom.len() < HEADER_END {
            return Err(GbError::RomTooSmall { len: rom.len() });
        }

        let cart_type = rom[CART_TYPE];
        if !matches!(cart_type, 0x01..=0x03) {
            return Err(GbError::UnsupportedCartridgeType(cart_type));
        }
        let rom_size_class = rom[ROM_SIZE];
        if rom_size_class > 0x06 {
            return Err(GbError::UnsupportedRomSize(rom_size_class));
        }
        let ram_size_class = rom[RAM_SIZE];
        if ram_bytes_for(ram_size_class).is_none() {
            return Err(GbError::UnsupportedRamSize(ram_size_class));
        }

        let title = rom[TITLE]
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '?' })
            .collect();

        Ok(Self {
            title,
            cart_type,
            rom_size_class,
            ram_size_class,
        })
    }

    /// Number of 16 KiB ROM banks the header declares.
    pub fn rom_banks(&self) -> usize {
        2 << self.rom_size_class
    }

    /// Size of external RAM in bytes (0 when the cartridge has none).
    pub fn ram_bytes(&self) -> usize {
        ram_bytes_for(self.ram_size_class).unwrap_or(0)
    }

    pub fn has_battery(&self) -> bool {
        self.cart_type == 0x03
    }
}

fn ram_bytes_for(class: u8) -> Option<usize> {
    match class {
        0x00 => Some(0),
        0x02 => Some(0x2000),
        0x03 => Some(0x8000),
        0x04 => Some(0x20000),
        0x05 => Some(0x10000),
        _ => None,
    }
}

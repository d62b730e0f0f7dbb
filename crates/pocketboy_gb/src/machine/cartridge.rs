mod header;

pub use header::CartridgeHeader;

use crate::error::{GbError, Result};

const BANK_SIZE: usize = 0x4000;

/// MBC1 cartridge.
///
/// Bank 0 is fixed at 0x0000-0x3FFF and the bank selected through
/// 0x2000-0x3FFF is mapped at 0x4000-0x7FFF. Selecting bank 0 selects bank 1.
/// External RAM, when the header declares any, is reachable at
/// 0xA000-0xBFFF only after it has been enabled through 0x0000-0x1FFF.
#[derive(Clone, Debug)]
pub struct Cartridge {
    header: CartridgeHeader,
    rom: Vec<u8>,
    ram: Option<Vec<u8>>,
    rom_bank: u8,
    ram_enabled: bool,
}

impl Cartridge {
    pub fn new(rom: Vec<u8>) -> Result<Self> {
        let header = CartridgeHeader::parse(&rom)?;
        let ram = match header.ram_bytes() {
            0 => None,
            n => Some(vec![0; n]),
        };
        if rom.len() != header.rom_banks() * BANK_SIZE {
            log::warn!(
                "ROM image is {:#X} bytes but the header declares {} banks",
                rom.len(),
                header.rom_banks()
            );
        }
        log::info!(
            "cartridge '{}': type {:02X}, {} ROM banks, {:#X} bytes RAM",
            header.title,
            header.cart_type,
            header.rom_banks(),
            header.ram_bytes()
        );
        Ok(Self {
            header,
            rom,
            ram,
            rom_bank: 1,
            ram_enabled: false,
        })
    }

    pub fn header(&self) -> &CartridgeHeader {
        &self.header
    }

    /// Currently selected bank for 0x4000-0x7FFF.
    pub fn rom_bank(&self) -> u8 {
        self.rom_bank
    }

    pub fn ram_enabled(&self) -> bool {
        self.ram_enabled
    }

    pub fn read(&self, addr: u16) -> Result<u8> {
        match addr {
            0x0000..=0x7FFF => {
                let bank = if addr < 0x4000 { 0 } else { self.rom_bank };
                let index = bank as usize * BANK_SIZE + (addr as usize % BANK_SIZE);
                self.rom
                    .get(index)
                    .copied()
                    .ok_or(GbError::RomBankOutOfBounds {
                        addr,
                        bank,
                        index,
                        rom_len: self.rom.len(),
                    })
            }
            0xA000..=0xBFFF => match self.ram_slot(addr) {
                Some((ram, offset)) => Ok(ram[offset]),
                None => Err(GbError::CartridgeRamDisabled { addr }),
            },
            _ => Err(GbError::UnmappedRead { addr }),
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) -> Result<()> {
        match addr {
            0x0000..=0x1FFF => {
                self.ram_enabled = value & 0x0F == 0x0A;
                log::trace!("cartridge RAM enabled: {}", self.ram_enabled);
                Ok(())
            }
            0x2000..=0x3FFF => {
                self.rom_bank = value.max(1);
                log::debug!("ROM bank {:02X} selected", self.rom_bank);
                Ok(())
            }
            0xA000..=0xBFFF if self.ram_enabled => {
                let offset = (addr - 0xA000) as usize;
                match self.ram.as_mut().and_then(|ram| ram.get_mut(offset)) {
                    Some(slot) => {
                        *slot = value;
                        Ok(())
                    }
                    None => Err(GbError::CartridgeRamDisabled { addr }),
                }
            }
            0xA000..=0xBFFF => Err(GbError::CartridgeRamDisabled { addr }),
            _ => Err(GbError::UnsupportedCartridgeWrite { addr, value }),
        }
    }

    fn ram_slot(&self, addr: u16) -> Option<(&[u8], usize)> {
        if !self.ram_enabled {
            return None;
        }
        let offset = (addr - 0xA000) as usize;
        self.ram
            .as_deref()
            .filter(|ram| offset < ram.len())
            .map(|ram| (ram, offset))
    }

    /// External RAM contents worth persisting, if the cartridge has a battery.
    pub fn battery_ram(&self) -> Option<&[u8]> {
        if self.header.has_battery() {
            self.ram.as_deref()
        } else {
            None
        }
    }

    /// Restore previously saved battery RAM. Extra bytes are ignored and a
    /// short image only fills the beginning.
    pub fn load_battery_ram(&mut self, data: &[u8]) {
        if !self.header.has_battery() {
            log::warn!("ignoring save data for a cartridge without a battery");
            return;
        }
        if let Some(ram) = self.ram.as_mut() {
            let n = ram.len().min(data.len());
            ram[..n].copy_from_slice(&data[..n]);
        }
    }
}

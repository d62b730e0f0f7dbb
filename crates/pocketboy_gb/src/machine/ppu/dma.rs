use super::{Ppu, OAM_SIZE};
use crate::error::{GbError, Result};

/// Highest DMA page value that starts a transfer.
const DMA_MAX_PAGE: u8 = 0xDF;

/// An OAM DMA transfer in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct DmaTransfer {
    source: u16,
    copied: usize,
}

impl Ppu {
    /// Handle a write to the DMA register.
    pub(super) fn start_dma(&mut self, value: u8) -> Result<()> {
        if self.dma_transfer.is_some() {
            return Err(GbError::DmaInProgress { value });
        }
        self.dma = value;
        if value > DMA_MAX_PAGE {
            log::warn!("DMA page {value:02X} is above {DMA_MAX_PAGE:02X}, no transfer started");
            return Ok(());
        }
        self.dma_transfer = Some(DmaTransfer {
            source: u16::from(value) << 8,
            copied: 0,
        });
        log::debug!("OAM DMA started from {:04X}", u16::from(value) << 8);
        Ok(())
    }

    #[inline]
    pub fn dma_active(&self) -> bool {
        self.dma_transfer.is_some()
    }

    /// Bus address the next DMA byte must be read from, if a transfer is active.
    pub fn dma_source(&self) -> Option<u16> {
        self.dma_transfer
            .map(|t| t.source.wrapping_add(t.copied as u16))
    }

    /// Store the byte fetched from [`Ppu::dma_source`] and advance the transfer.
    ///
    /// The transfer ends after 160 bytes.
    pub fn dma_step(&mut self, value: u8) -> Result<()> {
        let Some(mut transfer) = self.dma_transfer else {
            return Ok(());
        };
        self.write_oam(transfer.copied, value)?;
        transfer.copied += 1;
        if transfer.copied == OAM_SIZE {
            log::debug!("OAM DMA from {:04X} finished", transfer.source);
            self.dma_transfer = None;
        } else {
            self.dma_transfer = Some(transfer);
        }
        Ok(())
    }
}

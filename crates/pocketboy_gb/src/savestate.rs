//! Reader for BESS ("Best Effort Save State") snapshots.
//!
//! Only the parts needed to seed the video hardware are extracted: VRAM, the
//! 128 bytes of I/O registers and OAM, all from the `CORE` block.

use crate::error::{GbError, Result};
use crate::machine::{OAM_SIZE, PPU_REGISTER_COUNT};

const MAGIC: &[u8; 4] = b"BESS";
const FOOTER_LEN: usize = 8;
const BLOCK_HEADER_LEN: usize = 8;

const TAG_CORE: &[u8; 4] = b"CORE";
const TAG_END: &[u8; 4] = b"END ";

/// Offsets inside the CORE block body.
const CORE_IO_REGS: usize = 0x18;
const CORE_IO_REGS_LEN: usize = 0x80;
const CORE_VRAM_SIZE: usize = 0xA0;
const CORE_VRAM_OFFSET: usize = 0xA4;
const CORE_OAM_SIZE: usize = 0xB0;
const CORE_OAM_OFFSET: usize = 0xB4;

/// I/O register index of LCDC within the CORE register dump.
const IO_LCDC: usize = 0x40;

/// Video state recovered from a BESS file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BessState {
    pub vram: Vec<u8>,
    /// FF00..=FF7F as captured.
    pub io_regs: Vec<u8>,
    pub oam: Vec<u8>,
}

impl BessState {
    /// The LCD register window FF40..=FF4B.
    pub fn ppu_registers(&self) -> &[u8] {
        let end = (IO_LCDC + PPU_REGISTER_COUNT).min(self.io_regs.len());
        self.io_regs.get(IO_LCDC..end).unwrap_or(&[])
    }
}

/// Whether `contents` ends with a BESS footer.
pub fn detect(contents: &[u8]) -> bool {
    contents.len() >= FOOTER_LEN && contents.ends_with(MAGIC)
}

/// Offset of the first block, from the footer.
pub fn header_offset(contents: &[u8]) -> Result<usize> {
    if !detect(contents) {
        return Err(invalid("missing BESS footer"));
    }
    let footer = contents.len() - FOOTER_LEN;
    read_le32(contents, footer)
}

/// Walk the block list and pull out the CORE video state.
pub fn load(contents: &[u8]) -> Result<BessState> {
    let mut pos = header_offset(contents)?;
    let mut state = BessState::default();

    loop {
        let tag = slice(contents, pos, 4)?;
        let length = read_le32(contents, pos + 4)?;
        pos += BLOCK_HEADER_LEN;
        log::trace!("BESS block {:?} ({length} bytes) at {pos:#X}", String::from_utf8_lossy(tag));

        if tag == TAG_END {
            break;
        }
        if tag == TAG_CORE {
            state.io_regs = slice(contents, pos + CORE_IO_REGS, CORE_IO_REGS_LEN)?.to_vec();

            let vram_size = read_le32(contents, pos + CORE_VRAM_SIZE)?;
            let vram_offset = read_le32(contents, pos + CORE_VRAM_OFFSET)?;
            state.vram = slice(contents, vram_offset, vram_size)?.to_vec();

            let oam_size = read_le32(contents, pos + CORE_OAM_SIZE)?;
            if oam_size != OAM_SIZE {
                return Err(invalid(format!("unexpected OAM size {oam_size:#X}")));
            }
            let oam_offset = read_le32(contents, pos + CORE_OAM_OFFSET)?;
            state.oam = slice(contents, oam_offset, oam_size)?.to_vec();
        }
        pos = pos
            .checked_add(length)
            .ok_or_else(|| invalid("block length overflows"))?;
    }

    Ok(state)
}

fn invalid(msg: impl Into<String>) -> GbError {
    GbError::InvalidSaveState(msg.into())
}

fn slice(contents: &[u8], start: usize, len: usize) -> Result<&[u8]> {
    start
        .checked_add(len)
        .and_then(|end| contents.get(start..end))
        .ok_or_else(|| invalid(format!("truncated at {start:#X} (+{len:#X})")))
}

fn read_le32(contents: &[u8], pos: usize) -> Result<usize> {
    let bytes = slice(contents, pos, 4)?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize)
}

use crate::error::{GbError, Result};

/// Start a transfer on the internal clock.
const SC_START_INTERNAL: u8 = 0x81;

/// Serial port (SB/SC) reduced to a debug output channel.
///
/// Test ROMs print by writing a byte to SB and then 0x81 to SC; each such
/// transfer appends SB to `output`. There is no link partner, so any other
/// control value is rejected.
#[derive(Clone, Debug, Default)]
pub(crate) struct Serial {
    sb: u8,
    sc: u8,
    output: Vec<u8>,
}

impl Serial {
    pub(crate) fn read_sb(&self) -> u8 {
        self.sb
    }

    pub(crate) fn write_sb(&mut self, value: u8) {
        self.sb = value;
    }

    /// The transfer completes immediately, so the start bit never reads back set.
    pub(crate) fn read_sc(&self) -> u8 {
        0x7E | self.sc
    }

    pub(crate) fn write_sc(&mut self, value: u8) -> Result<()> {
        if value != SC_START_INTERNAL {
            return Err(GbError::UnsupportedSerialControl { value });
        }
        self.sc = value & !0x80;
        self.output.push(self.sb);
        log::info!("serial: {:?}", self.sb as char);
        Ok(())
    }

    pub(crate) fn output(&self) -> &[u8] {
        &self.output
    }
}

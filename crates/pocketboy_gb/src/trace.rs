//! Per-instruction trace lines in the widely used "gameboy-doctor" layout.

use crate::cpu::{Bus, Cpu};

/// Format the CPU state plus the four bytes at PC, for example
/// `A:01 F:B0 B:00 C:13 D:00 E:D8 H:01 L:4D SP:FFFE PC:0100 PCMEM:00,C3,13,02`.
///
/// Bytes the bus refuses to read print as `??`.
pub fn doctor_line<B: Bus + ?Sized>(cpu: &Cpu, bus: &B) -> String {
    let r = &cpu.regs;
    let pcmem: Vec<String> = (0..4u16)
        .map(|i| match bus.read8(r.pc.wrapping_add(i)) {
            Ok(byte) => format!("{byte:02X}"),
            Err(_) => "??".to_string(),
        })
        .collect();
    format!(
        "A:{:02X} F:{:02X} B:{:02X} C:{:02X} D:{:02X} E:{:02X} H:{:02X} L:{:02X} SP:{:04X} PC:{:04X} PCMEM:{}",
        r.a,
        r.f.bits(),
        r.b,
        r.c,
        r.d,
        r.e,
        r.h,
        r.l,
        r.sp,
        r.pc,
        pcmem.join(","),
    )
}

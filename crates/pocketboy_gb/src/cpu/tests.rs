use super::*;
use crate::error::GbError;

struct TestBus {
    memory: [u8; 0x10000],
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
        }
    }
}

impl Bus for TestBus {
    fn read8(&self, addr: u16) -> Result<u8> {
        Ok(self.memory[addr as usize])
    }

    fn write8(&mut self, addr: u16, value: u8) -> Result<()> {
        self.memory[addr as usize] = value;
        Ok(())
    }
}

/// Opening of the DMG boot ROM: clear VRAM, then fall through.
const BOOT_PREFIX: [u8; 12] = [
    0x31, 0xFE, 0xFF, // ld sp,FFFE
    0xAF, // xor a
    0x21, 0xFF, 0x9F, // ld hl,9FFF
    0x32, // ldd (hl),a
    0xCB, 0x7C, // bit 7,h
    0x20, 0xFB, // jr nz,0007
];

/// CPU at 0x0000 with `program` loaded there and SP in high RAM.
fn setup(program: &[u8]) -> (Cpu, TestBus) {
    let mut bus = TestBus::default();
    bus.memory[..program.len()].copy_from_slice(program);
    let mut cpu = Cpu::new();
    cpu.regs.sp = 0xFFFE;
    (cpu, bus)
}

#[test]
fn dec_b_wraps_from_zero() {
    let (mut cpu, mut bus) = setup(&[0x05]);
    cpu.regs.b = 0x00;
    assert_eq!(cpu.step(&mut bus).unwrap(), 4);
    assert_eq!(cpu.regs.b, 0xFF);
    assert!(!cpu.regs.flag(Flags::Z));
    assert!(cpu.regs.flag(Flags::N));
    assert!(cpu.regs.flag(Flags::H));
}

#[test]
fn dec_b_toggles_zero_flag() {
    let (mut cpu, mut bus) = setup(&[0x05, 0x05]);
    cpu.regs.b = 4;
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.b, 3);
    assert!(!cpu.regs.flag(Flags::Z));
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.b, 2);
    assert!(!cpu.regs.flag(Flags::Z));

    let (mut cpu, mut bus) = setup(&[0x05]);
    cpu.regs.b = 1;
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.b, 0);
    assert!(cpu.regs.flag(Flags::Z));
}

#[test]
fn push_pop_round_trip() {
    // push bc; pop de
    let (mut cpu, mut bus) = setup(&[0xC5, 0xD1]);
    cpu.regs.set_bc(0x1234);
    assert_eq!(cpu.step(&mut bus).unwrap(), 16);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFD], 0x12);
    assert_eq!(bus.memory[0xFFFC], 0x34);
    assert_eq!(cpu.step(&mut bus).unwrap(), 12);
    assert_eq!(cpu.regs.de(), 0x1234);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn pop_af_masks_low_flag_nibble() {
    // push bc; pop af
    let (mut cpu, mut bus) = setup(&[0xC5, 0xF1]);
    cpu.regs.set_bc(0x12FF);
    cpu.step(&mut bus).unwrap();
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.f.bits(), 0xF0);
    assert_eq!(cpu.regs.af(), 0x12F0);
}

#[test]
fn daa_corrects_bcd_results() {
    // A=0x0A with no flags: plain adjust of the low digit.
    let (mut cpu, mut bus) = setup(&[0x27]);
    cpu.regs.a = 0x0A;
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x10);
    assert!(!cpu.regs.flag(Flags::C));
    assert!(!cpu.regs.flag(Flags::Z));

    // 15 + 27 = 42
    let (mut cpu, mut bus) = setup(&[0xC6, 0x27, 0x27]);
    cpu.regs.a = 0x15;
    cpu.step(&mut bus).unwrap();
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x42);
    assert!(!cpu.regs.flag(Flags::C));

    // 99 + 1 = 00 carry 1
    let (mut cpu, mut bus) = setup(&[0xC6, 0x01, 0x27]);
    cpu.regs.a = 0x99;
    cpu.step(&mut bus).unwrap();
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.regs.flag(Flags::C));
    assert!(cpu.regs.flag(Flags::Z));

    // 10 - 1 = 09
    let (mut cpu, mut bus) = setup(&[0xD6, 0x01, 0x27]);
    cpu.regs.a = 0x10;
    cpu.step(&mut bus).unwrap();
    assert!(cpu.regs.flag(Flags::N));
    assert!(cpu.regs.flag(Flags::H));
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x09);
    assert!(cpu.regs.flag(Flags::N));
    assert!(!cpu.regs.flag(Flags::H));
    assert!(!cpu.regs.flag(Flags::C));
}

#[test]
fn bit_7_h() {
    let (mut cpu, mut bus) = setup(&[0xCB, 0x7C, 0xCB, 0x7C]);
    cpu.regs.h = 0x00;
    cpu.regs.set_flag(Flags::C, true);
    assert_eq!(cpu.step(&mut bus).unwrap(), 8);
    assert!(cpu.regs.flag(Flags::Z));
    assert!(!cpu.regs.flag(Flags::N));
    assert!(cpu.regs.flag(Flags::H));
    assert!(cpu.regs.flag(Flags::C), "BIT leaves carry alone");

    cpu.regs.h = 0x80;
    cpu.step(&mut bus).unwrap();
    assert!(!cpu.regs.flag(Flags::Z));
}

#[test]
fn no_instruction_sets_low_flag_bits() {
    let states: [(u8, u8, u16); 3] = [
        (0x00, 0x00, 0x0000),
        (0xFF, 0xF0, 0xFFFF),
        (0x5A, 0x30, 0x8F0F),
    ];

    for prefixed in [false, true] {
        for opcode in 0..=0xFFu8 {
            for &(a, f, pair) in &states {
                let program = if prefixed {
                    [0xCB, opcode, 0x00, 0x00]
                } else {
                    [opcode, 0x00, 0x00, 0x00]
                };
                let (mut cpu, mut bus) = setup(&program);
                // Make sure POP AF sees a full 0xFF flags byte.
                bus.memory[0xFFFE] = 0xFF;
                bus.memory[0xFFFF] = 0x00;
                cpu.regs.a = a;
                cpu.regs.f = Flags::from_bits_truncate(f);
                cpu.regs.set_bc(pair);
                cpu.regs.set_de(pair.rotate_left(4));
                cpu.regs.set_hl(0xC000 | (pair & 0x0FFF));

                let instruction = decode(0, &bus).unwrap();
                if matches!(instruction.op, Op::Invalid(_)) {
                    continue;
                }
                cpu.step(&mut bus).unwrap();
                assert_eq!(
                    cpu.regs.f.bits() & 0x0F,
                    0,
                    "{instruction} set low flag bits"
                );
            }
        }
    }
}

#[test]
fn disassembles_boot_rom_prefix() {
    let (_, bus) = setup(&BOOT_PREFIX);
    let lines: Vec<(u16, String)> = disassemble(&bus, 0, 6)
        .unwrap()
        .into_iter()
        .map(|(addr, instruction)| (addr, instruction.mnemonic()))
        .collect();
    assert_eq!(
        lines,
        vec![
            (0x0000, "ld   sp,FFFE".to_string()),
            (0x0003, "xor  a".to_string()),
            (0x0004, "ld   hl,9FFF".to_string()),
            (0x0007, "ldd  (hl),a".to_string()),
            (0x0008, "bit  7,h".to_string()),
            (0x000A, "jr   nz,0007".to_string()),
        ]
    );
}

#[test]
fn mnemonic_formats() {
    let cases: &[(&[u8], &str)] = &[
        (&[0x00], "nop"),
        (&[0xE2], "ld   (ff00+c),a"),
        (&[0xE0, 0x50], "ld   (ff00+50),a"),
        (&[0xFE, 0x34], "cp   a,34"),
        (&[0x90], "sub  b"),
        (&[0x2A], "ldi  a,(hl)"),
        (&[0xE8, 0xFE], "add  sp,-02"),
        (&[0xF8, 0x05], "ld   hl,sp+05"),
        (&[0xCD, 0x95, 0x00], "call 0095"),
        (&[0xC0], "ret  nz"),
        (&[0xFF], "rst  38"),
        (&[0xCB, 0x11], "rl   c"),
        (&[0xCB, 0xC6], "set  0,(hl)"),
        (&[0xEA, 0x10, 0x99], "ld   (9910),a"),
        (&[0xD3], "db   D3"),
    ];
    for &(bytes, expected) in cases {
        let (_, bus) = setup(bytes);
        let instruction = decode(0, &bus).unwrap();
        assert_eq!(instruction.mnemonic(), expected);
        assert_eq!(instruction.length as usize, bytes.len(), "{expected}");
    }
}

#[test]
fn boot_prefix_clears_vram_loop() {
    let (mut cpu, mut bus) = setup(&BOOT_PREFIX);
    bus.memory[0x8000..0xA000].fill(0xAA);
    while cpu.regs.pc != 0x000C {
        cpu.step(&mut bus).unwrap();
    }
    assert!(bus.memory[0x8000..0xA000].iter().all(|&b| b == 0));
    assert_eq!(cpu.regs.hl(), 0x7FFF);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn call_and_ret_timing() {
    let (mut cpu, mut bus) = setup(&[0xCD, 0x00, 0x02]);
    bus.memory[0x0200] = 0xC9;
    assert_eq!(cpu.step(&mut bus).unwrap(), 24);
    assert_eq!(cpu.regs.pc, 0x0200);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(cpu.step(&mut bus).unwrap(), 16);
    assert_eq!(cpu.regs.pc, 0x0003);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn conditional_jumps_cost_less_when_not_taken() {
    // jr z,+2 with Z clear; jp nz,0000 with Z clear
    let (mut cpu, mut bus) = setup(&[0x28, 0x02, 0xC2, 0x00, 0x00]);
    assert_eq!(cpu.step(&mut bus).unwrap(), 8);
    assert_eq!(cpu.regs.pc, 0x0002);
    assert_eq!(cpu.step(&mut bus).unwrap(), 16);
    assert_eq!(cpu.regs.pc, 0x0000);
}

#[test]
fn add_sp_signed_sets_low_byte_carries() {
    let (mut cpu, mut bus) = setup(&[0xE8, 0x01]);
    cpu.regs.sp = 0x00FF;
    assert_eq!(cpu.step(&mut bus).unwrap(), 16);
    assert_eq!(cpu.regs.sp, 0x0100);
    assert!(cpu.regs.flag(Flags::H));
    assert!(cpu.regs.flag(Flags::C));
    assert!(!cpu.regs.flag(Flags::Z));
    assert!(!cpu.regs.flag(Flags::N));
}

/// One instruction on A and B: program, A, B, F before, then A, B, F after.
type AluCase = (&'static [u8], u8, u8, u8, u8, u8, u8);

fn run_alu_cases(cases: &[AluCase]) {
    for &(program, a, b, f, want_a, want_b, want_f) in cases {
        let (mut cpu, mut bus) = setup(program);
        cpu.regs.a = a;
        cpu.regs.b = b;
        cpu.regs.f = Flags::from_bits_truncate(f);
        cpu.step(&mut bus).unwrap();
        let instruction = decode(0, &bus).unwrap();
        assert_eq!(
            (cpu.regs.a, cpu.regs.b, cpu.regs.f.bits()),
            (want_a, want_b, want_f),
            "{instruction} with a={a:02X} b={b:02X} f={f:02X}"
        );
    }
}

#[test]
fn adc_and_sbc_fold_carry_into_both_carries() {
    run_alu_cases(&[
        // adc a,b
        (&[0x88], 0x0F, 0x00, 0x10, 0x10, 0x00, 0x20),
        (&[0x88], 0xFF, 0x00, 0x10, 0x00, 0x00, 0xB0),
        (&[0x88], 0x0E, 0x01, 0x00, 0x0F, 0x01, 0x00),
        // sbc a,b
        (&[0x98], 0x10, 0x00, 0x10, 0x0F, 0x00, 0x60),
        (&[0x98], 0x00, 0x00, 0x10, 0xFF, 0x00, 0x70),
        (&[0x98], 0x05, 0x05, 0x00, 0x00, 0x05, 0xC0),
        // adc a,n / sbc a,n
        (&[0xCE, 0x0F], 0x00, 0x00, 0x10, 0x10, 0x00, 0x20),
        (&[0xDE, 0x00], 0x00, 0x00, 0x10, 0xFF, 0x00, 0x70),
    ]);
}

#[test]
fn logic_ops_fix_n_h_and_c() {
    run_alu_cases(&[
        // and b sets H
        (&[0xA0], 0xF0, 0x0F, 0xF0, 0x00, 0x0F, 0xA0),
        (&[0xA0], 0xFF, 0x81, 0x00, 0x81, 0x81, 0x20),
        (&[0xE6, 0x81], 0xFF, 0x00, 0x50, 0x81, 0x00, 0x20),
        // or b / xor b clear everything but Z
        (&[0xB0], 0x00, 0x00, 0x70, 0x00, 0x00, 0x80),
        (&[0xB0], 0x12, 0x21, 0x70, 0x33, 0x21, 0x00),
        (&[0xA8], 0x5A, 0x5A, 0x70, 0x00, 0x5A, 0x80),
        (&[0xF6, 0x0F], 0xF0, 0x00, 0x70, 0xFF, 0x00, 0x00),
        (&[0xEE, 0xFF], 0xA5, 0x00, 0x70, 0x5A, 0x00, 0x00),
    ]);
}

#[test]
fn cp_flags_match_sub_and_keep_a() {
    run_alu_cases(&[
        (&[0x90], 0x10, 0x01, 0x00, 0x0F, 0x01, 0x60),
        (&[0xB8], 0x10, 0x01, 0x00, 0x10, 0x01, 0x60),
        (&[0x90], 0x01, 0x02, 0x00, 0xFF, 0x02, 0x70),
        (&[0xB8], 0x01, 0x02, 0x00, 0x01, 0x02, 0x70),
        (&[0xB8], 0x42, 0x42, 0x30, 0x42, 0x42, 0xC0),
        (&[0xFE, 0x43], 0x42, 0x00, 0x00, 0x42, 0x00, 0x70),
    ]);
}

#[test]
fn inc_and_dec_leave_carry_alone() {
    run_alu_cases(&[
        (&[0x04], 0x00, 0xFF, 0x10, 0x00, 0x00, 0xB0),
        (&[0x04], 0x00, 0x0F, 0x00, 0x00, 0x10, 0x20),
        (&[0x04], 0x00, 0x41, 0x50, 0x00, 0x42, 0x10),
        (&[0x05], 0x00, 0x01, 0x10, 0x00, 0x00, 0xD0),
        (&[0x05], 0x00, 0x10, 0x00, 0x00, 0x0F, 0x60),
        (&[0x05], 0x00, 0x43, 0x30, 0x00, 0x42, 0x50),
    ]);
}

#[test]
fn accumulator_rotates_clear_zero_but_cb_rotates_set_it() {
    run_alu_cases(&[
        // rlca, rrca, rla, rra
        (&[0x07], 0x80, 0x00, 0x00, 0x01, 0x00, 0x10),
        (&[0x07], 0x00, 0x00, 0x80, 0x00, 0x00, 0x00),
        (&[0x0F], 0x01, 0x00, 0x00, 0x80, 0x00, 0x10),
        (&[0x17], 0x80, 0x00, 0x00, 0x00, 0x00, 0x10),
        (&[0x1F], 0x01, 0x00, 0x10, 0x80, 0x00, 0x10),
        (&[0x1F], 0x01, 0x00, 0xE0, 0x00, 0x00, 0x10),
        // rlc b, rrc b, rl b, rr b
        (&[0xCB, 0x00], 0x00, 0x00, 0x00, 0x00, 0x00, 0x80),
        (&[0xCB, 0x00], 0x00, 0x85, 0x00, 0x00, 0x0B, 0x10),
        (&[0xCB, 0x08], 0x00, 0x01, 0x00, 0x00, 0x80, 0x10),
        (&[0xCB, 0x10], 0x00, 0x80, 0x00, 0x00, 0x00, 0x90),
        (&[0xCB, 0x18], 0x00, 0x01, 0x00, 0x00, 0x00, 0x90),
        // sla b, sra b, srl b
        (&[0xCB, 0x20], 0x00, 0x80, 0x00, 0x00, 0x00, 0x90),
        (&[0xCB, 0x28], 0x00, 0x81, 0x00, 0x00, 0xC0, 0x10),
        (&[0xCB, 0x38], 0x00, 0x01, 0x00, 0x00, 0x00, 0x90),
    ]);
}

#[test]
fn swap_exchanges_nibbles() {
    run_alu_cases(&[
        (&[0xCB, 0x37], 0xA5, 0x00, 0x70, 0x5A, 0x00, 0x00),
        (&[0xCB, 0x30], 0x00, 0x00, 0x70, 0x00, 0x00, 0x80),
        (&[0xCB, 0x30], 0x00, 0xF0, 0x10, 0x00, 0x0F, 0x00),
    ]);
}

#[test]
fn add_hl_carries_from_bits_11_and_15() {
    // (hl, bc, f before, hl after, f after)
    let cases: [(u16, u16, u8, u16, u8); 4] = [
        (0x0FFF, 0x0001, 0x80, 0x1000, 0xA0),
        (0xFFFF, 0x0001, 0x40, 0x0000, 0x30),
        (0x8000, 0x8000, 0x00, 0x0000, 0x10),
        (0x1234, 0x0101, 0xC0, 0x1335, 0x80),
    ];
    for (hl, bc, f, want_hl, want_f) in cases {
        let (mut cpu, mut bus) = setup(&[0x09]);
        cpu.regs.set_hl(hl);
        cpu.regs.set_bc(bc);
        cpu.regs.f = Flags::from_bits_truncate(f);
        assert_eq!(cpu.step(&mut bus).unwrap(), 8);
        assert_eq!(
            (cpu.regs.hl(), cpu.regs.f.bits()),
            (want_hl, want_f),
            "add hl,bc with hl={hl:04X} bc={bc:04X}"
        );
    }
}

#[test]
fn ld_hl_sp_offset_flags() {
    // (sp, e, hl after, f after)
    let cases: [(u16, u8, u16, u8); 4] = [
        (0x00FF, 0x01, 0x0100, 0x30),
        (0x0000, 0xFF, 0xFFFF, 0x00),
        (0xFFF8, 0x08, 0x0000, 0x30),
        (0x1001, 0xFF, 0x1000, 0x30),
    ];
    for (sp, e, want_hl, want_f) in cases {
        let (mut cpu, mut bus) = setup(&[0xF8, e]);
        cpu.regs.sp = sp;
        cpu.regs.f = Flags::from_bits_truncate(0xF0);
        assert_eq!(cpu.step(&mut bus).unwrap(), 12);
        assert_eq!(cpu.regs.sp, sp);
        assert_eq!(
            (cpu.regs.hl(), cpu.regs.f.bits()),
            (want_hl, want_f),
            "ld hl,sp{e:+} with sp={sp:04X}",
            e = e as i8
        );
    }
}

#[test]
fn interrupt_dispatch_pushes_pc_and_jumps_to_vector() {
    let (mut cpu, mut bus) = setup(&[]);
    cpu.regs.pc = 0x1234;
    cpu.ime = true;
    bus.memory[IE_ADDR as usize] = 0x05;
    bus.memory[IF_ADDR as usize] = 0x04;

    assert_eq!(cpu.step(&mut bus).unwrap(), INTERRUPT_CYCLES);
    assert_eq!(cpu.regs.pc, 0x0050);
    assert!(!cpu.ime);
    assert_eq!(bus.memory[IF_ADDR as usize], 0x00);
    assert_eq!(bus.read16(0xFFFC).unwrap(), 0x1234);
}

#[test]
fn interrupt_priority_prefers_lowest_bit() {
    let (mut cpu, mut bus) = setup(&[]);
    cpu.ime = true;
    bus.memory[IE_ADDR as usize] = 0x1F;
    bus.memory[IF_ADDR as usize] = 0x12;
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.pc, 0x0048);
    assert_eq!(bus.memory[IF_ADDR as usize], 0x10);
}

#[test]
fn ei_takes_effect_after_next_instruction() {
    let (mut cpu, mut bus) = setup(&[0xFB, 0x00, 0x00]);
    bus.memory[IE_ADDR as usize] = 0x01;
    bus.memory[IF_ADDR as usize] = 0x01;

    cpu.step(&mut bus).unwrap();
    assert!(!cpu.ime);
    cpu.step(&mut bus).unwrap();
    assert!(cpu.ime);
    assert_eq!(cpu.regs.pc, 0x0002);
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.pc, 0x0040);
}

#[test]
fn di_right_after_ei_wins() {
    let (mut cpu, mut bus) = setup(&[0xFB, 0xF3, 0x00]);
    for _ in 0..3 {
        cpu.step(&mut bus).unwrap();
    }
    assert!(!cpu.ime);
}

#[test]
fn reti_enables_ime_immediately() {
    let (mut cpu, mut bus) = setup(&[0xD9]);
    cpu.regs.sp = 0xFFFC;
    bus.write16(0xFFFC, 0x0150).unwrap();
    assert_eq!(cpu.step(&mut bus).unwrap(), 16);
    assert!(cpu.ime);
    assert_eq!(cpu.regs.pc, 0x0150);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn halt_without_ime_wakes_on_pending_interrupt() {
    let (mut cpu, mut bus) = setup(&[0x76, 0x00]);
    bus.memory[IE_ADDR as usize] = 0x01;

    cpu.step(&mut bus).unwrap();
    assert!(cpu.halted);
    assert_eq!(cpu.step(&mut bus).unwrap(), 4);
    assert!(cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0001);

    bus.memory[IF_ADDR as usize] = 0x01;
    assert_eq!(cpu.step(&mut bus).unwrap(), 4);
    assert!(!cpu.halted);
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.pc, 0x0002, "not serviced with IME clear");
    assert_eq!(bus.memory[IF_ADDR as usize], 0x01);
}

#[test]
fn halt_with_ime_services_interrupt() {
    let (mut cpu, mut bus) = setup(&[0x76]);
    cpu.ime = true;
    bus.memory[IE_ADDR as usize] = 0x04;
    cpu.step(&mut bus).unwrap();
    assert!(cpu.halted);
    bus.memory[IF_ADDR as usize] = 0x04;
    assert_eq!(cpu.step(&mut bus).unwrap(), INTERRUPT_CYCLES);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0050);
    assert_eq!(bus.read16(cpu.regs.sp).unwrap(), 0x0001);
}

#[test]
fn unassigned_opcode_faults_with_report() {
    let (mut cpu, mut bus) = setup(&[0x00, 0xFC]);
    cpu.regs.sp = 0xFFF0;
    bus.write16(0xFFF0, 0xBEEF).unwrap();
    cpu.step(&mut bus).unwrap();

    let err = cpu.step(&mut bus).unwrap_err();
    assert!(matches!(
        err.root(),
        GbError::UnrecognizedOpcode {
            addr: 0x0001,
            opcode: 0xFC
        }
    ));
    let GbError::Fault(fault) = &err else {
        panic!("expected a fault, got {err:?}");
    };
    assert_eq!(fault.pc, 0x0001);
    assert!(fault.registers.contains("sp FFF0"));
    assert_eq!(fault.stack.first(), Some(&(0xFFF0, 0xBEEF)));
    assert!(err.to_string().contains("FFF0=BEEF"));
}

#[test]
fn post_boot_registers() {
    let cpu = Cpu::post_boot();
    assert_eq!(cpu.regs.af(), 0x01B0);
    assert_eq!(cpu.regs.bc(), 0x0013);
    assert_eq!(cpu.regs.de(), 0x00D8);
    assert_eq!(cpu.regs.hl(), 0x014D);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.pc, 0x0100);
}

#[test]
fn doctor_trace_line() {
    let mut bus = TestBus::default();
    bus.memory[0x0100..0x0104].copy_from_slice(&[0x00, 0xC3, 0x13, 0x02]);
    let cpu = Cpu::post_boot();
    assert_eq!(
        crate::trace::doctor_line(&cpu, &bus),
        "A:01 F:B0 B:00 C:13 D:00 E:D8 H:01 L:4D SP:FFFE PC:0100 PCMEM:00,C3,13,02"
    );
}

use super::instruction::AluOp;
use super::{Cpu, Flags};

impl Cpu {
    /// Apply an accumulator ALU operation with `value` as the right operand.
    pub(super) fn alu(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, true),
            AluOp::Sub => self.regs.a = self.alu_sub(value, false),
            AluOp::Sbc => self.regs.a = self.alu_sub(value, true),
            AluOp::And => self.alu_logic(self.regs.a & value, Flags::H),
            AluOp::Xor => self.alu_logic(self.regs.a ^ value, Flags::empty()),
            AluOp::Or => self.alu_logic(self.regs.a | value, Flags::empty()),
            // CP is SUB with the result thrown away.
            AluOp::Cp => {
                self.alu_sub(value, false);
            }
        }
    }

    /// 8-bit ADD/ADC on A. `use_carry` selects ADC.
    fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = u8::from(use_carry && self.regs.flag(Flags::C));

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = a as u16 + value as u16 + carry_in as u16;
        let result = full as u8;

        self.regs.a = result;
        self.regs.f = Flags::empty();
        self.regs.set_flag(Flags::Z, result == 0);
        self.regs.set_flag(Flags::H, half > 0x0F);
        self.regs.set_flag(Flags::C, full > 0xFF);
    }

    /// 8-bit SUB/SBC against A; returns the difference and leaves A alone.
    fn alu_sub(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let carry_in = i16::from(use_carry && self.regs.flag(Flags::C));

        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry_in;
        let full = a as i16 - value as i16 - carry_in;
        let result = full as u8;

        self.regs.f = Flags::N;
        self.regs.set_flag(Flags::Z, result == 0);
        self.regs.set_flag(Flags::H, half < 0);
        self.regs.set_flag(Flags::C, full < 0);
        result
    }

    #[inline]
    fn alu_logic(&mut self, result: u8, extra: Flags) {
        self.regs.a = result;
        self.regs.f = extra;
        self.regs.set_flag(Flags::Z, result == 0);
    }

    /// Decimal adjust A after a BCD addition or subtraction.
    ///
    /// N is kept; H always ends up clear; C reports whether the high
    /// nibble needed correcting.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.regs.flag(Flags::C) { 0x60 } else { 0x00 };
        if self.regs.flag(Flags::H) {
            adjust |= 0x06;
        }

        if !self.regs.flag(Flags::N) {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.regs.set_flag(Flags::C, adjust >= 0x60);
        self.regs.set_flag(Flags::H, false);
        self.regs.set_flag(Flags::Z, a == 0);
        self.regs.a = a;
    }

    /// INC r / INC (HL). C is untouched.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.regs.set_flag(Flags::Z, result == 0);
        self.regs.set_flag(Flags::N, false);
        self.regs.set_flag(Flags::H, (value & 0x0F) == 0x0F);
        result
    }

    /// DEC r / DEC (HL). C is untouched.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.regs.set_flag(Flags::Z, result == 0);
        self.regs.set_flag(Flags::N, true);
        self.regs.set_flag(Flags::H, (value & 0x0F) == 0);
        result
    }

    /// `ADD HL,rr`: carries out of bits 11 and 15, Z untouched.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let result = hl.wrapping_add(value);

        self.regs.set_flag(Flags::N, false);
        self.regs.set_flag(Flags::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.regs.set_flag(Flags::C, hl as u32 + value as u32 > 0xFFFF);

        self.regs.set_hl(result);
    }

    /// SP plus a signed byte, shared by `ADD SP,e` and `LD HL,SP+e`.
    ///
    /// H and C come from the unsigned low-byte addition; Z and N are cleared.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, offset: i8) -> u16 {
        let offset = offset as i16 as u16;
        self.regs.f = Flags::empty();
        self.regs.set_flag(Flags::H, (base & 0x000F) + (offset & 0x000F) > 0x000F);
        self.regs.set_flag(Flags::C, (base & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        base.wrapping_add(offset)
    }

    /// Accumulator rotates (RLCA/RRCA/RLA/RRA). Z is always cleared.
    pub(super) fn alu_rotate_a(&mut self, left: bool, through_carry: bool) {
        let a = self.regs.a;
        let carry_in = self.regs.flag(Flags::C);
        let (result, carry_out) = if left {
            let bit0 = if through_carry { carry_in as u8 } else { a >> 7 };
            ((a << 1) | bit0, a & 0x80 != 0)
        } else {
            let bit7 = if through_carry { (carry_in as u8) << 7 } else { a << 7 };
            ((a >> 1) | bit7, a & 0x01 != 0)
        };
        self.regs.a = result;
        self.regs.f = Flags::empty();
        self.regs.set_flag(Flags::C, carry_out);
    }
}

//! ADD/SUB/MUL/DIV/ADDI/SUBI and the EQ/LT/LE/GT/GE comparisons
//!
//! Integer arithmetic is 16-bit signed with wraparound on overflow
//! (`spec.md` §3); ordering compares the integer payload unconditionally,
//! even for non-`Int` operands (`spec.md` §7 "Type mismatch on arith/cmp").

use super::Interpreter;
use crate::platform::Platform;
use crate::value::Value;

impl<'a, P: Platform> Interpreter<'a, P> {
    pub(super) fn op_binary_arith(&mut self, a: u8, f: fn(i16, i16) -> i16) {
        let lhs = self.reg(a).as_int();
        let rhs = self.reg(a + 1).as_int();
        self.set_reg(a, Value::Int(f(lhs, rhs)));
    }

    pub(super) fn op_add(&mut self, a: u8) {
        self.op_binary_arith(a, i16::wrapping_add);
    }

    pub(super) fn op_sub(&mut self, a: u8) {
        self.op_binary_arith(a, i16::wrapping_sub);
    }

    pub(super) fn op_mul(&mut self, a: u8) {
        self.op_binary_arith(a, i16::wrapping_mul);
    }

    pub(super) fn op_div(&mut self, a: u8, pc_before: usize) {
        let lhs = self.reg(a).as_int();
        let rhs = self.reg(a + 1).as_int();
        if rhs == 0 {
            self.log_div_by_zero(pc_before);
            self.set_reg(a, Value::Int(0));
        } else {
            self.set_reg(a, Value::Int(lhs.wrapping_div(rhs)));
        }
    }

    pub(super) fn op_addi(&mut self, a: u8, imm: u8) {
        let lhs = self.reg(a).as_int();
        self.set_reg(a, Value::Int(lhs.wrapping_add(imm as i16)));
    }

    pub(super) fn op_subi(&mut self, a: u8, imm: u8) {
        let lhs = self.reg(a).as_int();
        self.set_reg(a, Value::Int(lhs.wrapping_sub(imm as i16)));
    }

    pub(super) fn op_eq(&mut self, a: u8) {
        let equal = self.reg(a) == self.reg(a + 1);
        self.set_reg(a, bool_value(equal));
    }

    pub(super) fn op_lt(&mut self, a: u8) {
        self.op_compare(a, |l, r| l < r);
    }

    pub(super) fn op_le(&mut self, a: u8) {
        self.op_compare(a, |l, r| l <= r);
    }

    pub(super) fn op_gt(&mut self, a: u8) {
        self.op_compare(a, |l, r| l > r);
    }

    pub(super) fn op_ge(&mut self, a: u8) {
        self.op_compare(a, |l, r| l >= r);
    }

    fn op_compare(&mut self, a: u8, f: fn(i16, i16) -> bool) {
        let lhs = self.reg(a).as_int();
        let rhs = self.reg(a + 1).as_int();
        self.set_reg(a, bool_value(f(lhs, rhs)));
    }
}

const fn bool_value(b: bool) -> Value {
    if b {
        Value::True
    } else {
        Value::False
    }
}

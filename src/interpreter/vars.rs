//! GETIV/SETIV/GETCONST/SETCONST

use super::Interpreter;
use crate::platform::Platform;

impl<'a, P: Platform> Interpreter<'a, P> {
    /// `GETIV A, B`: `R[A] ← ivars[B]`.
    pub(super) fn op_getiv(&mut self, a: u8, b: u8) {
        let value = self.ivars.get(b);
        self.set_reg(a, value);
    }

    /// `SETIV A, B`: `ivars[B] ← R[A]`.
    pub(super) fn op_setiv(&mut self, a: u8, b: u8) {
        let value = self.reg(a);
        self.ivars.set(b, value);
    }

    /// `GETCONST A, B`: `R[A] ← consts[B]`.
    pub(super) fn op_getconst(&mut self, a: u8, b: u8) {
        let value = self.consts.get(b);
        self.set_reg(a, value);
    }

    /// `SETCONST A, B`: `consts[B] ← R[A]`.
    pub(super) fn op_setconst(&mut self, a: u8, b: u8) {
        let value = self.reg(a);
        self.consts.set(b, value);
    }
}

//! ARRAY/AREF/ASET/GETIDX/SETIDX

use super::Interpreter;
use crate::platform::Platform;
use crate::value::Value;

impl<'a, P: Platform> Interpreter<'a, P> {
    /// `ARRAY A, B`: allocate a new array, copy `R[A..=A+B]` into it, store
    /// the array handle in `R[A]`.
    pub(super) fn op_array(&mut self, a: u8, b: u8) {
        let count = (b as usize + 1).min(crate::consts::MAX_ARRAY_LEN);
        let mut values = [Value::Nil; crate::consts::MAX_ARRAY_LEN];
        for (i, slot) in values.iter_mut().take(count).enumerate() {
            *slot = self.reg(a + i as u8);
        }
        if self.arena.allocated() >= crate::consts::MAX_ARRAYS {
            self.log_arena_exhausted();
        }
        let idx = self.arena.alloc_from(&values[..count]);
        self.set_reg(a, Value::Array(idx));
    }

    /// `AREF A, B, C`: `R[A] ← R[B][C]` if `R[B]` is an array and `C` is
    /// within its live length, else `Nil`.
    pub(super) fn op_aref(&mut self, a: u8, b: u8, c: u8) {
        let result = self
            .reg(b)
            .as_array_index()
            .and_then(|idx| self.arena.get(idx, c as usize))
            .unwrap_or(Value::Nil);
        self.set_reg(a, result);
    }

    /// `ASET A, B, C`: `R[B][C] ← R[A]` if `R[B]` is an array and `C` is
    /// within capacity; extends the live length if `C` is at or past it.
    pub(super) fn op_aset(&mut self, a: u8, b: u8, c: u8) {
        if let Some(idx) = self.reg(b).as_array_index() {
            let value = self.reg(a);
            self.arena.set(idx, c as usize, value);
        }
    }

    /// `GETIDX A`: `R[A] ← R[A][R[A+1].int]`, same checks as `AREF`.
    pub(super) fn op_getidx(&mut self, a: u8) {
        let index = self.reg(a + 1).as_int();
        let result = if index >= 0 {
            self.reg(a)
                .as_array_index()
                .and_then(|idx| self.arena.get(idx, index as usize))
        } else {
            None
        };
        self.set_reg(a, result.unwrap_or(Value::Nil));
    }

    /// `SETIDX A`: `R[A][R[A+1].int] ← R[A+2]`, same checks as `ASET`.
    pub(super) fn op_setidx(&mut self, a: u8) {
        let index = self.reg(a + 1).as_int();
        if index < 0 {
            return;
        }
        if let Some(idx) = self.reg(a).as_array_index() {
            let value = self.reg(a + 2);
            self.arena.set(idx, index as usize, value);
        }
    }
}

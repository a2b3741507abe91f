//! The host-call bridge: `SSEND`/`SEND` resolve a symbol index to a name
//! and dispatch by string compare against a closed table of primitives.
//! `SSEND` and `SEND` are treated identically - the distinction in the
//! original only mattered for a two-stage private/public method lookup
//! this dialect never implements.
//!
//! `SEND base, sym, argc`: the receiver/arguments occupy
//! `R[base..base+argc]`; the result replaces `R[base]`. The `!=`
//! primitive is the one exception - it reads its receiver from
//! `R[base - 1]`, matching the original's `vm->regs[base_reg - 1]`.

use super::Interpreter;
use crate::consts::{DISPLAY_HEIGHT, DISPLAY_WIDTH, EMPTY_TILE, RAND_ADD, RAND_MUL};
use crate::platform::Platform;
use crate::value::Value;

impl<'a, P: Platform> Interpreter<'a, P> {
    pub(super) fn op_send(&mut self, base: u8, sym: u8, argc: u8) {
        let Some(name) = self.symbols.get(sym) else {
            self.log_unknown_symbol_send(sym);
            self.set_reg(base, Value::Nil);
            return;
        };

        let a0 = self.reg(base);
        let a1 = self.reg(base + 1);
        let a2 = self.reg(base + 2);

        let result = match name {
            "read_joypad" => Value::Int(self.platform.read_joypad()),

            "draw_tile" if argc >= 3 => {
                if in_display_bounds(a0.as_int(), a1.as_int()) {
                    self.platform.draw_tile(a0.as_int(), a1.as_int(), a2.as_int());
                }
                Value::Nil
            }

            "clear_tile" if argc >= 2 => {
                if in_display_bounds(a0.as_int(), a1.as_int()) {
                    self.platform.draw_tile(a0.as_int(), a1.as_int(), EMPTY_TILE);
                }
                Value::Nil
            }

            "wait_vbl" => {
                self.platform.wait_vbl();
                Value::Nil
            }

            "rand" if argc >= 1 => Value::Int(self.next_rand(a0.as_int())),

            "game_over" if argc >= 1 => self.platform.game_over(a0.as_int()),

            "puts" | "p" if argc >= 1 => {
                tracing::info!(value = %a0.display_with(&self.symbols), primitive = name, "host print");
                Value::Nil
            }

            "new" if argc >= 1 => {
                if self.arena.allocated() >= crate::consts::MAX_ARRAYS {
                    self.log_arena_exhausted();
                }
                self.arena.alloc_filled(a0.as_int(), Value::Nil).map_or(Value::Nil, Value::Array)
            }

            "!=" if argc >= 1 => {
                let receiver = self.reg(base.wrapping_sub(1));
                if receiver == a0 {
                    Value::False
                } else {
                    Value::True
                }
            }

            _ => {
                self.log_unknown_send(name);
                Value::Nil
            }
        };

        self.set_reg(base, result);
    }

    fn next_rand(&mut self, max: i16) -> i16 {
        self.rand_seed = self.rand_seed.wrapping_mul(RAND_MUL).wrapping_add(RAND_ADD);
        if max <= 0 {
            return 0;
        }
        (self.rand_seed % max as u16) as i16
    }
}

/// `draw_tile`/`clear_tile` are a no-op outside the display grid, matching
/// the original's `gb_draw_tile` bound check.
fn in_display_bounds(x: i16, y: i16) -> bool {
    (0..DISPLAY_WIDTH).contains(&x) && (0..DISPLAY_HEIGHT).contains(&y)
}

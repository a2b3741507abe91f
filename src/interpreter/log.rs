//! Structured logging for every condition `spec.md` §7 requires to be
//! "logged through the host logger". Library code never prints directly;
//! a `tracing` subscriber installed by the embedding binary is the single
//! line-oriented sink `spec.md` §6 describes.

use tracing::{debug, error, trace, warn};

use super::Interpreter;
use crate::platform::Platform;

impl<'a, P: Platform> Interpreter<'a, P> {
    pub(super) fn log_instruction(&self, pc: usize, opcode: u8) {
        trace!(pc, opcode = format_args!("0x{opcode:02X}"), "dispatch");
    }

    pub(super) fn log_opcode_out_of_range(&self, pc: usize, opcode: u8) {
        error!(pc, opcode = format_args!("0x{opcode:02X}"), "opcode out of range; halting");
    }

    pub(super) fn log_unknown_opcode(&self, pc: usize, opcode: u8) {
        error!(pc, opcode = format_args!("0x{opcode:02X}"), "unrecognised opcode; halting");
    }

    pub(super) fn log_div_by_zero(&self, pc: usize) {
        warn!(pc, "division by zero; substituting 0");
    }

    pub(super) fn log_arena_exhausted(&self) {
        warn!("array arena exhausted; aliasing array 0");
    }

    pub(super) fn log_unknown_send(&self, name: &str) {
        debug!(name, "unhandled send, treated as nil-returning user method");
    }

    pub(super) fn log_unknown_symbol_send(&self, idx: u8) {
        debug!(idx, "send to out-of-range symbol index");
    }
}

//! The decode/execute loop
//!
//! Each step decodes one opcode byte, executes it, and advances `pc`.
//! Bytes above [`crate::consts::MAX_OPCODE`] and in-range bytes with no
//! assigned mnemonic are both fatal: log, stop the VM, result `Nil`.
//!
//! `run` only calls [`Interpreter::is_running`], which folds in `pc <
//! inst_end` - a program that falls off the end of its instruction stream
//! without an explicit `RETURN`/`STOP` (or a `JMP` clamped to exactly
//! `inst_end`) simply stops instead of decoding the pool-count/symbol-table
//! bytes that follow as phantom opcodes.

use super::opcode::Opcode;
use super::Interpreter;
use crate::consts::MAX_OPCODE;
use crate::error::HaltReason;
use crate::platform::Platform;
use crate::value::Value;

/// Run `vm` to completion and return its final result.
pub fn run<P: Platform>(vm: &mut Interpreter<'_, P>) -> Value {
    while vm.is_running() {
        execute_one(vm);
    }
    vm.result()
}

fn execute_one<P: Platform>(vm: &mut Interpreter<'_, P>) {
    let pc = vm.pc;
    let byte = vm.read_u8();

    if byte > MAX_OPCODE {
        vm.log_opcode_out_of_range(pc, byte);
        vm.halt(HaltReason::OpcodeOutOfRange(byte));
        return;
    }

    let Some(op) = Opcode::from_byte(byte) else {
        vm.log_unknown_opcode(pc, byte);
        vm.halt(HaltReason::UnknownOpcode(byte));
        return;
    };

    vm.log_instruction(pc, byte);

    use Opcode::*;
    match op {
        Nop => {}

        Move => {
            let a = vm.read_u8();
            let b = vm.read_u8();
            let value = vm.reg(b);
            vm.set_reg(a, value);
        }

        LoadI0 => load_small_int(vm, 0),
        LoadI1 => load_small_int(vm, 1),
        LoadI2 => load_small_int(vm, 2),
        LoadI3 => load_small_int(vm, 3),
        LoadI4 => load_small_int(vm, 4),
        LoadI5 => load_small_int(vm, 5),
        LoadI6 => load_small_int(vm, 6),
        LoadI7 => load_small_int(vm, 7),
        LoadINeg1 => load_small_int(vm, -1),

        LoadI => {
            let a = vm.read_u8();
            let imm = vm.read_u8();
            vm.set_reg(a, Value::Int(imm as i16));
        }

        LoadINeg => {
            let a = vm.read_u8();
            let imm = vm.read_u8();
            vm.set_reg(a, Value::Int(-(imm as i16)));
        }

        LoadI16 => {
            let a = vm.read_u8();
            let imm = vm.read_i16();
            vm.set_reg(a, Value::Int(imm));
        }

        LoadNil => {
            let a = vm.read_u8();
            vm.set_reg(a, Value::Nil);
        }

        LoadT => {
            let a = vm.read_u8();
            vm.set_reg(a, Value::True);
        }

        LoadF => {
            let a = vm.read_u8();
            vm.set_reg(a, Value::False);
        }

        LoadSym => {
            let a = vm.read_u8();
            let sym = vm.read_u8();
            vm.set_reg(a, Value::Symbol(sym));
        }

        LoadSelf => {
            let a = vm.read_u8();
            vm.set_reg(a, Value::Nil);
        }

        Add => {
            let a = vm.read_u8();
            vm.op_add(a);
        }
        Sub => {
            let a = vm.read_u8();
            vm.op_sub(a);
        }
        Mul => {
            let a = vm.read_u8();
            vm.op_mul(a);
        }
        Div => {
            let a = vm.read_u8();
            vm.op_div(a, pc);
        }
        AddI => {
            let a = vm.read_u8();
            let imm = vm.read_u8();
            vm.op_addi(a, imm);
        }
        SubI => {
            let a = vm.read_u8();
            let imm = vm.read_u8();
            vm.op_subi(a, imm);
        }
        Eq => {
            let a = vm.read_u8();
            vm.op_eq(a);
        }
        Lt => {
            let a = vm.read_u8();
            vm.op_lt(a);
        }
        Le => {
            let a = vm.read_u8();
            vm.op_le(a);
        }
        Gt => {
            let a = vm.read_u8();
            vm.op_gt(a);
        }
        Ge => {
            let a = vm.read_u8();
            vm.op_ge(a);
        }

        Jmp => {
            let offset = vm.read_i16();
            jump(vm, offset);
        }

        JmpIf => {
            let a = vm.read_u8();
            let offset = vm.read_i16();
            if vm.reg(a).is_truthy() {
                jump(vm, offset);
            }
        }

        JmpNot => {
            let a = vm.read_u8();
            let offset = vm.read_i16();
            if !vm.reg(a).is_truthy() {
                jump(vm, offset);
            }
        }

        JmpNil => {
            let a = vm.read_u8();
            let offset = vm.read_i16();
            if matches!(vm.reg(a), Value::Nil) {
                jump(vm, offset);
            }
        }

        Array => {
            let a = vm.read_u8();
            let b = vm.read_u8();
            vm.op_array(a, b);
        }
        Aref => {
            let a = vm.read_u8();
            let b = vm.read_u8();
            let c = vm.read_u8();
            vm.op_aref(a, b, c);
        }
        Aset => {
            let a = vm.read_u8();
            let b = vm.read_u8();
            let c = vm.read_u8();
            vm.op_aset(a, b, c);
        }
        GetIdx => {
            let a = vm.read_u8();
            vm.op_getidx(a);
        }
        SetIdx => {
            let a = vm.read_u8();
            vm.op_setidx(a);
        }

        SSend | Send => {
            let base = vm.read_u8();
            let sym = vm.read_u8();
            let argc = vm.read_u8();
            vm.op_send(base, sym, argc);
        }

        GetIv => {
            let a = vm.read_u8();
            let b = vm.read_u8();
            vm.op_getiv(a, b);
        }
        SetIv => {
            let a = vm.read_u8();
            let b = vm.read_u8();
            vm.op_setiv(a, b);
        }
        GetConst => {
            let a = vm.read_u8();
            let b = vm.read_u8();
            vm.op_getconst(a, b);
        }
        SetConst => {
            let a = vm.read_u8();
            let b = vm.read_u8();
            vm.op_setconst(a, b);
        }

        Enter => {
            // Reserved for future call-frame support; consumes its operand
            // triple (argc/optarg/rest) and otherwise does nothing.
            vm.read_u8();
            vm.read_u8();
            vm.read_u8();
        }

        Return => {
            let a = vm.read_u8();
            let value = vm.reg(a);
            vm.stop(value);
        }

        Stop => {
            vm.halt(HaltReason::Stop);
        }
    }
}

fn load_small_int<P: Platform>(vm: &mut Interpreter<'_, P>, value: i16) {
    let a = vm.read_u8();
    vm.set_reg(a, Value::Int(value));
}

fn jump<P: Platform>(vm: &mut Interpreter<'_, P>, offset: i16) {
    let pc = vm.pc as i64 + offset as i64;
    vm.pc = pc.clamp(0, vm.inst_end as i64) as usize;
}

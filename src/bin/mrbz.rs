//! Embedding harness binary
//!
//! Loads one of two linked-in bytecode programs, runs it to completion
//! against a console-logging [`ConsolePlatform`], and maps the result to a
//! process exit code. The `--program` flag stands in for the two
//! compile-time-selected firmware images the original embeds; selecting
//! between them at runtime is a harness convenience this VM's own
//! bytecode format has no opinion about.

use mrbz_vm::prelude::*;
use std::process::ExitCode;

#[path = "../../demos/test_program.rs"]
mod test_program;
#[path = "../../demos/snake_program.rs"]
mod snake_program;

/// Parse `--program test|snake` or `--program=test|snake` out of the
/// remaining command-line arguments.
fn parse_program_flag(mut args: impl Iterator<Item = String>) -> Option<String> {
    while let Some(arg) = args.next() {
        if let Some(value) = arg.strip_prefix("--program=") {
            return Some(value.to_owned());
        }
        if arg == "--program" {
            return args.next();
        }
    }
    None
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let program = parse_program_flag(std::env::args().skip(1));
    let program = program.as_deref().unwrap_or("test");

    match program {
        "snake" => {
            let bytecode = snake_program::bytes();
            let mut vm = match Interpreter::load(&bytecode, ConsolePlatform::default()) {
                Ok(vm) => vm,
                Err(err) => {
                    tracing::error!(%err, "failed to load snake program");
                    return ExitCode::FAILURE;
                }
            };
            // `game_over` never returns; this call does not either.
            mrbz_vm::interpreter::run(&mut vm);
            unreachable!("snake program always halts via game_over, which diverges")
        }
        _ => {
            let bytecode = test_program::bytes();
            let mut vm = match Interpreter::load(&bytecode, ConsolePlatform::default()) {
                Ok(vm) => vm,
                Err(err) => {
                    tracing::error!(%err, "failed to load test program");
                    return ExitCode::FAILURE;
                }
            };
            let result = mrbz_vm::interpreter::run(&mut vm);
            tracing::info!(%result, "program halted");
            if result == Value::Int(31) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

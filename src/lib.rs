//! Register-based bytecode VM for a reduced mruby-like dialect
//!
//! Loads a RITE-framed bytecode container, parses its header and symbol
//! table, and interprets it against a tagged-value register file with no
//! garbage collector, no user-defined methods, and a fixed table of
//! host-call primitives. See [`interpreter::Interpreter`] for the entry
//! point.

pub mod arena;
pub mod assoc;
pub mod consts;
pub mod error;
pub mod interpreter;
pub mod loader;
pub mod platform;
pub mod symbol;
pub mod value;

/// Commonly used types, for `use mrbz_vm::prelude::*;`.
pub mod prelude {
    pub use crate::error::{HaltReason, LoaderError};
    pub use crate::interpreter::Interpreter;
    pub use crate::platform::{ConsolePlatform, Platform};
    pub use crate::value::Value;
}

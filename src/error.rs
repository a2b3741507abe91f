//! Loader error implementation
//!
//! Runtime anomalies (div-by-zero, arena exhaustion, unknown symbol, unknown
//! primitive, bad opcode) are not modelled as `Result` errors: per the VM's
//! error-handling design they are absorbed by the dispatcher itself (logged,
//! then a safe default substituted). Only malformed bytecode containers -
//! which can never be recovered from once reached - surface as a `LoaderError`.

use std::fmt;
use thiserror::Error;

/// Errors produced while parsing a RITE bytecode container.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The buffer is too short to contain a well-formed prologue, instruction
    /// span, or symbol table at the offset being read.
    #[error("truncated bytecode: needed at least {needed} bytes at offset {offset}, found {available}")]
    Truncated {
        /// Offset the read was attempted at.
        offset: usize,
        /// Bytes required to complete the read.
        needed: usize,
        /// Bytes actually available from `offset`.
        available: usize,
    },
    /// The container declares a non-empty constant pool. This loader only
    /// supports the pool-less encoding compilers targeting this VM emit.
    #[error("unsupported non-empty constant pool: {count} entries")]
    UnsupportedPool {
        /// Declared pool entry count.
        count: u16,
    },
    /// The declared symbol count exceeds the fixed symbol table capacity.
    #[error("too many symbols: bytecode declares {declared}, capacity is {capacity}")]
    TooManySymbols {
        /// Symbol count the container header declares.
        declared: u16,
        /// Fixed symbol table capacity.
        capacity: usize,
    },
}

/// A unified view over why a completed run did not produce a `RETURN`ed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// An opcode byte greater than [`crate::consts::MAX_OPCODE`] was read.
    OpcodeOutOfRange(u8),
    /// A byte inside the recognised range has no assigned mnemonic.
    UnknownOpcode(u8),
    /// A `STOP` instruction was executed.
    Stop,
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpcodeOutOfRange(op) => write!(f, "opcode 0x{op:02X} out of range"),
            Self::UnknownOpcode(op) => write!(f, "unrecognised opcode 0x{op:02X}"),
            Self::Stop => write!(f, "STOP"),
        }
    }
}

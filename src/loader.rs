//! RITE bytecode container parsing
//!
//! Skips the fixed 48-byte prologue (container header, `"MATZ"` compiler
//! identification, `"IREP"` section marker, section size, version, record
//! size, and per-IREP metadata), reads the instruction length, and parses
//! the symbol table that follows the instruction stream. Pool entries are
//! assumed absent: compilers targeting this VM emit no pool, since integer
//! literals are embedded directly in opcodes (see `spec.md` §4.2).

use crate::consts::{ILEN_OFFSET, MAX_SYMBOLS, PROLOGUE_LEN};
use crate::error::LoaderError;
use crate::symbol::SymbolTable;
use tracing::debug;

/// The result of loading a bytecode container: the instruction span and the
/// parsed symbol table, both borrowed from the input buffer.
pub struct Loaded<'a> {
    /// The full bytecode buffer.
    pub bytecode: &'a [u8],
    /// Offset of the first instruction (always [`PROLOGUE_LEN`]).
    pub pc_start: usize,
    /// Offset immediately past the last instruction.
    pub inst_end: usize,
    /// Symbols interned from the container's symbol table.
    pub symbols: SymbolTable<'a>,
}

fn read_u16(buf: &[u8], offset: usize) -> Result<u16, LoaderError> {
    let bytes = buf.get(offset..offset + 2).ok_or(LoaderError::Truncated {
        offset,
        needed: 2,
        available: buf.len().saturating_sub(offset),
    })?;
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}

/// Parse a RITE container and position the instruction span and symbol table.
pub fn load(bytecode: &[u8]) -> Result<Loaded<'_>, LoaderError> {
    if bytecode.len() < PROLOGUE_LEN {
        return Err(LoaderError::Truncated {
            offset: 0,
            needed: PROLOGUE_LEN,
            available: bytecode.len(),
        });
    }

    // Bytes 44..48: ilen (4 bytes, big-endian); only the low 16 bits are used.
    let ilen = read_u16(bytecode, ILEN_OFFSET + 2)? as usize;

    let pc_start = PROLOGUE_LEN;
    let inst_end = pc_start + ilen;
    if inst_end > bytecode.len() {
        return Err(LoaderError::Truncated {
            offset: pc_start,
            needed: ilen,
            available: bytecode.len().saturating_sub(pc_start),
        });
    }

    debug!(ilen, pc_start, inst_end, "parsed instruction span");

    // Immediately past the instructions: a 2-byte pool count, assumed zero.
    let pool_count = read_u16(bytecode, inst_end)?;
    if pool_count != 0 {
        return Err(LoaderError::UnsupportedPool { count: pool_count });
    }

    let symbols = parse_symbols(bytecode, inst_end + 2)?;

    Ok(Loaded {
        bytecode,
        pc_start,
        inst_end,
        symbols,
    })
}

fn parse_symbols(bytecode: &[u8], offset: usize) -> Result<SymbolTable<'_>, LoaderError> {
    let declared = read_u16(bytecode, offset)?;
    if declared as usize > MAX_SYMBOLS {
        return Err(LoaderError::TooManySymbols {
            declared,
            capacity: MAX_SYMBOLS,
        });
    }

    let mut table = SymbolTable::default();
    let mut cursor = offset + 2;

    for i in 0..declared {
        let len = read_u16(bytecode, cursor)? as usize;
        cursor += 2;

        // `len` name bytes plus one trailing NUL.
        let name_bytes = bytecode.get(cursor..cursor + len).ok_or(LoaderError::Truncated {
            offset: cursor,
            needed: len,
            available: bytecode.len().saturating_sub(cursor),
        })?;
        if bytecode.get(cursor + len).is_none() {
            return Err(LoaderError::Truncated {
                offset: cursor + len,
                needed: 1,
                available: 0,
            });
        }

        let name = std::str::from_utf8(name_bytes).unwrap_or("");
        debug!(i, name, "interned symbol");
        table.push(name);

        cursor += len + 1;
    }

    Ok(table)
}

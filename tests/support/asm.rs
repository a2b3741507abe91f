//! A tiny in-memory assembler for building valid RITE containers in tests.
//!
//! This is test-only tooling, not a shipped compiler: the library only
//! ever consumes pre-compiled bytes. Grounded directly in the byte/mnemonic
//! pairing the dispatcher decodes against (`src/interpreter/opcode.rs`).

#![allow(dead_code)]

/// Accumulates instruction bytes and a symbol table, then emits a complete
/// RITE-framed bytecode buffer.
pub struct Assembler {
    body: Vec<u8>,
    symbols: Vec<String>,
}

impl Assembler {
    pub fn new() -> Self {
        Self { body: Vec::new(), symbols: Vec::new() }
    }

    /// Intern `name`, returning its symbol index. Re-interning the same
    /// name returns its existing index, matching a real compiler's pool
    /// dedup.
    pub fn symbol(&mut self, name: &str) -> u8 {
        if let Some(idx) = self.symbols.iter().position(|s| s == name) {
            return idx as u8;
        }
        self.symbols.push(name.to_owned());
        (self.symbols.len() - 1) as u8
    }

    fn op(&mut self, byte: u8, operands: &[u8]) -> &mut Self {
        self.body.push(byte);
        self.body.extend_from_slice(operands);
        self
    }

    pub fn nop(&mut self) -> &mut Self {
        self.op(0x00, &[])
    }
    pub fn mov(&mut self, a: u8, b: u8) -> &mut Self {
        self.op(0x01, &[a, b])
    }
    pub fn loadi_small(&mut self, a: u8, n: i8) -> &mut Self {
        let byte = match n {
            0 => 0x02,
            1 => 0x03,
            2 => 0x04,
            3 => 0x05,
            4 => 0x06,
            5 => 0x07,
            6 => 0x08,
            7 => 0x09,
            -1 => 0x0a,
            _ => panic!("loadi_small out of range: {n}"),
        };
        self.op(byte, &[a])
    }
    pub fn loadi(&mut self, a: u8, imm: u8) -> &mut Self {
        self.op(0x0b, &[a, imm])
    }
    pub fn loadineg(&mut self, a: u8, imm: u8) -> &mut Self {
        self.op(0x0c, &[a, imm])
    }
    pub fn loadi16(&mut self, a: u8, imm: i16) -> &mut Self {
        let bytes = imm.to_be_bytes();
        self.op(0x0d, &[a, bytes[0], bytes[1]])
    }
    pub fn loadnil(&mut self, a: u8) -> &mut Self {
        self.op(0x0e, &[a])
    }
    pub fn loadt(&mut self, a: u8) -> &mut Self {
        self.op(0x0f, &[a])
    }
    pub fn loadf(&mut self, a: u8) -> &mut Self {
        self.op(0x10, &[a])
    }
    pub fn loadsym(&mut self, a: u8, sym: u8) -> &mut Self {
        self.op(0x11, &[a, sym])
    }
    pub fn loadself(&mut self, a: u8) -> &mut Self {
        self.op(0x12, &[a])
    }
    pub fn add(&mut self, a: u8) -> &mut Self {
        self.op(0x13, &[a])
    }
    pub fn sub(&mut self, a: u8) -> &mut Self {
        self.op(0x14, &[a])
    }
    pub fn mul(&mut self, a: u8) -> &mut Self {
        self.op(0x15, &[a])
    }
    pub fn div(&mut self, a: u8) -> &mut Self {
        self.op(0x16, &[a])
    }
    pub fn addi(&mut self, a: u8, imm: u8) -> &mut Self {
        self.op(0x17, &[a, imm])
    }
    pub fn subi(&mut self, a: u8, imm: u8) -> &mut Self {
        self.op(0x18, &[a, imm])
    }
    pub fn eq(&mut self, a: u8) -> &mut Self {
        self.op(0x19, &[a])
    }
    pub fn lt(&mut self, a: u8) -> &mut Self {
        self.op(0x1a, &[a])
    }
    pub fn le(&mut self, a: u8) -> &mut Self {
        self.op(0x1b, &[a])
    }
    pub fn gt(&mut self, a: u8) -> &mut Self {
        self.op(0x1c, &[a])
    }
    pub fn ge(&mut self, a: u8) -> &mut Self {
        self.op(0x1d, &[a])
    }
    pub fn jmp(&mut self, offset: i16) -> &mut Self {
        let bytes = offset.to_be_bytes();
        self.op(0x1e, &bytes)
    }
    pub fn jmpif(&mut self, a: u8, offset: i16) -> &mut Self {
        let bytes = offset.to_be_bytes();
        self.op(0x1f, &[a, bytes[0], bytes[1]])
    }
    pub fn jmpnot(&mut self, a: u8, offset: i16) -> &mut Self {
        let bytes = offset.to_be_bytes();
        self.op(0x20, &[a, bytes[0], bytes[1]])
    }
    pub fn jmpnil(&mut self, a: u8, offset: i16) -> &mut Self {
        let bytes = offset.to_be_bytes();
        self.op(0x21, &[a, bytes[0], bytes[1]])
    }
    pub fn array(&mut self, a: u8, b: u8) -> &mut Self {
        self.op(0x22, &[a, b])
    }
    pub fn aref(&mut self, a: u8, b: u8, c: u8) -> &mut Self {
        self.op(0x23, &[a, b, c])
    }
    pub fn aset(&mut self, a: u8, b: u8, c: u8) -> &mut Self {
        self.op(0x24, &[a, b, c])
    }
    pub fn getidx(&mut self, a: u8) -> &mut Self {
        self.op(0x25, &[a])
    }
    pub fn setidx(&mut self, a: u8) -> &mut Self {
        self.op(0x26, &[a])
    }
    pub fn ssend(&mut self, base: u8, sym: u8, argc: u8) -> &mut Self {
        self.op(0x27, &[base, sym, argc])
    }
    pub fn send(&mut self, base: u8, sym: u8, argc: u8) -> &mut Self {
        self.op(0x28, &[base, sym, argc])
    }
    pub fn getiv(&mut self, a: u8, b: u8) -> &mut Self {
        self.op(0x29, &[a, b])
    }
    pub fn setiv(&mut self, a: u8, b: u8) -> &mut Self {
        self.op(0x2a, &[a, b])
    }
    pub fn getconst(&mut self, a: u8, b: u8) -> &mut Self {
        self.op(0x2b, &[a, b])
    }
    pub fn setconst(&mut self, a: u8, b: u8) -> &mut Self {
        self.op(0x2c, &[a, b])
    }
    pub fn enter(&mut self, argc: u8, optarg: u8, rest: u8) -> &mut Self {
        self.op(0x2d, &[argc, optarg, rest])
    }
    pub fn ret(&mut self, a: u8) -> &mut Self {
        self.op(0x2e, &[a])
    }
    pub fn stop(&mut self) -> &mut Self {
        self.op(0x2f, &[])
    }

    /// Append a raw byte, for constructing decode-failure fixtures
    /// (unassigned or out-of-range opcodes).
    pub fn raw(&mut self, byte: u8) -> &mut Self {
        self.body.push(byte);
        self
    }

    /// Emit the complete RITE container: 48-byte prologue, instructions,
    /// a zero pool count, then the symbol table.
    pub fn finish(&self) -> Vec<u8> {
        let mut bc = vec![0u8; 48];
        let ilen = self.body.len() as u32;
        bc[44..48].copy_from_slice(&ilen.to_be_bytes());
        bc.extend_from_slice(&self.body);
        bc.extend_from_slice(&0u16.to_be_bytes()); // pool count
        bc.extend_from_slice(&(self.symbols.len() as u16).to_be_bytes());
        for name in &self.symbols {
            bc.extend_from_slice(&(name.len() as u16).to_be_bytes());
            bc.extend_from_slice(name.as_bytes());
            bc.push(0);
        }
        bc
    }
}

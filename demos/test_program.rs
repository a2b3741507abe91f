//! The "test" harness program: loads `31` into `R0` and returns it.
//!
//! Hand-assembled from the same mnemonic/byte pairing the dispatcher
//! recognises (`src/interpreter/opcode.rs`), kept as auditable source
//! rather than a vendored binary fixture.

fn container(body: &[u8]) -> Vec<u8> {
    let mut bc = vec![0u8; 48];
    let ilen = body.len() as u32;
    bc[44..48].copy_from_slice(&ilen.to_be_bytes());
    bc.extend_from_slice(body);
    bc.extend_from_slice(&0u16.to_be_bytes()); // pool count
    bc.extend_from_slice(&0u16.to_be_bytes()); // symbol count
    bc
}

/// `LOADI R0, 31 ; RETURN R0`
pub fn bytes() -> Vec<u8> {
    container(&[0x0b, 0, 31, 0x2e, 0])
}

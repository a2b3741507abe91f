//! The "snake" harness program: draws one tile, waits a frame, then calls
//! `game_over` - which never returns. Exercises the host bridge without
//! carrying the full game's loop logic, which belongs to a compiler this
//! crate deliberately doesn't have.

fn container(body: &[u8], symbols: &[&str]) -> Vec<u8> {
    let mut bc = vec![0u8; 48];
    let ilen = body.len() as u32;
    bc[44..48].copy_from_slice(&ilen.to_be_bytes());
    bc.extend_from_slice(body);
    bc.extend_from_slice(&0u16.to_be_bytes()); // pool count
    bc.extend_from_slice(&(symbols.len() as u16).to_be_bytes());
    for s in symbols {
        bc.extend_from_slice(&(s.len() as u16).to_be_bytes());
        bc.extend_from_slice(s.as_bytes());
        bc.push(0);
    }
    bc
}

/// Symbols, in declaration order: `draw_tile`, `wait_vbl`, `game_over`.
pub fn bytes() -> Vec<u8> {
    let body = vec![
        0x0b, 0, 5, // LOADI R0, 5   (x)
        0x0b, 1, 5, // LOADI R1, 5   (y)
        0x0b, 2, 1, // LOADI R2, 1   (head tile)
        0x27, 0, 0, 3, // SSEND R0, sym(draw_tile), 3
        0x0b, 0, 0, // LOADI R0, 0
        0x27, 0, 1, 0, // SSEND R0, sym(wait_vbl), 0
        0x0b, 0, 0, // LOADI R0, 0   (score)
        0x27, 0, 2, 1, // SSEND R0, sym(game_over), 1
    ];
    container(&body, &["draw_tile", "wait_vbl", "game_over"])
}

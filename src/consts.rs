//! VM capacities and fixed parameters

/// Number of general-purpose registers in the register file.
pub const REG_COUNT: usize = 32;

/// Number of pre-allocated arrays in the arena.
pub const MAX_ARRAYS: usize = 8;

/// Maximum element count of a single array.
pub const MAX_ARRAY_LEN: usize = 100;

/// Maximum number of interned symbols.
pub const MAX_SYMBOLS: usize = 32;

/// Maximum number of instance variables.
pub const MAX_IVARS: usize = 16;

/// Maximum number of constants.
pub const MAX_CONSTS: usize = 16;

/// Byte length of the fixed RITE container prologue, ending at the first instruction.
pub const PROLOGUE_LEN: usize = 48;

/// Offset of the 4-byte big-endian `ilen` field within the prologue.
pub const ILEN_OFFSET: usize = 44;

/// Highest opcode byte recognised by the dispatcher; anything above this is a decode fatal.
pub const MAX_OPCODE: u8 = 0x69;

/// Initial seed for the linear-congruential `rand` primitive.
pub const DEFAULT_RAND_SEED: u16 = 12345;

/// LCG multiplier used by `rand`.
pub const RAND_MUL: u16 = 25173;

/// LCG increment used by `rand`.
pub const RAND_ADD: u16 = 13849;

/// Width of the tile display, in cells.
pub const DISPLAY_WIDTH: i16 = 20;

/// Height of the tile display, in cells.
pub const DISPLAY_HEIGHT: i16 = 18;

/// Tile id used to blank a cell.
pub const EMPTY_TILE: i16 = 128;

//! VM parameters

/* FLAG AND REGISTER TYPES */

/// Number of general-purpose registers, R0..R7.
pub const REG_COUNT: usize = 8;

/* END */

/* MEMORY TYPES */

/// Number of addressable words in memory.
pub const MEM_SIZE: usize = 32768;

/// All arithmetic on words that can overflow is reduced modulo this value.
pub const MODULO: u32 = 32768;

/// First word value that denotes a register operand (R0).
pub const REG_OPERAND_BASE: u16 = 32768;

/// Last word value that denotes a register operand (R7).
pub const REG_OPERAND_MAX: u16 = REG_OPERAND_BASE + REG_COUNT as u16 - 1;

/// Default cap on stack growth, in words. Generous relative to any call chain
/// a conforming Synacor Challenge program is known to produce; exists so a
/// pathological program can't grow the stack without bound.
pub const DEFAULT_STACK_LIMIT: usize = 1 << 20;

/* END */

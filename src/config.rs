//! VM construction parameters.

use crate::consts::DEFAULT_STACK_LIMIT;

/// Parameters fixed for the lifetime of a [`crate::interpreter::Vm`],
/// supplied once at construction: the same "small parameters struct handed
/// to the interpreter up front" shape used elsewhere for per-run settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VmConfig {
    /// When `true`, a malformed operand or a failing stack operation halts
    /// the VM with the matching fault status. When `false`, the offending
    /// instruction is skipped (the PC advances by its full width) and
    /// execution continues.
    pub strict_on_bad_operand: bool,
    /// Upper bound on stack depth, in words. Exceeding it is reported the
    /// same way as an allocation failure.
    pub stack_limit: usize,
}

impl VmConfig {
    /// Strict mode with the default stack limit.
    pub const fn strict() -> Self {
        Self {
            strict_on_bad_operand: true,
            stack_limit: DEFAULT_STACK_LIMIT,
        }
    }

    /// Lenient mode with the default stack limit.
    pub const fn lenient() -> Self {
        Self {
            strict_on_bad_operand: false,
            stack_limit: DEFAULT_STACK_LIMIT,
        }
    }
}

impl Default for VmConfig {
    /// Defaults to strict mode, since silently skipping malformed
    /// instructions is the surprising behavior and should be opted into.
    fn default() -> Self {
        Self::strict()
    }
}

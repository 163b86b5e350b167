//! Runtime interpreter error implementation

use std::io;
use thiserror::Error;

/// Architectural fault kinds the VM can report.
///
/// Every variant corresponds to one of the failure conditions the
/// architecture defines; there is no catch-all. `Display` (derived by
/// [`thiserror::Error`]) is the human-readable message surfaced by
/// `Vm::error_message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VmError {
    /// Popped from an empty stack. Part of the architecture's stack-level
    /// fault taxonomy; the core itself always surfaces a pop fault through
    /// a handler as [`VmError::StackPopFail`] instead.
    #[error("stack is empty")]
    StackEmpty,
    /// Stack growth failed, or the configured stack limit was reached. Part
    /// of the architecture's stack-level fault taxonomy; the core itself
    /// always surfaces a push fault through a handler as
    /// [`VmError::StackPushFail`] instead.
    #[error("memory allocation in stack has failed")]
    StackAllocationFail,
    /// A push could not proceed because the stack is in a failed state.
    #[error("stack push failed in vm")]
    StackPushFail,
    /// A pop could not proceed because the stack is in a failed state.
    #[error("stack pop failed in vm")]
    StackPopFail,
    /// The opcode at the program counter is not one of the 22 defined opcodes.
    #[error("invalid instruction for vm")]
    InvalidInstruction,
    /// The program binary could not be opened or read.
    #[error("load binary has failed in vm")]
    LoadFail,
    /// The program binary is larger than addressable memory.
    #[error("memory overflow happened in vm")]
    MemoryOverflow,
    /// An operand required to be a register wasn't in `32768..=32775`.
    #[error("invalid register index in vm")]
    InvalidReg,
    /// An operand required to be a value was malformed (`> 32775`).
    #[error("invalid number value in vm")]
    InvalidNum,
    /// `mod` was asked to divide by zero.
    #[error("division by zero in vm")]
    DivideByZero,
}

impl VmError {
    /// `true` for faults that arise from a malformed operand (`invalid-reg`,
    /// `invalid-num`) or a failing stack operation: the ones gated by the
    /// strict/lenient policy in [`crate::config::VmConfig`].
    pub const fn is_recoverable_by_lenient_mode(&self) -> bool {
        matches!(
            self,
            Self::InvalidReg
                | Self::InvalidNum
                | Self::StackPushFail
                | Self::StackPopFail
                | Self::DivideByZero
        )
    }
}

/// I/O-level failure wrapping, used only by the loader and the CLI driver;
/// the interpreter core itself never performs file I/O.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The binary could not be opened or read.
    #[error("load binary has failed in vm: {0}")]
    Io(#[from] io::Error),
    /// The binary is larger than addressable memory.
    #[error("memory overflow happened in vm")]
    Overflow,
}

impl From<LoadError> for VmError {
    fn from(e: LoadError) -> Self {
        match e {
            LoadError::Io(_) => VmError::LoadFail,
            LoadError::Overflow => VmError::MemoryOverflow,
        }
    }
}

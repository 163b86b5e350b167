//! Exposed constructors API for the [`Vm`]

use super::Vm;
use crate::config::VmConfig;
use crate::memory::{Memory, Registers};
use crate::stack::Stack;

impl<In, Out> Vm<In, Out> {
    /// Constructs a VM wired to `input`/`output`, using `config` for the
    /// strict/lenient policy and stack cap. Memory and registers start
    /// zeroed, the stack starts empty, and the PC starts at 0.
    pub fn new(config: VmConfig, input: In, output: Out) -> Self {
        Self {
            memory: Memory::new(),
            registers: Registers::new(),
            stack: Stack::new(config.stack_limit),
            pc: 0,
            halted: false,
            status: None,
            config,
            input,
            output,
        }
    }
}

impl<In, Out> Vm<In, Out>
where
    In: Default,
    Out: Default,
{
    /// Constructs a VM with default I/O streams, useful for tests that
    /// never exercise `in`/`out`.
    pub fn with_config(config: VmConfig) -> Self {
        Self::new(config, In::default(), Out::default())
    }
}

impl<In, Out> Default for Vm<In, Out>
where
    In: Default,
    Out: Default,
{
    fn default() -> Self {
        Self::with_config(VmConfig::default())
    }
}

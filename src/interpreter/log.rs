//! Per-instruction tracing.

use super::Vm;
use crate::opcode::Opcode;
use tracing::trace;

impl<In, Out> Vm<In, Out> {
    /// Emits a `trace`-level event for the instruction about to dispatch.
    /// Cheap enough to leave unconditionally in the hot loop: `tracing`
    /// filters out disabled levels before formatting any fields.
    pub(super) fn trace_instruction(&self, opcode: Opcode) {
        trace!(pc = self.pc, ?opcode, "dispatch");
    }
}

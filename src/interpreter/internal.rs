use super::Vm;
use crate::error::VmError;
use crate::operand::RegisterId;
use tracing::warn;

impl<In, Out> Vm<In, Out> {
    /// Advances the PC by `width` words. Used by every handler that doesn't
    /// jump.
    pub(super) fn advance_pc(&mut self, width: u16) {
        self.pc = self.pc.wrapping_add(width);
    }

    /// Sets the PC directly. Used by `jmp`, `jt`, `jf`, `call`, `ret`.
    pub(super) fn set_pc(&mut self, target: u16) {
        self.pc = target;
    }

    /// Applies the strict/lenient fault policy to a fault raised while
    /// decoding or executing the instruction at the current PC, which
    /// occupies `width` words.
    ///
    /// Only faults where [`VmError::is_recoverable_by_lenient_mode`] holds
    /// are ever skipped; `invalid-instruction`, `load-fail`, and
    /// `memory-overflow` always halt regardless of the configured policy.
    /// Otherwise: strict latches `status` to `fault` and halts; lenient
    /// skips the whole instruction (advances by `width`) and leaves
    /// `status` alone.
    pub(super) fn handle_fault(&mut self, fault: VmError, width: u16) {
        let lenient_skip = !self.config.strict_on_bad_operand && fault.is_recoverable_by_lenient_mode();

        if lenient_skip {
            self.advance_pc(width);
        } else {
            warn!(?fault, pc = self.pc, "vm fault, halting");
            self.status = Some(fault);
            self.halted = true;
        }
    }

    /// Classifies `w` as a destination register, or raises `InvalidReg`.
    pub(super) fn classify_register_operand(&self, w: u16) -> Result<RegisterId, VmError> {
        crate::operand::classify_register(w).ok_or(VmError::InvalidReg)
    }

    /// Resolves `w` to a number, or raises `InvalidNum`.
    pub(super) fn resolve_number_operand(&self, w: u16) -> Result<u16, VmError> {
        crate::operand::resolve_number(self.registers.as_array(), w).ok_or(VmError::InvalidNum)
    }
}

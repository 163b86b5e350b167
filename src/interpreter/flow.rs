//! Control-flow and stack handlers: `halt`, `jmp`, `jt`, `jf`, `call`, `ret`,
//! `push`, `pop`, `noop`.

use super::Vm;
use crate::error::VmError;

impl<In, Out> Vm<In, Out> {
    pub(super) fn op_halt(&mut self) {
        self.halted = true;
        self.status = None;
    }

    pub(super) fn op_noop(&mut self) {
        self.advance_pc(1);
    }

    pub(super) fn op_jmp(&mut self, a: u16) -> Result<(), VmError> {
        let target = self.resolve_number_operand(a)?;
        self.set_pc(target);
        Ok(())
    }

    pub(super) fn op_jt(&mut self, a: u16, b: u16) -> Result<(), VmError> {
        let a = self.resolve_number_operand(a)?;
        let target = self.resolve_number_operand(b)?;

        if a != 0 {
            self.set_pc(target);
        } else {
            self.advance_pc(3);
        }
        Ok(())
    }

    pub(super) fn op_jf(&mut self, a: u16, b: u16) -> Result<(), VmError> {
        let a = self.resolve_number_operand(a)?;
        let target = self.resolve_number_operand(b)?;

        if a == 0 {
            self.set_pc(target);
        } else {
            self.advance_pc(3);
        }
        Ok(())
    }

    pub(super) fn op_push(&mut self, a: u16) -> Result<(), VmError> {
        let a = self.resolve_number_operand(a)?;

        if !self.stack.push(a) {
            return Err(VmError::StackPushFail);
        }

        self.advance_pc(2);
        Ok(())
    }

    pub(super) fn op_pop(&mut self, a: u16) -> Result<(), VmError> {
        let reg = self.classify_register_operand(a)?;
        let v = self.stack.pop().ok_or(VmError::StackPopFail)?;

        self.registers.write(reg, v);
        self.advance_pc(2);
        Ok(())
    }

    pub(super) fn op_call(&mut self, a: u16) -> Result<(), VmError> {
        let target = self.resolve_number_operand(a)?;
        let return_addr = self.pc.wrapping_add(2);

        if !self.stack.push(return_addr) {
            return Err(VmError::StackPushFail);
        }

        self.set_pc(target);
        Ok(())
    }

    /// Pops a return address and jumps to it. An empty stack halts cleanly:
    /// there's nowhere left to return to, which is how a program signals
    /// it's finished rather than a fault.
    pub(super) fn op_ret(&mut self) {
        match self.stack.pop() {
            Some(target) => self.set_pc(target),
            None => {
                self.halted = true;
                self.status = None;
            }
        }
    }
}

//! Memory-access handlers: `rmem`, `wmem`.

use super::Vm;
use crate::error::VmError;

impl<In, Out> Vm<In, Out> {
    pub(super) fn op_rmem(&mut self, a: u16, b: u16) -> Result<(), VmError> {
        let reg = self.classify_register_operand(a)?;
        let addr = self.resolve_number_operand(b)?;

        let v = self.memory.read(addr);
        self.registers.write(reg, v);
        self.advance_pc(3);
        Ok(())
    }

    pub(super) fn op_wmem(&mut self, a: u16, b: u16) -> Result<(), VmError> {
        let addr = self.resolve_number_operand(a)?;
        let v = self.resolve_number_operand(b)?;

        self.memory.write(addr, v);
        self.advance_pc(3);
        Ok(())
    }
}

//! Console handlers: `out`, `in`.
//!
//! Generic over the VM's I/O streams so the CLI driver can wire real stdio
//! while tests wire in-memory buffers.

use std::io::{Read, Write};

use super::Vm;
use crate::error::VmError;

impl<In, Out> Vm<In, Out>
where
    Out: Write,
{
    pub(super) fn op_out(&mut self, a: u16) -> Result<(), VmError> {
        let a = self.resolve_number_operand(a)?;

        // Low byte only: output is a byte stream, operands are words.
        let _ = self.output.write_all(&[(a & 0xff) as u8]);
        self.advance_pc(2);
        Ok(())
    }
}

impl<In, Out> Vm<In, Out>
where
    In: Read,
{
    pub(super) fn op_in(&mut self, a: u16) -> Result<(), VmError> {
        let reg = self.classify_register_operand(a)?;

        let mut byte = [0u8];
        // EOF (Ok(0)) and a read error both resolve to register value 0:
        // there's no distinct "failed read" status in the architecture.
        let v = match self.input.read(&mut byte) {
            Ok(1) => byte[0] as u16,
            _ => 0,
        };

        self.registers.write(reg, v);
        self.advance_pc(2);
        Ok(())
    }
}

//! The fetch-decode-execute loop.

use std::io::{Read, Write};

use super::Vm;
use crate::consts::MEM_SIZE;
use crate::error::VmError;
use crate::opcode::Opcode;

/// The terminal result of [`Vm::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The VM reached `halt`, `ret` on an empty stack, or the program
    /// counter left addressable memory. No fault status is set.
    Halted,
    /// The VM halted because a handler reported an unrecoverable fault (or
    /// a recoverable one while `strict_on_bad_operand` was set).
    Faulted(VmError),
}

impl<In, Out> Vm<In, Out>
where
    In: Read,
    Out: Write,
{
    /// Runs until a terminal condition is reached: `halt`, `ret` with an
    /// empty stack, a fault latched by the strict policy, or the PC leaving
    /// `0..32768`.
    pub fn run(&mut self) -> RunOutcome {
        while !self.halted {
            self.step();
        }

        match self.status {
            Some(e) => RunOutcome::Faulted(e),
            None => RunOutcome::Halted,
        }
    }

    /// Dispatches exactly one instruction at the current PC.
    ///
    /// Public so a host can single-step (e.g. a debugger front-end); does
    /// nothing once the VM is already halted.
    pub fn step(&mut self) {
        if self.halted {
            return;
        }

        if self.pc as usize >= MEM_SIZE {
            self.halted = true;
            self.status = None;
            return;
        }

        let opcode_word = self.memory.read(self.pc);
        let Some(opcode) = Opcode::decode(opcode_word) else {
            self.handle_fault(VmError::InvalidInstruction, 1);
            return;
        };

        let width = opcode.width();
        if self.pc as usize + width as usize > MEM_SIZE {
            self.halted = true;
            self.status = None;
            return;
        }

        self.trace_instruction(opcode);
        self.dispatch(opcode, width);
    }

    fn operand(&self, offset: u16) -> u16 {
        self.memory.read(self.pc.wrapping_add(offset))
    }

    fn dispatch(&mut self, opcode: Opcode, width: u16) {
        use Opcode::*;

        let result = match opcode {
            Halt => {
                self.op_halt();
                Ok(())
            }
            Ret => {
                self.op_ret();
                Ok(())
            }
            Noop => {
                self.op_noop();
                Ok(())
            }
            Push => self.op_push(self.operand(1)),
            Pop => self.op_pop(self.operand(1)),
            Jmp => self.op_jmp(self.operand(1)),
            Call => self.op_call(self.operand(1)),
            Out => self.op_out(self.operand(1)),
            In => self.op_in(self.operand(1)),
            Set => self.op_set(self.operand(1), self.operand(2)),
            Jt => self.op_jt(self.operand(1), self.operand(2)),
            Jf => self.op_jf(self.operand(1), self.operand(2)),
            Not => self.op_not(self.operand(1), self.operand(2)),
            Rmem => self.op_rmem(self.operand(1), self.operand(2)),
            Wmem => self.op_wmem(self.operand(1), self.operand(2)),
            Eq => self.op_eq(self.operand(1), self.operand(2), self.operand(3)),
            Gt => self.op_gt(self.operand(1), self.operand(2), self.operand(3)),
            Add => self.op_add(self.operand(1), self.operand(2), self.operand(3)),
            Mult => self.op_mult(self.operand(1), self.operand(2), self.operand(3)),
            Mod => self.op_mod(self.operand(1), self.operand(2), self.operand(3)),
            And => self.op_and(self.operand(1), self.operand(2), self.operand(3)),
            Or => self.op_or(self.operand(1), self.operand(2), self.operand(3)),
        };

        if let Err(fault) = result {
            self.handle_fault(fault, width);
        }
    }
}

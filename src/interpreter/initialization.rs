use super::Vm;

impl<In, Out> Vm<In, Out> {
    /// Resets memory, registers, the program counter, the halt flag, and the
    /// fault status to a fresh starting state.
    ///
    /// The stack is deliberately left untouched: the architecture defines
    /// `reset` only as "a fresh starting state", and a caller that wants to
    /// load a new program should construct a new [`Vm`] (or pair a reset
    /// with its own stack replacement) rather than rely on `reset` to clear
    /// it implicitly.
    pub fn reset(&mut self) {
        self.memory.clear();
        self.registers.clear();
        self.pc = 0;
        self.halted = false;
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VmConfig;

    #[test]
    fn reset_clears_memory_registers_and_pc_but_not_stack() {
        let mut vm: Vm<std::io::Empty, Vec<u8>> = Vm::with_config(VmConfig::default());
        vm.memory_mut().write(0, 42);
        vm.registers.write(0, 7);
        assert!(vm.stack.push(99));
        vm.pc = 5;
        vm.halted = true;

        vm.reset();

        assert_eq!(vm.memory().read(0), 0);
        assert_eq!(vm.registers().read(0), 0);
        assert_eq!(vm.pc(), 0);
        assert!(!vm.is_halted());
        assert_eq!(vm.status(), None);
        assert_eq!(vm.stack_len(), 1);
    }
}

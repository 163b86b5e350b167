//! Wires the loader's `Result<(), LoadError>` into the VM's own fault
//! status, so a load failure is visible through `status`/`error_message`
//! the same way an execution fault is, per the driver surface in SPEC_FULL §6.

use std::path::Path;

use super::Vm;
use crate::error::VmError;
use crate::loader;

impl<In, Out> Vm<In, Out> {
    /// Loads `bytes` into memory. On failure, latches `status` to the
    /// matching [`VmError`] (`LoadFail` or `MemoryOverflow`) and sets the
    /// halt flag, mirroring how a dispatch fault is reported.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), VmError> {
        loader::load_bytes(&mut self.memory, bytes).map_err(|e| self.latch_load_fault(e))
    }

    /// Opens `path` and loads it the same way as [`Vm::load_bytes`].
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), VmError> {
        loader::load_file(&mut self.memory, path).map_err(|e| self.latch_load_fault(e))
    }

    fn latch_load_fault(&mut self, e: crate::error::LoadError) -> VmError {
        let fault = VmError::from(e);
        self.status = Some(fault);
        self.halted = true;
        fault
    }
}

#[cfg(test)]
mod tests {
    use crate::config::VmConfig;
    use crate::interpreter::Vm;

    fn vm() -> Vm<std::io::Empty, Vec<u8>> {
        Vm::with_config(VmConfig::default())
    }

    #[test]
    fn load_bytes_populates_memory() {
        let mut vm = vm();
        vm.load_bytes(&[0x09, 0x00]).unwrap();
        assert_eq!(vm.memory().read(0), 9);
        assert_eq!(vm.status(), None);
    }

    #[test]
    fn missing_file_latches_load_fail() {
        let mut vm = vm();
        let err = vm.load_file("/nonexistent/path/to/a/program.bin").unwrap_err();
        assert!(matches!(err, crate::error::VmError::LoadFail));
        assert_eq!(vm.status(), Some(crate::error::VmError::LoadFail));
        assert!(vm.is_halted());
    }

    #[test]
    fn oversized_program_latches_memory_overflow() {
        let mut vm = vm();
        let bytes = vec![0u8; (crate::consts::MEM_SIZE + 1) * 2];
        let err = vm.load_bytes(&bytes).unwrap_err();
        assert!(matches!(err, crate::error::VmError::MemoryOverflow));
        assert_eq!(vm.status(), Some(crate::error::VmError::MemoryOverflow));
        assert!(vm.is_halted());
    }
}

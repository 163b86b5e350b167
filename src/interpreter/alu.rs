//! Arithmetic, comparison, and bitwise handlers: `set`, `eq`, `gt`, `add`,
//! `mult`, `mod`, `and`, `or`, `not`.

use super::Vm;
use crate::consts::MODULO;
use crate::error::VmError;

impl<In, Out> Vm<In, Out> {
    pub(super) fn op_set(&mut self, a: u16, b: u16) -> Result<(), VmError> {
        let reg = self.classify_register_operand(a)?;
        let b = self.resolve_number_operand(b)?;

        self.registers.write(reg, b);
        self.advance_pc(3);
        Ok(())
    }

    pub(super) fn op_eq(&mut self, a: u16, b: u16, c: u16) -> Result<(), VmError> {
        self.alu_compare(a, b, c, |b, c| b == c)
    }

    pub(super) fn op_gt(&mut self, a: u16, b: u16, c: u16) -> Result<(), VmError> {
        self.alu_compare(a, b, c, |b, c| b > c)
    }

    fn alu_compare(
        &mut self,
        a: u16,
        b: u16,
        c: u16,
        cmp: impl FnOnce(u16, u16) -> bool,
    ) -> Result<(), VmError> {
        let reg = self.classify_register_operand(a)?;
        let b = self.resolve_number_operand(b)?;
        let c = self.resolve_number_operand(c)?;

        self.registers.write(reg, cmp(b, c) as u16);
        self.advance_pc(4);
        Ok(())
    }

    pub(super) fn op_add(&mut self, a: u16, b: u16, c: u16) -> Result<(), VmError> {
        self.alu_binary(a, b, c, |b, c| (b + c) % MODULO)
    }

    pub(super) fn op_mult(&mut self, a: u16, b: u16, c: u16) -> Result<(), VmError> {
        self.alu_binary(a, b, c, |b, c| (b * c) % MODULO)
    }

    pub(super) fn op_mod(&mut self, a: u16, b: u16, c: u16) -> Result<(), VmError> {
        let reg = self.classify_register_operand(a)?;
        let b = self.resolve_number_operand(b)?;
        let c = self.resolve_number_operand(c)?;

        if c == 0 {
            return Err(VmError::DivideByZero);
        }

        self.registers.write(reg, b % c);
        self.advance_pc(4);
        Ok(())
    }

    pub(super) fn op_and(&mut self, a: u16, b: u16, c: u16) -> Result<(), VmError> {
        self.alu_binary(a, b, c, |b, c| b & c)
    }

    pub(super) fn op_or(&mut self, a: u16, b: u16, c: u16) -> Result<(), VmError> {
        self.alu_binary(a, b, c, |b, c| b | c)
    }

    /// Shared body for the three-operand arithmetic/bitwise opcodes: resolve
    /// both value operands, apply `f` in `u32` space, reduce into a word.
    fn alu_binary(
        &mut self,
        a: u16,
        b: u16,
        c: u16,
        f: impl FnOnce(u32, u32) -> u32,
    ) -> Result<(), VmError> {
        let reg = self.classify_register_operand(a)?;
        let b = self.resolve_number_operand(b)?;
        let c = self.resolve_number_operand(c)?;

        let result = f(b as u32, c as u32) as u16;

        self.registers.write(reg, result);
        self.advance_pc(4);
        Ok(())
    }

    pub(super) fn op_not(&mut self, a: u16, b: u16) -> Result<(), VmError> {
        let reg = self.classify_register_operand(a)?;
        let b = self.resolve_number_operand(b)?;

        // 15-bit NOT: invert the low 15 bits, the register's entire valid range.
        self.registers.write(reg, !b & 0x7fff);
        self.advance_pc(3);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::VmConfig;
    use crate::interpreter::Vm;

    fn vm() -> Vm<std::io::Empty, Vec<u8>> {
        Vm::with_config(VmConfig::strict())
    }

    #[test]
    fn add_wraps_modulo_32768() {
        let mut vm = vm();
        vm.op_add(32768, 32767, 1).unwrap();
        assert_eq!(vm.registers().read(0), 0);
    }

    #[test]
    fn mult_wraps_modulo_32768() {
        let mut vm = vm();
        vm.op_mult(32768, 32767, 2).unwrap();
        assert_eq!(vm.registers().read(0), 32766);
    }

    #[test]
    fn not_of_zero_is_all_fifteen_bits() {
        let mut vm = vm();
        vm.op_not(32768, 0).unwrap();
        assert_eq!(vm.registers().read(0), 32767);
    }

    #[test]
    fn not_of_max_is_zero() {
        let mut vm = vm();
        vm.op_not(32768, 32767).unwrap();
        assert_eq!(vm.registers().read(0), 0);
    }

    #[test]
    fn eq_and_gt_produce_zero_or_one() {
        let mut vm = vm();
        vm.op_eq(32768, 5, 5).unwrap();
        assert_eq!(vm.registers().read(0), 1);
        vm.op_eq(32768, 5, 6).unwrap();
        assert_eq!(vm.registers().read(0), 0);
        vm.op_gt(32768, 6, 5).unwrap();
        assert_eq!(vm.registers().read(0), 1);
    }

    #[test]
    fn mod_by_zero_is_a_fault() {
        let mut vm = vm();
        let err = vm.op_mod(32768, 5, 0).unwrap_err();
        assert!(matches!(err, crate::error::VmError::DivideByZero));
    }

    #[test]
    fn set_reads_register_operand() {
        let mut vm = vm();
        vm.registers.write(1, 65);
        vm.op_set(32768, 32769).unwrap();
        assert_eq!(vm.registers().read(0), 65);
    }
}

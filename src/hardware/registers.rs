use crate::errors::ExecutionError;

/// Number of general purpose registers.
pub const GENERAL_PURPOSE_COUNT: u8 = 8;
/// Register reserved as the stack pointer by PUSH, POP, CALL and RET.
/// Nothing stops other instructions from using it as a general register.
pub const SP: u8 = 7;
/// Initial stack pointer value, leaving room below the end of memory for
/// stack growth clear of program bytes loaded at the low addresses.
pub const STACK_TOP: u8 = 0xF3;

/// The LS-8 register file plus the program counter.
#[derive(Debug)]
pub struct Registers {
    general_purpose: [u8; GENERAL_PURPOSE_COUNT as usize],
    pc: u8,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            general_purpose: [0u8; GENERAL_PURPOSE_COUNT as usize],
            pc: 0,
        }
    }

    /// # Errors
    /// - `InvalidRegister` if `r` is no register index
    pub const fn get(&self, r: u8) -> Result<u8, ExecutionError> {
        if r >= GENERAL_PURPOSE_COUNT {
            return Err(ExecutionError::InvalidRegister { index: r });
        }
        Ok(self.general_purpose[r as usize])
    }

    /// # Errors
    /// - `InvalidRegister` if `r` is no register index
    pub fn set(&mut self, r: u8, value: u8) -> Result<(), ExecutionError> {
        if r >= GENERAL_PURPOSE_COUNT {
            return Err(ExecutionError::InvalidRegister { index: r });
        }
        self.general_purpose[r as usize] = value;
        Ok(())
    }

    #[must_use]
    pub const fn general_purpose(&self) -> &[u8; GENERAL_PURPOSE_COUNT as usize] {
        &self.general_purpose
    }

    #[must_use]
    pub const fn pc(&self) -> u8 {
        self.pc
    }

    pub fn set_pc(&mut self, address: u8) {
        self.pc = address;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use googletest::prelude::*;
    use yare::parameterized;

    #[gtest]
    pub fn test_registers_start_zeroed() {
        let regs = Registers::new();
        for r in 0..GENERAL_PURPOSE_COUNT {
            expect_that!(regs.get(r).unwrap(), eq(0));
        }
        expect_that!(regs.pc(), eq(0));
    }

    #[parameterized(
        first = { 0 },
        stack_pointer = { SP },
    )]
    fn test_registers_get_set(r: u8) {
        let mut regs = Registers::new();
        regs.set(r, 0xAB).unwrap();
        assert_that!(regs.get(r).unwrap(), eq(0xAB));
    }

    #[parameterized(
        one_past_the_end = { 8 },
        operand_maximum = { 255 },
    )]
    fn test_registers_invalid_index(r: u8) {
        let mut regs = Registers::new();
        assert_that!(
            regs.get(r).unwrap_err(),
            eq(&ExecutionError::InvalidRegister { index: r })
        );
        assert_that!(
            regs.set(r, 1).unwrap_err().to_string(),
            eq(&format!("Invalid register index {r}, valid range is 0..=7"))
        );
    }

    #[gtest]
    pub fn test_program_counter() {
        let mut regs = Registers::new();
        regs.set_pc(0x42);
        expect_that!(regs.pc(), eq(0x42));
    }
}

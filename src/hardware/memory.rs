use crate::errors::LoadProgramError;
use std::fmt::{Debug, Formatter};

/// Number of addressable cells, one byte each.
pub const MEMORY_SIZE: usize = 256;

/// An abstraction for the LS-8 memory holding program bytes and the stack.
///
/// Addresses are `u8`, so every read and write is in range by
/// construction. Address arithmetic is the caller's concern.
pub struct Memory {
    /// Index equals memory address
    data: [u8; MEMORY_SIZE],
    program_len: usize,
}

impl Debug for Memory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let slice = self.program_slice();
        write!(
            f,
            "Program bytes: {:?}, contents: {slice:?}",
            slice.len()
        )
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: [0u8; MEMORY_SIZE],
            program_len: 0,
        }
    }

    #[must_use]
    pub const fn read(&self, address: u8) -> u8 {
        self.data[address as usize]
    }

    pub fn write(&mut self, address: u8, value: u8) {
        self.data[address as usize] = value;
    }

    /// Loads a program into memory starting at address 0, in order,
    /// with no gaps.
    ///
    /// # Errors
    /// - Program too long
    pub fn load_program(&mut self, data: &[u8]) -> Result<(), LoadProgramError> {
        if data.len() > MEMORY_SIZE {
            return Err(LoadProgramError::ProgramTooLong {
                actual_bytes: data.len(),
                maximum_bytes: MEMORY_SIZE,
            });
        }
        self.data[..data.len()].copy_from_slice(data);
        self.program_len = data.len();
        Ok(())
    }

    pub fn program_slice(&self) -> &[u8] {
        &self.data[..self.program_len]
    }
}

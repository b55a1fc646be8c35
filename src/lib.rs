//! # LS-8 Emulator.
//!
//! `ls8-emulator` runs programs for the LS-8, an 8-bit stored-program
//! computer with 256 bytes of memory and eight general purpose
//! registers, register 7 doubling as the stack pointer.
//! Usage starts with loading a program via [`emulator::Cpu::load_program`].
//!
//!  # Example
//! ```
//! use ls8_emulator::emulator::Cpu;
//! let mut cpu = Cpu::new();
//! // LDI R0,8; LDI R1,9; MUL R0,R1; PRN R0; HLT
//! let program = [
//!     0b1000_0010, 0, 8,
//!     0b1000_0010, 1, 9,
//!     0b1010_0010, 0, 1,
//!     0b0100_0111, 0,
//!     0b0000_0001,
//! ];
//! cpu.load_program(&program).unwrap();
//! let mut output = Vec::new();
//! cpu.run(&mut output).unwrap();
//! assert_eq!(output, b"72\n");
//! ```
//! # Errors
//! - Program longer than the 256 byte memory
//! - Undefined instruction word
//! - Register index or stack pointer leaving its valid range

pub mod emulator;
pub mod errors;
pub mod hardware;
pub mod loader;

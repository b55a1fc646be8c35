use crate::emulator::opcodes::{AluOp, Opcode};
use crate::errors::{ExecutionError, LoadProgramError};
use crate::hardware::memory::Memory;
use crate::hardware::registers::{Registers, SP, STACK_TOP};
use std::io::Write;

pub mod opcodes;
#[cfg(test)]
pub(crate) mod test_helpers;

/// Engine state, advanced by [`Cpu::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
}

/// The public facing machine used to run LS-8 programs: memory, the
/// register file and the fetch-decode-execute engine driving them.
#[derive(Debug)]
pub struct Cpu {
    memory: Memory,
    registers: Registers,
    state: State,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Constructor method, memory and registers zero-initialized,
    /// program counter at 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            memory: Memory::new(),
            registers: Registers::new(),
            state: State::Running,
        }
    }

    /// Loads program bytes into memory starting at address 0, in order,
    /// with no gaps.
    ///
    /// # Errors
    /// - Program too long
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), LoadProgramError> {
        self.memory.load_program(program)
    }

    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    #[must_use]
    pub const fn registers(&self) -> &Registers {
        &self.registers
    }

    #[must_use]
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Executes one fetch-decode-execute cycle.
    ///
    /// The two bytes after the instruction word are always fetched as
    /// candidate operands; memory reads have no side effects and
    /// handlers ignore the bytes they do not use. The program counter
    /// advances by one plus the operand count unless the instruction
    /// transfers control itself (CALL, RET).
    ///
    /// # Errors
    /// - `UndefinedOpcode` if the fetched word is no LS-8 instruction
    /// - `ProgramCounterOverflow` if the advance leaves the address space
    /// - any fault raised by the dispatched handler
    pub fn step(&mut self, stdout: &mut impl Write) -> Result<State, ExecutionError> {
        let pc = self.registers.pc();
        let word = self.memory.read(pc);
        let operand_a = self.memory.read(pc.wrapping_add(1));
        let operand_b = self.memory.read(pc.wrapping_add(2));
        let opcode =
            Opcode::n(word).ok_or(ExecutionError::UndefinedOpcode { address: pc, word })?;
        match opcode {
            Opcode::Hlt => self.state = State::Halted,
            Opcode::Ldi => opcodes::ldi(operand_a, operand_b, &mut self.registers)?,
            Opcode::Prn => opcodes::prn(operand_a, &self.registers, stdout)?,
            Opcode::Add => opcodes::alu(AluOp::Add, operand_a, operand_b, &mut self.registers)?,
            Opcode::Mul => opcodes::alu(AluOp::Mul, operand_a, operand_b, &mut self.registers)?,
            Opcode::Push => opcodes::push(operand_a, &mut self.registers, &mut self.memory)?,
            Opcode::Pop => opcodes::pop(operand_a, &mut self.registers, &self.memory)?,
            Opcode::Call => opcodes::call(operand_a, &mut self.registers, &mut self.memory)?,
            Opcode::Ret => opcodes::ret(&mut self.registers, &self.memory)?,
        }
        if !opcode.sets_pc() && self.state == State::Running {
            let next = pc
                .checked_add(1 + opcode.operand_count())
                .ok_or(ExecutionError::ProgramCounterOverflow { pc })?;
            self.registers.set_pc(next);
        }
        Ok(self.state)
    }

    /// Runs the loaded program until HLT, writing PRN output to
    /// `stdout`. The stack pointer starts at [`STACK_TOP`].
    ///
    /// A program that never reaches HLT loops forever.
    ///
    /// # Errors
    /// - any fault raised by [`Cpu::step`]
    pub fn run(&mut self, stdout: &mut impl Write) -> Result<(), ExecutionError> {
        self.registers.set(SP, STACK_TOP)?;
        while self.step(stdout)? == State::Running {}
        Ok(())
    }

    /// Like [`Cpu::run`], additionally writing a [`Cpu::trace_line`]
    /// snapshot to `trace_out` before every cycle.
    ///
    /// # Errors
    /// - any fault raised by [`Cpu::step`]
    /// - `OutputError` if `trace_out` rejects a write
    pub fn run_traced(
        &mut self,
        stdout: &mut impl Write,
        trace_out: &mut impl Write,
    ) -> Result<(), ExecutionError> {
        self.registers.set(SP, STACK_TOP)?;
        loop {
            writeln!(trace_out, "{}", self.trace_line())
                .map_err(|e| ExecutionError::OutputError(e.to_string()))?;
            if self.step(stdout)? == State::Halted {
                return Ok(());
            }
        }
    }

    /// One-line snapshot of the program counter, the three bytes at the
    /// program counter and the register file, all in hex, e.g.
    /// `TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F3`.
    #[must_use]
    pub fn trace_line(&self) -> String {
        let pc = self.registers.pc();
        let mut line = format!(
            "TRACE: {pc:02X} | {:02X} {:02X} {:02X} |",
            self.memory.read(pc),
            self.memory.read(pc.wrapping_add(1)),
            self.memory.read(pc.wrapping_add(2)),
        );
        for value in self.registers.general_purpose() {
            line.push_str(&format!(" {value:02X}"));
        }
        line
    }
}

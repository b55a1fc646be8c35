use displaydoc::Display;

/// Errors raised while turning program text into loadable bytes.
#[derive(Display, Debug, PartialEq, Eq)]
pub enum LoadProgramError {
    /// Program file '{path}' could not be read: {reason}
    ProgramFileUnreadable { path: String, reason: String },
    /// Line {line_number} is not an 8-bit binary instruction: '{text}'
    InvalidInstruction { line_number: usize, text: String },
    /// Program too long, got {actual_bytes} bytes while limit is {maximum_bytes}
    ProgramTooLong {
        actual_bytes: usize,
        maximum_bytes: usize,
    },
}
impl std::error::Error for LoadProgramError {}

/// Fatal faults raised by the execution engine, none of them recoverable
/// within a run.
#[derive(Display, Debug, PartialEq, Eq)]
pub enum ExecutionError {
    /// Undefined instruction word 0b{word:08b} at address {address:#04X}
    UndefinedOpcode { address: u8, word: u8 },
    /// Invalid register index {index}, valid range is 0..=7
    InvalidRegister { index: u8 },
    /// Stack overflow, cannot push below address 0x00 (SP = {sp:#04X})
    StackOverflow { sp: u8 },
    /// Stack underflow, cannot pop above address 0xFF (SP = {sp:#04X})
    StackUnderflow { sp: u8 },
    /// Program counter advanced past the end of memory (PC = {pc:#04X})
    ProgramCounterOverflow { pc: u8 },
    /// Error writing program output: {0}
    OutputError(String),
}
impl std::error::Error for ExecutionError {}

//! Reads LS-8 programs from their textual form: one instruction byte
//! per line as an 8-bit binary literal, with `#` starting a comment.
//! Blank and comment-only lines are skipped.
use crate::errors::LoadProgramError;
use std::fs;
use std::path::Path;

/// Parses program text into the byte sequence to load at address 0.
///
/// # Errors
/// - a line that is neither blank, comment-only nor an 8-bit binary
///   literal
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadProgramError> {
    let mut program = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let code = line.split_once('#').map_or(line, |(code, _comment)| code);
        let text = code.trim();
        if text.is_empty() {
            continue;
        }
        let word =
            u8::from_str_radix(text, 2).map_err(|_| LoadProgramError::InvalidInstruction {
                line_number: idx + 1,
                text: text.to_string(),
            })?;
        program.push(word);
    }
    Ok(program)
}

/// Reads and parses the program file at `path`.
///
/// # Errors
/// - file missing or unreadable
/// - any error from [`parse_program`]
pub fn read_program(path: &Path) -> Result<Vec<u8>, LoadProgramError> {
    let source =
        fs::read_to_string(path).map_err(|e| LoadProgramError::ProgramFileUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    parse_program(&source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emulator::Cpu;
    use crate::emulator::test_helpers::StringWriter;
    use googletest::prelude::*;
    use yare::parameterized;

    #[gtest]
    pub fn test_parse_program_skips_comments_and_blanks() {
        let source = "\
# a comment-only line

10000010 # LDI R0,8
00000000
00001000
   00000001   # HLT, with surrounding whitespace
";
        let program = parse_program(source).unwrap();
        expect_that!(program, eq(&vec![0b1000_0010, 0, 8, 0b0000_0001]));
    }

    #[parameterized(
        not_binary = { "2", 1 },
        too_wide = { "100000101", 1 },
        mnemonic = { "LDI", 1 },
    )]
    fn test_parse_program_invalid_line(text: &str, line_number: usize) {
        assert_that!(
            parse_program(text).unwrap_err(),
            eq(&LoadProgramError::InvalidInstruction {
                line_number,
                text: text.to_string(),
            })
        );
    }

    #[gtest]
    pub fn test_parse_program_reports_line_number_after_comments() {
        let source = "# header\n\n10000010\nnot a byte\n";
        expect_that!(
            parse_program(source).unwrap_err().to_string(),
            eq("Line 4 is not an 8-bit binary instruction: 'not a byte'")
        );
    }

    #[gtest]
    pub fn test_read_program_missing_file() {
        let err = read_program(Path::new("no/such/program.ls8")).unwrap_err();
        expect_that!(
            err.to_string(),
            contains_substring("Program file 'no/such/program.ls8' could not be read")
        );
    }

    #[parameterized(
        mult = { "demos/mult.ls8", "72\n" },
        call = { "demos/call.ls8", "20\n" },
    )]
    fn test_read_program_demo_runs(path: &str, expected_output: &str) {
        let program = read_program(Path::new(path)).unwrap();
        let mut cpu = Cpu::new();
        let mut out = StringWriter::new();
        cpu.load_program(&program).unwrap();
        cpu.run(&mut out).unwrap();
        assert_that!(out.get_string(), eq(expected_output));
    }
}

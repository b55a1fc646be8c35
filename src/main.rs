use ls8_emulator::emulator::Cpu;
use ls8_emulator::loader;
use std::env;
use std::io::{stderr, stdout};
use std::path::Path;
use std::process::ExitCode;

const USAGE: &str = "Usage: ls8-emulator <program.ls8> [--trace]";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let trace = args.iter().any(|arg| arg == "--trace");
    let program_files: Vec<&String> = args
        .iter()
        .filter(|arg| arg.as_str() != "--trace")
        .collect();
    let [program_file] = program_files.as_slice() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };
    let program = match loader::read_program(Path::new(program_file.as_str())) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };
    let mut cpu = Cpu::new();
    if let Err(e) = cpu.load_program(&program) {
        eprintln!("{e}");
        return ExitCode::from(2);
    }
    let result = if trace {
        cpu.run_traced(&mut stdout(), &mut stderr())
    } else {
        cpu.run(&mut stdout())
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

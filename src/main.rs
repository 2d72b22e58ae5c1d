//! Sizelang interpreter CLI.
//!
//! Runs a sizelang program file. The program text is implicit: only the count
//! of non-whitespace bytes in the file matters, and that integer's bit
//! pattern (behind a sentinel `1`) is the instruction stream.
//!
//! # Usage
//! ```text
//! sizelang <file> [OPTIONS]
//! ```
//!
//! # Arguments
//! - `file`: Program file; its non-whitespace byte count is the program
//!
//! # Options
//! - `-d, --debug`: Dump the decoded instructions and trace execution
//!
//! The running program reads from stdin and writes to stdout; diagnostics go
//! to stderr.

use crate::interpreter::decoder::decode;
use crate::interpreter::machine::Machine;
use std::env;
use std::fs;
use std::io;
use std::process;

mod interpreter;
mod utils;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage(&args[0]);
        process::exit(if args.len() < 2 { 1 } else { 0 });
    }

    let path = &args[1];
    let mut debug = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--debug" | "-d" => {
                debug = true;
                i += 1;
            }
            other => {
                eprintln!("Unexpected argument: {}\n", other);
                print_usage(&args[0]);
                process::exit(1);
            }
        }
    }

    let contents = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Could not open file \"{}\": {}", path, e);
            process::exit(2);
        }
    };

    // The program is the count of non-whitespace bytes, nothing else.
    let program = contents
        .iter()
        .filter(|byte| !byte.is_ascii_whitespace())
        .count() as u128;

    if program == 0 {
        warn!("Given file \"{}\" has no content", path);
    }
    if debug {
        info!("Program integer: {} ({:#b})", program, program);
    }

    let instructions = match decode(program) {
        Ok(instructions) => instructions,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    if debug {
        info!("Decoded {} instructions:", instructions.len());
        for (address, instruction) in instructions.iter().enumerate() {
            eprintln!("{:>4}  {}", address, instruction);
        }
        info!("Executing:");
    }

    let mut machine = Machine::new(instructions);
    machine.set_trace(debug);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = machine.run(&mut stdin.lock(), &mut stdout.lock()) {
        error!("{}", e);
        process::exit(1);
    }
}

const USAGE: &str = "\
Sizelang Interpreter

USAGE:
    {program} <file> [OPTIONS]

ARGS:
    <file>    Program file; the count of its non-whitespace bytes is the program

OPTIONS:
    -d, --debug    Dump the decoded instructions and trace execution on stderr
    -h, --help     Print this help message

EXAMPLES:
    # Run a program that prints one NUL byte (a file of 8 non-whitespace bytes)
    filefiller null.szl 8
    {program} null.szl

    # Inspect what a file decodes to before running it
    {program} program.szl --debug
";

/// Prints usage information to stderr.
fn print_usage(program: &str) {
    eprintln!("{}", USAGE.replace("{program}", program));
}

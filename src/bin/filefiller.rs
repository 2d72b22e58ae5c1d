//! Program file generator CLI.
//!
//! Produces a file containing exactly N non-whitespace bytes. The byte value
//! is irrelevant to program semantics; only the count matters. Authoring a
//! sizelang program means computing its program integer (see the library's
//! encoder) and asking this tool for a file of that many bytes.
//!
//! # Usage
//! ```text
//! filefiller <file> <size> [OPTIONS]
//! ```
//!
//! # Arguments
//! - `file`: Output path
//! - `size`: Exact number of bytes to write
//!
//! # Options
//! - `-f, --fill <char>`: Byte to repeat (default `a`; must not be whitespace)

use sizelang::{error, info};
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;

const CHUNK: usize = 8192;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 || args[1] == "--help" || args[1] == "-h" {
        print_usage(&args[0]);
        process::exit(if args.len() < 3 { 1 } else { 0 });
    }

    let path = &args[1];
    let size = match args[2].parse::<u128>() {
        Ok(size) => size,
        Err(_) => {
            error!("Invalid size: '{}' is not a non-negative integer", args[2]);
            process::exit(1);
        }
    };

    let mut fill = b'a';
    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            k @ ("--fill" | "-f") => {
                i += 1;
                if i >= args.len() {
                    error!("{k} requires an argument");
                    process::exit(1);
                }
                fill = match args[i].as_bytes() {
                    [byte] if !byte.is_ascii_whitespace() => *byte,
                    _ => {
                        error!(
                            "Invalid fill '{}': must be a single non-whitespace byte",
                            args[i]
                        );
                        process::exit(1);
                    }
                };
                i += 1;
            }
            other => {
                eprintln!("Unexpected argument: {}\n", other);
                print_usage(&args[0]);
                process::exit(1);
            }
        }
    }

    let file = match File::create(path) {
        Ok(file) => file,
        Err(e) => {
            error!("Could not open file \"{}\": {}", path, e);
            process::exit(2);
        }
    };

    if let Err(e) = fill_file(file, size, fill) {
        error!("Failed to write \"{}\": {}", path, e);
        process::exit(2);
    }
    info!("Wrote {} bytes to \"{}\"", size, path);
}

/// Writes exactly `size` copies of `fill` to the file.
fn fill_file(file: File, size: u128, fill: u8) -> std::io::Result<()> {
    let mut writer = BufWriter::new(file);
    let chunk = [fill; CHUNK];
    let mut remaining = size;
    while remaining > 0 {
        let n = remaining.min(CHUNK as u128) as usize;
        writer.write_all(&chunk[..n])?;
        remaining -= n as u128;
    }
    writer.flush()
}

const USAGE: &str = "\
Sizelang Program File Generator

USAGE:
    {program} <file> <size> [OPTIONS]

ARGS:
    <file>    Output path
    <size>    Exact number of non-whitespace bytes to write

OPTIONS:
    -f, --fill <char>    Byte to repeat (default 'a'; whitespace is rejected
                         because the interpreter does not count it)
    -h, --help           Print this help message

EXAMPLES:
    # A program that prints one NUL byte: integer 8 = binary 1000
    {program} null.szl 8
";

/// Prints usage information to stderr.
fn print_usage(program: &str) {
    eprintln!("{}", USAGE.replace("{program}", program));
}

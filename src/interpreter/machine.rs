//! Core virtual machine implementation.
//!
//! The machine executes a decoded instruction sequence against an auto-growing
//! store of byte variables. All byte arithmetic wraps modulo 256.
//!
//! # Execution model
//!
//! - **State**: a signed instruction pointer plus the [`Vars`] store
//! - **Halting**: the run ends the moment the pointer leaves
//!   `[0, instruction_count)`; this is normal termination, not an error
//! - **I/O**: PRINT writes one byte and flushes immediately; INPUT skips
//!   ASCII whitespace and reads one byte
//! - **Jumps**: the target distance is the signed byte value of a variable,
//!   so jump distances are computed at runtime by prior INC/DEC instructions
//!
//! A program whose pointer never leaves the valid range runs forever; that is
//! accepted language semantics. Callers that need a bound can drive [`Machine::step`]
//! themselves.

use std::io::{self, ErrorKind, Read, Write};

use crate::interpreter::errors::SizelangError;
use crate::interpreter::isa::Instruction;

mod vars;
pub use vars::Vars;


/// Outcome of executing a single instruction.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Status {
    /// The pointer is still inside the program.
    Running,
    /// The pointer left the valid range; no instruction was executed.
    Halted,
}

/// Sizelang virtual machine.
///
/// Owns the instruction sequence, the instruction pointer, and the variable
/// store for the lifetime of one run. Input and output streams are supplied
/// per call so tests can substitute in-memory buffers for stdin/stdout.
pub struct Machine {
    /// Decoded program; an instruction's position is its jump address.
    instructions: Vec<Instruction>,
    /// Signed instruction pointer.
    ptr: i64,
    /// Variable store.
    vars: Vars,
    /// When set, each executed instruction is written to stderr.
    trace: bool,
}

impl Machine {
    /// Creates a machine with the pointer at 0 and an empty store.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self {
            instructions,
            ptr: 0,
            vars: Vars::new(),
            trace: false,
        }
    }

    /// Enables or disables per-instruction execution tracing on stderr.
    pub fn set_trace(&mut self, trace: bool) {
        self.trace = trace;
    }

    /// Runs the program until the instruction pointer leaves the valid range.
    ///
    /// Produces nothing but the I/O side effects of PRINT and INPUT.
    /// Returns [`SizelangError::Io`] if the output stream fails; end of the
    /// input stream is not an error.
    pub fn run<R: Read, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), SizelangError> {
        while self.step(input, output)? == Status::Running {}
        Ok(())
    }

    /// Executes the single instruction under the pointer.
    ///
    /// Returns [`Status::Halted`] without executing anything when the pointer
    /// is outside `[0, instruction_count)`.
    pub fn step<R: Read, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Status, SizelangError> {
        let Some(instruction) = self.current() else {
            return Ok(Status::Halted);
        };
        if self.trace {
            eprintln!("{:>4}  {}", self.ptr, instruction);
        }

        match instruction {
            Instruction::Print { var } => {
                // Flush-on-write: the language has no notion of buffering.
                let byte = self.vars.get(var);
                output.write_all(&[byte]).map_err(|source| SizelangError::Io {
                    instruction: "print",
                    source,
                })?;
                output.flush().map_err(|source| SizelangError::Io {
                    instruction: "print",
                    source,
                })?;
            }
            Instruction::Input { var } => {
                // At end of input the variable keeps its prior value and
                // execution continues.
                if let Some(byte) = read_input_byte(input).map_err(|source| SizelangError::Io {
                    instruction: "input",
                    source,
                })? {
                    self.vars.set(var, byte);
                }
            }
            Instruction::Inc { var } => self.vars.increment(var),
            Instruction::Dec { var } => self.vars.decrement(var),
            Instruction::Jump { cond, offset } => {
                if self.vars.get(cond) == 0 {
                    // The +1 advance below is folded into the offset: an
                    // offset of 1 falls through, 0 re-executes this jump.
                    self.ptr += i64::from(self.vars.get(offset) as i8);
                    self.ptr -= 1;
                }
            }
        }

        self.ptr += 1;
        Ok(Status::Running)
    }

    /// Returns the instruction under the pointer, or `None` when the pointer
    /// is outside the program.
    fn current(&self) -> Option<Instruction> {
        usize::try_from(self.ptr)
            .ok()
            .and_then(|index| self.instructions.get(index))
            .copied()
    }
}

/// Reads one byte from the input stream, skipping ASCII whitespace.
///
/// Returns `Ok(None)` when the stream is exhausted before a non-whitespace
/// byte is found.
fn read_input_byte<R: Read>(input: &mut R) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) if buf[0].is_ascii_whitespace() => continue,
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

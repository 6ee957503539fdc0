pub mod chip8;

use cursive::CbSink;
use thiserror::Error;

/// Abstraction over an emulated machine as seen by a host loop. The host
/// loads a program, drives the machine cycle by cycle, feeds it input and
/// consumes its output.
pub trait Chip {
    /// Type used to address a single input pin.
    type PinAddress;

    /// Type used to address a single byte of memory.
    type MemoryAddress;

    /// Error type reported by a failing cycle.
    type Error: std::error::Error;

    /// Loads the program found at `path` into memory and returns its size in bytes.
    fn load_program(&mut self, path: &str) -> Result<usize, LoadProgramError>;

    /// Loads `program` into memory and returns its size in bytes.
    fn load_program_bytes(&mut self, program: &[u8]) -> Result<usize, LoadProgramError>;

    /// Runs a single fetch-decode-execute cycle.
    fn cycle(&mut self) -> Result<(), Self::Error>;

    /// Counts the timers down by one step. The host is expected to call this
    /// at a fixed rate that is independent of the rate of `cycle`.
    fn tick_timers(&mut self);

    fn read_output_pins(&self) -> &[bool];

    fn read_memory(&self, address: Self::MemoryAddress) -> u8;

    fn set_input_pin(&mut self, pin: Self::PinAddress, value: bool);

    fn reset_input_pins(&mut self);
}

/// A chip whose output can be presented by a cursive view.
pub trait ChipWithCursiveDisplay {
    /// Hands the current output to `gfx_sink` if it changed since the last call.
    fn update_ui(&mut self, gfx_sink: &CbSink);
}

/// Captures errors that occur while loading a program.
#[derive(Debug, Error)]
pub enum LoadProgramError {
    #[error("could not open file {0}")]
    CouldNotOpenFile(String),

    #[error("could not read file {0}")]
    CouldNotReadFile(String),

    #[error("program is empty")]
    EmptyProgram,

    #[error("program too large: {0} bytes")]
    ProgramTooLarge(usize),
}

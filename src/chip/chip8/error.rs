use thiserror::Error;

use crate::chip::chip8::opcodes::InstructionParsingError;

/// Reasons for which a single instruction cannot be executed. An instruction
/// reporting one of these has not modified the machine state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("return with empty stack")]
    StackUnderflow,

    #[error("call with full stack")]
    StackOverflow,

    #[error("key {0:#04x} does not exist")]
    InvalidKey(u8),

    #[error("memory access out of bounds at {0:#06x}")]
    MemoryOutOfBounds(u16),

    #[error("pixel {0} is outside of the display")]
    PixelOutOfBounds(usize),

    #[error("unknown opcode")]
    UnknownOpcode,

    #[error(transparent)]
    Decode(#[from] InstructionParsingError),
}

/// Errors reported by `Chip8::cycle`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Chip8Error {
    #[error("no program loaded")]
    NoProgramLoaded,

    #[error("program counter {0:#06x} points outside of memory")]
    ProgramCounterOutOfBounds(u16),

    #[error("opcode {opcode:#06x} at {address:#06x} failed: {source}")]
    Fault {
        opcode: u16,
        address: u16,
        #[source]
        source: ExecutionError,
    },
}

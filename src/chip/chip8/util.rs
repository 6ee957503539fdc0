use crate::chip::chip8::{
    constants::{CHIP8_FLAG_REGISTER, CHIP8_MEMORY_SIZE},
    error::ExecutionError,
    Chip8,
};

pub fn conditional_skip<T>(opcode: &T, state: &mut Chip8, f: fn(&T, &Chip8) -> bool) {
    if f(opcode, state) {
        increment_program_counter(state);
    }
}

pub fn increment_program_counter(state: &mut Chip8) {
    state.program_counter = state.program_counter.wrapping_add(2);
}

/// Moves the program counter back onto the instruction just fetched, so
/// that it is executed again in the next cycle.
pub fn rewind_program_counter(state: &mut Chip8) {
    state.program_counter = state.program_counter.wrapping_sub(2);
}

pub fn set_flag(state: &mut Chip8, value: bool) {
    state.registers[CHIP8_FLAG_REGISTER] = value as u8;
}

/// Checks that the `len` bytes starting at `start` are all valid memory
/// addresses and returns the range as indices into memory.
pub fn memory_range(start: u16, len: usize) -> Result<std::ops::Range<usize>, ExecutionError> {
    let start_index = start as usize;
    let end = start_index + len;
    if end > CHIP8_MEMORY_SIZE {
        let first_invalid = start_index.max(CHIP8_MEMORY_SIZE);
        return Err(ExecutionError::MemoryOutOfBounds(first_invalid as u16));
    }
    Ok(start_index..end)
}

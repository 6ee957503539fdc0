use core::convert::TryFrom;
use std::marker::PhantomData;

use crate::chip::chip8::{
    config::InstructionSet,
    constants::{CHIP8_CHARSET_OFFSET, CHIP8_GLYPH_SIZE, CHIP8_INDEX_OVERFLOW},
    error::ExecutionError,
    opcodes::{ExecutableOpcode, InstructionParsingError, InstructionWithRegAndValue, Opcode},
    util, Chip8,
};

define_instruction_with_reg_and_value!(Ldu, LduInstruction, 0xF);
impl ExecutableOpcode for LduInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), ExecutionError> {
        let reg = self.reg as usize;
        match self.value {
            0x07 => {
                state.registers[reg] = state.delay_timer;
            }
            0x0A => match state.input_pins.iter().rposition(|&pressed| pressed) {
                Some(key) => state.registers[reg] = key as u8,
                // Execute this instruction again in the next cycle until a key is pressed.
                None => util::rewind_program_counter(state),
            },
            0x15 => {
                state.delay_timer = state.registers[reg];
            }
            0x18 => {
                state.sound_timer = state.registers[reg];
            }
            0x1E => {
                let index = state.index.wrapping_add(state.registers[reg] as u16);
                if index >= CHIP8_INDEX_OVERFLOW {
                    util::set_flag(state, true);
                }
                state.index = index;
            }
            0x29 => {
                let character = (state.registers[reg] & 0xF) as u16;
                state.index = CHIP8_CHARSET_OFFSET + character * CHIP8_GLYPH_SIZE;
            }
            0x33 => {
                let range = util::memory_range(state.index, 3)?;
                let value = state.registers[reg];
                state.memory[range].copy_from_slice(&[value / 100, (value / 10) % 10, value % 10]);
            }
            0x55 => {
                let range = util::memory_range(state.index, reg + 1)?;
                state.memory[range].copy_from_slice(&state.registers[..=reg]);
                advance_index(state, reg);
            }
            0x65 => {
                let range = util::memory_range(state.index, reg + 1)?;
                state.registers[..=reg].copy_from_slice(&state.memory[range]);
                advance_index(state, reg);
            }
            _ => return Err(ExecutionError::UnknownOpcode),
        }
        Ok(())
    }
}

/// The COSMAC interpreter leaves the index register pointing right behind
/// the last byte touched by FX55 and FX65.
fn advance_index(state: &mut Chip8, reg: usize) {
    if state.config.instruction_set == InstructionSet::Cosmac {
        state.index = state.index.wrapping_add(reg as u16 + 1);
    }
}

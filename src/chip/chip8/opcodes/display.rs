use core::convert::TryFrom;
use std::marker::PhantomData;

use crate::chip::chip8::{
    constants::{CHIP8_DISPLAY_HEIGHT, CHIP8_DISPLAY_SIZE, CHIP8_DISPLAY_WIDTH},
    error::ExecutionError,
    opcodes::{ExecutableOpcode, InstructionParsingError, InstructionWithOperands, Opcode},
    util, Chip8,
};

define_instruction_with_operands!(Drw, DrwInstruction, 0xD);
impl ExecutableOpcode for DrwInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), ExecutionError> {
        // Only the starting position wraps around the display. The sprite
        // itself is laid out on the flat pixel buffer, so columns beyond the
        // right edge continue on the next row.
        let x = state.registers[self.op1 as usize] as usize % CHIP8_DISPLAY_WIDTH;
        let y = state.registers[self.op2 as usize] as usize % CHIP8_DISPLAY_HEIGHT;
        let sprite = util::memory_range(state.index, self.op3 as usize)?;

        let mut pixels = Vec::new();
        for (y_pos, pixel_byte) in state.memory[sprite].iter().enumerate() {
            for x_pos in 0..8 {
                if pixel_byte & (0x80u8 >> x_pos) == 0 {
                    continue;
                }
                let pixel_pos = x + x_pos + (y + y_pos) * CHIP8_DISPLAY_WIDTH;
                if pixel_pos >= CHIP8_DISPLAY_SIZE {
                    return Err(ExecutionError::PixelOutOfBounds(pixel_pos));
                }
                pixels.push(pixel_pos);
            }
        }

        let mut collision = false;
        for pixel_pos in pixels {
            collision |= state.output_pins[pixel_pos];
            state.output_pins[pixel_pos] ^= true;
        }
        util::set_flag(state, collision);
        state.draw = true;
        Ok(())
    }
}

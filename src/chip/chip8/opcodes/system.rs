use core::convert::TryFrom;
use std::marker::PhantomData;

use crate::chip::chip8::{
    constants::CHIP8_DISPLAY_SIZE,
    error::ExecutionError,
    opcodes::{ExecutableOpcode, InstructionParsingError, InstructionWithAddress, Opcode},
    Chip8,
};

define_instruction_with_address!(Sys, SysInstruction, 0x0);
impl ExecutableOpcode for SysInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), ExecutionError> {
        match u16::from(self.address) {
            0x0E0 => {
                state.output_pins = [false; CHIP8_DISPLAY_SIZE];
                state.draw = true;
            }
            0x0EE => {
                if state.stack_pointer == 0 {
                    return Err(ExecutionError::StackUnderflow);
                }
                state.stack_pointer -= 1;
                state.program_counter = state.stack[state.stack_pointer as usize];
            }
            // 0NNN calls machine code routines of the host CPU, which we cannot run.
            _ => return Err(ExecutionError::UnknownOpcode),
        };
        Ok(())
    }
}

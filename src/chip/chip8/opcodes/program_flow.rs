use core::convert::TryFrom;
use std::marker::PhantomData;

use crate::chip::chip8::{
    config::InstructionSet,
    constants::{CHIP8_KEY_COUNT, CHIP8_STACK_SIZE},
    error::ExecutionError,
    opcodes::{
        ExecutableOpcode, InstructionParsingError, InstructionWithAddress, InstructionWithOperands,
        InstructionWithRegAndValue, Opcode,
    },
    util, Chip8,
};

define_instruction_with_address!(Jmp, JmpInstruction, 0x1);
impl ExecutableOpcode for JmpInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), ExecutionError> {
        state.program_counter = u16::from(self.address);
        Ok(())
    }
}

define_instruction_with_address!(Call, CallInstruction, 0x2);
impl ExecutableOpcode for CallInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), ExecutionError> {
        if state.stack_pointer as usize >= CHIP8_STACK_SIZE {
            return Err(ExecutionError::StackOverflow);
        }
        state.stack[state.stack_pointer as usize] = state.program_counter;
        state.stack_pointer += 1;
        state.program_counter = u16::from(self.address);
        Ok(())
    }
}

define_instruction_with_reg_and_value!(Se, SeInstruction, 0x3);
impl ExecutableOpcode for SeInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), ExecutionError> {
        util::conditional_skip(self, state, |instruction, state| {
            state.registers[instruction.reg as usize] == instruction.value
        });
        Ok(())
    }
}

define_instruction_with_reg_and_value!(Sne, SneInstruction, 0x4);
impl ExecutableOpcode for SneInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), ExecutionError> {
        util::conditional_skip(self, state, |instruction, state| {
            state.registers[instruction.reg as usize] != instruction.value
        });
        Ok(())
    }
}

define_instruction_with_operands!(Sre, SreInstruction, 0x5);
impl ExecutableOpcode for SreInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), ExecutionError> {
        if self.op3 != 0 {
            return Err(ExecutionError::UnknownOpcode);
        }
        util::conditional_skip(self, state, |instruction, state| {
            state.registers[instruction.op1 as usize] == state.registers[instruction.op2 as usize]
        });
        Ok(())
    }
}

define_instruction_with_operands!(Srne, SrneInstruction, 0x9);
impl ExecutableOpcode for SrneInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), ExecutionError> {
        if self.op3 != 0 {
            return Err(ExecutionError::UnknownOpcode);
        }
        util::conditional_skip(self, state, |instruction, state| {
            state.registers[instruction.op1 as usize] != state.registers[instruction.op2 as usize]
        });
        Ok(())
    }
}

define_instruction_with_address!(Jmpr, JmprInstruction, 0xB);
impl ExecutableOpcode for JmprInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), ExecutionError> {
        let address = u16::from(self.address);
        let offset_register = match state.config.instruction_set {
            InstructionSet::Cosmac => 0,
            // BXNN: the register is named by the top nibble of the address
            InstructionSet::SuperChip => (address >> 8) as usize,
        };
        state.program_counter = address + state.registers[offset_register] as u16;
        Ok(())
    }
}

define_instruction_with_reg_and_value!(Sk, SkInstruction, 0xE);
impl ExecutableOpcode for SkInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), ExecutionError> {
        let key = state.registers[self.reg as usize];
        if key as usize >= CHIP8_KEY_COUNT {
            return Err(ExecutionError::InvalidKey(key));
        }

        let expect_pressed = match self.value {
            0x9E => true,
            0xA1 => false,
            _ => return Err(ExecutionError::UnknownOpcode),
        };

        if state.input_pins[key as usize] == expect_pressed {
            util::increment_program_counter(state);
        }
        Ok(())
    }
}

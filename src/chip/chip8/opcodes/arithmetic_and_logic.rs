use core::convert::TryFrom;
use rand::Rng;
use std::marker::PhantomData;

use crate::chip::chip8::{
    config::InstructionSet,
    error::ExecutionError,
    opcodes::{
        ExecutableOpcode, InstructionParsingError, InstructionWithAddress, InstructionWithOperands,
        InstructionWithRegAndValue, Opcode,
    },
    util, Chip8,
};

define_instruction_with_reg_and_value!(Ldr, LdrInstruction, 0x6);
impl ExecutableOpcode for LdrInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), ExecutionError> {
        state.registers[self.reg as usize] = self.value;
        Ok(())
    }
}

define_instruction_with_reg_and_value!(Add, AddInstruction, 0x7);
impl ExecutableOpcode for AddInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), ExecutionError> {
        state.registers[self.reg as usize] =
            state.registers[self.reg as usize].wrapping_add(self.value);
        Ok(())
    }
}

define_instruction_with_operands!(Reg, RegInstruction, 0x8);
impl ExecutableOpcode for RegInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), ExecutionError> {
        /// Applies `f` to the values of registers `r1` and `r2`, stores the result
        /// in `r1` and, if `f` reports one, the flag in VF. The flag is written
        /// last, so it wins if `r1` is VF itself.
        fn modify_registers(
            state: &mut Chip8,
            r1: u8,
            r2: u8,
            f: fn(u8, u8) -> (u8, Option<bool>),
        ) {
            let (val, flag) = f(state.registers[r1 as usize], state.registers[r2 as usize]);
            state.registers[r1 as usize] = val;
            if let Some(flag) = flag {
                util::set_flag(state, flag);
            }
        }

        let cosmac = state.config.instruction_set == InstructionSet::Cosmac;
        let f: fn(u8, u8) -> (u8, Option<bool>) = match self.op3 {
            0x0 => |_, v2| (v2, None),
            0x1 => |v1, v2| (v1 | v2, None),
            0x2 => |v1, v2| (v1 & v2, None),
            0x3 => |v1, v2| (v1 ^ v2, None),
            0x4 => |v1, v2| {
                let (result, overflow) = v1.overflowing_add(v2);
                (result, Some(overflow))
            },
            0x5 => |v1, v2| (v1.wrapping_sub(v2), Some(v1 > v2)),
            0x6 if cosmac => |_, v2| (v2 >> 1, Some(v2 & 0x01 != 0)),
            0x6 => |v1, _| (v1 >> 1, Some(v1 & 0x01 != 0)),
            0x7 => |v1, v2| (v2.wrapping_sub(v1), Some(v2 > v1)),
            0xE if cosmac => |_, v2| (v2 << 1, Some(v2 & 0x80 != 0)),
            0xE => |v1, _| (v1 << 1, Some(v1 & 0x80 != 0)),
            _ => return Err(ExecutionError::UnknownOpcode),
        };
        modify_registers(state, self.op1, self.op2, f);
        Ok(())
    }
}

define_instruction_with_address!(Ld, LdInstruction, 0xA);
impl ExecutableOpcode for LdInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), ExecutionError> {
        state.index = u16::from(self.address);
        Ok(())
    }
}

define_instruction_with_reg_and_value!(Rnd, RndInstruction, 0xC);
impl ExecutableOpcode for RndInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), ExecutionError> {
        let sample: u8 = state.rng.gen();
        state.registers[self.reg as usize] = sample & self.value;
        Ok(())
    }
}

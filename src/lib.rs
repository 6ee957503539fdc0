//! An implementation of a CHIP-8 virtual machine. The implementation follows the instruction set
//! described [here](https://en.wikipedia.org/wiki/CHIP-8#Opcode_table). The instructions whose
//! meaning differs between the COSMAC VIP and the SUPER-CHIP interpreters can be switched via
//! [`chip::chip8::InstructionSet`]. For graphical output it relies on the cursive text user
//! interface library.
pub mod chip;

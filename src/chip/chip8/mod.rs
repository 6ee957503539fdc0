/// Configuration of the instruction set variant and error policy.
pub mod config;
/// CHIP-8 constants.
mod constants;
/// Cursive display output.
pub mod cursive_display;
/// Errors raised while executing instructions.
mod error;
/// Decoding of opcodes and their execution.
mod opcodes;
/// Convenience functions for modification of the CHIP-8 state.
mod util;


use std::fs::File;
use std::io::Read;

use rand::{rngs::StdRng, SeedableRng};
use ux::{u12, u4};

use crate::chip::{
    chip8::constants::{
        CHIP8_CHARSET, CHIP8_CHARSET_LEN, CHIP8_CHARSET_OFFSET, CHIP8_DISPLAY_SIZE,
        CHIP8_KEY_COUNT, CHIP8_MAX_PROGRAM_SIZE, CHIP8_MEMORY_SIZE, CHIP8_PROGRAM_START,
        CHIP8_REGISTER_COUNT, CHIP8_STACK_SIZE,
    },
    chip8::opcodes::Opcode,
    Chip, LoadProgramError,
};

pub use crate::chip::chip8::{
    config::{Chip8Config, InstructionSet, UnknownOpcodePolicy},
    constants::{CHIP8_DISPLAY_HEIGHT, CHIP8_DISPLAY_WIDTH},
    error::{Chip8Error, ExecutionError},
    opcodes::InstructionParsingError,
};

/// Represents the state of the CHIP-8.
pub struct Chip8 {
    /// 4096 bytes of main memory
    memory: [u8; CHIP8_MEMORY_SIZE],

    /// 16 registers where each can store one byte
    registers: [u8; CHIP8_REGISTER_COUNT],

    /// An index register
    index: u16,

    /// A program counter
    program_counter: u16,

    /// The output pins. Note that those are usually directly wired
    /// up to the pixels of the display. However, given that this implementation
    /// considers a display as optional, we refer to them as output_pins for
    /// the sake of generality.
    output_pins: [bool; CHIP8_DISPLAY_SIZE],

    /// The delay timer. Counted down by `tick_timers`.
    delay_timer: u8,

    /// The sound timer. Counted down by `tick_timers`.
    sound_timer: u8,

    /// The input pins. Note that those input pins are usually directly wired
    /// up to the keys. However, we do not prescribe how this is handled and
    /// hence refer to them as input pins rather than as keys.
    input_pins: [bool; CHIP8_KEY_COUNT],

    /// A stack. Note that there are no instructions allowing to modify the
    /// stack and it is only used to store return addresses for the return
    /// opcode.
    stack: [u16; CHIP8_STACK_SIZE],

    /// Number of return addresses currently on the stack. Zero means empty.
    stack_pointer: u8,

    /// A flag that indicates whether the output pins changed since it
    /// was last set to false.
    draw: bool,

    /// Fixed for the lifetime of the machine.
    config: Chip8Config,

    /// Source of randomness for the RND instruction.
    rng: StdRng,

    /// Whether a program has been loaded. Cycles are refused until then.
    program_loaded: bool,
}

impl Chip for Chip8 {
    /// A CHIP-8 has exactly 16 keys, so the pins are addressed by a nibble.
    type PinAddress = u4;

    /// A CHIP-8 memory address is in the range between 0 and 4096 (exclusive),
    /// which is exactly what fits into 12 bits.
    type MemoryAddress = u12;

    type Error = Chip8Error;

    fn load_program(&mut self, path: &str) -> Result<usize, LoadProgramError> {
        let mut file =
            File::open(path).map_err(|_| LoadProgramError::CouldNotOpenFile(path.to_string()))?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)
            .map_err(|_| LoadProgramError::CouldNotReadFile(path.to_string()))?;

        log::debug!("read {} bytes from {}", buffer.len(), path);
        self.load_program_bytes(&buffer)
    }

    fn load_program_bytes(&mut self, program: &[u8]) -> Result<usize, LoadProgramError> {
        if program.is_empty() {
            return Err(LoadProgramError::EmptyProgram);
        }
        if program.len() > CHIP8_MAX_PROGRAM_SIZE {
            return Err(LoadProgramError::ProgramTooLarge(program.len()));
        }

        let start = CHIP8_PROGRAM_START as usize;
        self.memory[start..start + program.len()].copy_from_slice(program);
        self.program_loaded = true;

        log::debug!(
            "loaded program of {} bytes at {:#06x}",
            program.len(),
            CHIP8_PROGRAM_START
        );
        Ok(program.len())
    }

    fn cycle(&mut self) -> Result<(), Chip8Error> {
        if !self.program_loaded {
            return Err(Chip8Error::NoProgramLoaded);
        }

        let address = self.program_counter;
        let opcode = self.next_instruction()?;
        log::trace!("{:#06x}: {}", address, opcode);
        let raw = opcode.raw();

        match opcode.execute(self) {
            Ok(()) => Ok(()),
            Err(ExecutionError::UnknownOpcode)
                if self.config.unknown_opcodes == UnknownOpcodePolicy::Continue =>
            {
                log::warn!("skipping unknown opcode {} at {:#06x}", opcode, address);
                Ok(())
            }
            Err(source) => {
                // Failed instructions leave the state untouched, undo the fetch as well.
                self.program_counter = address;
                Err(Chip8Error::Fault {
                    opcode: raw,
                    address,
                    source,
                })
            }
        }
    }

    fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }

    fn read_output_pins(&self) -> &[bool] {
        &self.output_pins
    }

    fn read_memory(&self, address: u12) -> u8 {
        self.memory[u16::from(address) as usize]
    }

    fn set_input_pin(&mut self, pin: u4, value: bool) {
        self.input_pins[u8::from(pin) as usize] = value;
    }

    fn reset_input_pins(&mut self) {
        self.input_pins = [false; CHIP8_KEY_COUNT];
    }
}

impl Chip8 {
    /// Constructs a new CHIP-8 using the default configuration. See `with_config`.
    pub fn new() -> Self {
        Chip8::with_config(Chip8Config::default())
    }

    /// Constructs a new CHIP-8 and appropriately initializes all fields so that
    /// it is ready for the first execution cycle. Essentially this means that
    /// the program counter is set to 0x200 and the default CHIP-8 charset is
    /// loaded at memory address `CHIP8_CHARSET_OFFSET`. Note that no program is
    /// loaded upon initialization.
    pub fn with_config(config: Chip8Config) -> Self {
        let mut memory = [0; CHIP8_MEMORY_SIZE];
        let charset_start = CHIP8_CHARSET_OFFSET as usize;
        memory[charset_start..charset_start + CHIP8_CHARSET_LEN as usize]
            .copy_from_slice(&CHIP8_CHARSET);

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        log::debug!("initialized CHIP-8 with {:?}", config);

        Chip8 {
            memory,
            registers: [0; CHIP8_REGISTER_COUNT],
            index: 0,
            program_counter: CHIP8_PROGRAM_START,
            output_pins: [false; CHIP8_DISPLAY_SIZE],
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; CHIP8_STACK_SIZE],
            stack_pointer: 0,
            input_pins: [false; CHIP8_KEY_COUNT],
            draw: false,
            config,
            rng,
            program_loaded: false,
        }
    }

    pub fn config(&self) -> &Chip8Config {
        &self.config
    }

    /// Whether the sound timer is currently running, i.e., whether a
    /// buzzer would be sounding.
    pub fn is_sound_active(&self) -> bool {
        self.sound_timer > 0
    }

    /// Fetches the next instruction based on the current state of
    /// `self.program_counter` and advances the program counter past it.
    fn next_instruction(&mut self) -> Result<Opcode, Chip8Error> {
        let pc = self.program_counter;
        if pc as usize + 1 >= CHIP8_MEMORY_SIZE {
            return Err(Chip8Error::ProgramCounterOutOfBounds(pc));
        }

        let opcode = Opcode::new(&[self.memory[pc as usize], self.memory[pc as usize + 1]]);
        util::increment_program_counter(self);
        Ok(opcode)
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Chip8::new()
    }
}

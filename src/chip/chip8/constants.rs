/// Size of the main memory in bytes.
pub(crate) const CHIP8_MEMORY_SIZE: usize = 4096;

/// Number of general purpose registers.
pub(crate) const CHIP8_REGISTER_COUNT: usize = 16;

/// Register overloaded as carry, borrow and collision flag.
pub(crate) const CHIP8_FLAG_REGISTER: usize = 0xF;

/// Depth of the call stack.
pub(crate) const CHIP8_STACK_SIZE: usize = 16;

/// Number of keys on the hexadecimal keypad.
pub(crate) const CHIP8_KEY_COUNT: usize = 16;

pub const CHIP8_DISPLAY_WIDTH: usize = 64;

pub const CHIP8_DISPLAY_HEIGHT: usize = 32;

pub const CHIP8_DISPLAY_SIZE: usize = CHIP8_DISPLAY_WIDTH * CHIP8_DISPLAY_HEIGHT;

/// Address at which programs are loaded and execution starts.
pub(crate) const CHIP8_PROGRAM_START: u16 = 0x200;

/// Everything from the program start to the end of memory is available to a program.
pub(crate) const CHIP8_MAX_PROGRAM_SIZE: usize = CHIP8_MEMORY_SIZE - CHIP8_PROGRAM_START as usize;

/// Threshold for the index register above which FX1E raises the flag register.
pub(crate) const CHIP8_INDEX_OVERFLOW: u16 = CHIP8_MEMORY_SIZE as u16;

pub(crate) const CHIP8_CHARSET_OFFSET: u16 = 0x000;

/// Height of a single glyph of the charset in bytes.
pub(crate) const CHIP8_GLYPH_SIZE: u16 = 5;

pub(crate) const CHIP8_CHARSET_LEN: u16 = 0x50; // 80

pub(crate) const CHIP8_CHARSET: [u8; CHIP8_CHARSET_LEN as usize] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

/// The two historical conventions for the ambiguous instructions
/// 8XY6, 8XYE, BNNN, FX55 and FX65.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionSet {
    /// The original COSMAC VIP interpreter. Shifts operate on VY, BNNN
    /// jumps relative to V0 and bulk load/store advance the index register.
    Cosmac,

    /// The SUPER-CHIP interpreter. Shifts operate on VX in place, BXNN
    /// jumps relative to VX and bulk load/store leave the index register alone.
    SuperChip,
}

impl Default for InstructionSet {
    fn default() -> Self {
        InstructionSet::SuperChip
    }
}

/// What to do when the program contains an opcode the machine does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownOpcodePolicy {
    /// Log the opcode and carry on with the next instruction.
    Continue,

    /// Stop execution with an error.
    Abort,
}

impl Default for UnknownOpcodePolicy {
    fn default() -> Self {
        UnknownOpcodePolicy::Continue
    }
}

/// Configuration of a CHIP-8. It is read once upon construction and stays
/// fixed for the lifetime of the machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chip8Config {
    pub instruction_set: InstructionSet,
    pub unknown_opcodes: UnknownOpcodePolicy,

    /// Seed for the random number generator used by CXNN. Seeded from
    /// system entropy if `None`.
    pub seed: Option<u64>,
}

impl Chip8Config {
    pub fn cosmac() -> Self {
        Chip8Config {
            instruction_set: InstructionSet::Cosmac,
            ..Default::default()
        }
    }

    pub fn super_chip() -> Self {
        Chip8Config {
            instruction_set: InstructionSet::SuperChip,
            ..Default::default()
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Chip8Config {
            seed: Some(seed),
            ..self
        }
    }

    pub fn with_unknown_opcodes(self, unknown_opcodes: UnknownOpcodePolicy) -> Self {
        Chip8Config {
            unknown_opcodes,
            ..self
        }
    }
}

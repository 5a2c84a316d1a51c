//! # Opcode Table
//!
//! The 256-entry table that drives instruction dispatch. Every opcode byte maps
//! to an [`Opcode`] describing the operation to run, the addressing mode that
//! locates its operand, and its base cycle count.
//!
//! Undocumented opcodes are not errors. They decode through the same table with
//! the addressing mode and cycle count the NMOS part uses, and execute as no-ops:
//!
//! - The unofficial NOP variants (`$1A`, `$04`, `$0C`, `$1C`, ...) are listed as
//!   `NOP` and consume their operand bytes.
//! - Every other undocumented opcode is listed as `???` and runs
//!   [`Operation::Illegal`], which has no effect beyond its operand fetch.
//! - The halt opcodes (`$02`, `$12`, ...) decode as 2-cycle implied no-ops.

use crate::addressing::AddressingMode;

/// The semantic operation an opcode performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Undocumented opcode; consumes its cycles and nothing else.
    Illegal,
}

/// Descriptor for a single opcode.
///
/// # Examples
///
/// ```
/// use rp2a03::{AddressingMode, Operation, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Instruction mnemonic, for diagnostics only ("???" for undocumented opcodes).
    pub mnemonic: &'static str,

    /// Operation handler to run.
    pub operation: Operation,

    /// Addressing mode resolver to run before the operation.
    pub mode: AddressingMode,

    /// Base cycle count, before branch and page-crossing penalties.
    pub cycles: u8,
}

impl Opcode {
    /// Total instruction size including the opcode byte.
    pub const fn size_bytes(&self) -> u8 {
        1 + self.mode.operand_bytes()
    }

    /// True for undocumented opcodes other than the unofficial NOPs.
    pub fn is_illegal(&self) -> bool {
        self.operation == Operation::Illegal
    }
}

const fn op(
    mnemonic: &'static str,
    operation: Operation,
    mode: AddressingMode,
    cycles: u8,
) -> Opcode {
    Opcode {
        mnemonic,
        operation,
        mode,
        cycles,
    }
}

use AddressingMode::*;
use Operation::*;

/// Complete 256-entry opcode table indexed by opcode byte value.
pub const OPCODE_TABLE: [Opcode; 256] = [
    // 0x00
    op("BRK", Brk, Implied, 7), // 0x00
    op("ORA", Ora, IndirectX, 6), // 0x01
    op("???", Illegal, Implied, 2), // 0x02
    op("???", Illegal, IndirectX, 8), // 0x03
    op("NOP", Nop, ZeroPage, 3), // 0x04
    op("ORA", Ora, ZeroPage, 3), // 0x05
    op("ASL", Asl, ZeroPage, 5), // 0x06
    op("???", Illegal, ZeroPage, 5), // 0x07
    op("PHP", Php, Implied, 3), // 0x08
    op("ORA", Ora, Immediate, 2), // 0x09
    op("ASL", Asl, Implied, 2), // 0x0A
    op("???", Illegal, Immediate, 2), // 0x0B
    op("NOP", Nop, Absolute, 4), // 0x0C
    op("ORA", Ora, Absolute, 4), // 0x0D
    op("ASL", Asl, Absolute, 6), // 0x0E
    op("???", Illegal, Absolute, 6), // 0x0F
    // 0x10
    op("BPL", Bpl, Relative, 2), // 0x10
    op("ORA", Ora, IndirectY, 5), // 0x11
    op("???", Illegal, Implied, 2), // 0x12
    op("???", Illegal, IndirectY, 8), // 0x13
    op("NOP", Nop, ZeroPageX, 4), // 0x14
    op("ORA", Ora, ZeroPageX, 4), // 0x15
    op("ASL", Asl, ZeroPageX, 6), // 0x16
    op("???", Illegal, ZeroPageX, 6), // 0x17
    op("CLC", Clc, Implied, 2), // 0x18
    op("ORA", Ora, AbsoluteY, 4), // 0x19
    op("NOP", Nop, Implied, 2), // 0x1A
    op("???", Illegal, AbsoluteY, 7), // 0x1B
    op("NOP", Nop, AbsoluteX, 4), // 0x1C
    op("ORA", Ora, AbsoluteX, 4), // 0x1D
    op("ASL", Asl, AbsoluteX, 7), // 0x1E
    op("???", Illegal, AbsoluteX, 7), // 0x1F
    // 0x20
    op("JSR", Jsr, Absolute, 6), // 0x20
    op("AND", And, IndirectX, 6), // 0x21
    op("???", Illegal, Implied, 2), // 0x22
    op("???", Illegal, IndirectX, 8), // 0x23
    op("BIT", Bit, ZeroPage, 3), // 0x24
    op("AND", And, ZeroPage, 3), // 0x25
    op("ROL", Rol, ZeroPage, 5), // 0x26
    op("???", Illegal, ZeroPage, 5), // 0x27
    op("PLP", Plp, Implied, 4), // 0x28
    op("AND", And, Immediate, 2), // 0x29
    op("ROL", Rol, Implied, 2), // 0x2A
    op("???", Illegal, Immediate, 2), // 0x2B
    op("BIT", Bit, Absolute, 4), // 0x2C
    op("AND", And, Absolute, 4), // 0x2D
    op("ROL", Rol, Absolute, 6), // 0x2E
    op("???", Illegal, Absolute, 6), // 0x2F
    // 0x30
    op("BMI", Bmi, Relative, 2), // 0x30
    op("AND", And, IndirectY, 5), // 0x31
    op("???", Illegal, Implied, 2), // 0x32
    op("???", Illegal, IndirectY, 8), // 0x33
    op("NOP", Nop, ZeroPageX, 4), // 0x34
    op("AND", And, ZeroPageX, 4), // 0x35
    op("ROL", Rol, ZeroPageX, 6), // 0x36
    op("???", Illegal, ZeroPageX, 6), // 0x37
    op("SEC", Sec, Implied, 2), // 0x38
    op("AND", And, AbsoluteY, 4), // 0x39
    op("NOP", Nop, Implied, 2), // 0x3A
    op("???", Illegal, AbsoluteY, 7), // 0x3B
    op("NOP", Nop, AbsoluteX, 4), // 0x3C
    op("AND", And, AbsoluteX, 4), // 0x3D
    op("ROL", Rol, AbsoluteX, 7), // 0x3E
    op("???", Illegal, AbsoluteX, 7), // 0x3F
    // 0x40
    op("RTI", Rti, Implied, 6), // 0x40
    op("EOR", Eor, IndirectX, 6), // 0x41
    op("???", Illegal, Implied, 2), // 0x42
    op("???", Illegal, IndirectX, 8), // 0x43
    op("NOP", Nop, ZeroPage, 3), // 0x44
    op("EOR", Eor, ZeroPage, 3), // 0x45
    op("LSR", Lsr, ZeroPage, 5), // 0x46
    op("???", Illegal, ZeroPage, 5), // 0x47
    op("PHA", Pha, Implied, 3), // 0x48
    op("EOR", Eor, Immediate, 2), // 0x49
    op("LSR", Lsr, Implied, 2), // 0x4A
    op("???", Illegal, Immediate, 2), // 0x4B
    op("JMP", Jmp, Absolute, 3), // 0x4C
    op("EOR", Eor, Absolute, 4), // 0x4D
    op("LSR", Lsr, Absolute, 6), // 0x4E
    op("???", Illegal, Absolute, 6), // 0x4F
    // 0x50
    op("BVC", Bvc, Relative, 2), // 0x50
    op("EOR", Eor, IndirectY, 5), // 0x51
    op("???", Illegal, Implied, 2), // 0x52
    op("???", Illegal, IndirectY, 8), // 0x53
    op("NOP", Nop, ZeroPageX, 4), // 0x54
    op("EOR", Eor, ZeroPageX, 4), // 0x55
    op("LSR", Lsr, ZeroPageX, 6), // 0x56
    op("???", Illegal, ZeroPageX, 6), // 0x57
    op("CLI", Cli, Implied, 2), // 0x58
    op("EOR", Eor, AbsoluteY, 4), // 0x59
    op("NOP", Nop, Implied, 2), // 0x5A
    op("???", Illegal, AbsoluteY, 7), // 0x5B
    op("NOP", Nop, AbsoluteX, 4), // 0x5C
    op("EOR", Eor, AbsoluteX, 4), // 0x5D
    op("LSR", Lsr, AbsoluteX, 7), // 0x5E
    op("???", Illegal, AbsoluteX, 7), // 0x5F
    // 0x60
    op("RTS", Rts, Implied, 6), // 0x60
    op("ADC", Adc, IndirectX, 6), // 0x61
    op("???", Illegal, Implied, 2), // 0x62
    op("???", Illegal, IndirectX, 8), // 0x63
    op("NOP", Nop, ZeroPage, 3), // 0x64
    op("ADC", Adc, ZeroPage, 3), // 0x65
    op("ROR", Ror, ZeroPage, 5), // 0x66
    op("???", Illegal, ZeroPage, 5), // 0x67
    op("PLA", Pla, Implied, 4), // 0x68
    op("ADC", Adc, Immediate, 2), // 0x69
    op("ROR", Ror, Implied, 2), // 0x6A
    op("???", Illegal, Immediate, 2), // 0x6B
    op("JMP", Jmp, Indirect, 5), // 0x6C
    op("ADC", Adc, Absolute, 4), // 0x6D
    op("ROR", Ror, Absolute, 6), // 0x6E
    op("???", Illegal, Absolute, 6), // 0x6F
    // 0x70
    op("BVS", Bvs, Relative, 2), // 0x70
    op("ADC", Adc, IndirectY, 5), // 0x71
    op("???", Illegal, Implied, 2), // 0x72
    op("???", Illegal, IndirectY, 8), // 0x73
    op("NOP", Nop, ZeroPageX, 4), // 0x74
    op("ADC", Adc, ZeroPageX, 4), // 0x75
    op("ROR", Ror, ZeroPageX, 6), // 0x76
    op("???", Illegal, ZeroPageX, 6), // 0x77
    op("SEI", Sei, Implied, 2), // 0x78
    op("ADC", Adc, AbsoluteY, 4), // 0x79
    op("NOP", Nop, Implied, 2), // 0x7A
    op("???", Illegal, AbsoluteY, 7), // 0x7B
    op("NOP", Nop, AbsoluteX, 4), // 0x7C
    op("ADC", Adc, AbsoluteX, 4), // 0x7D
    op("ROR", Ror, AbsoluteX, 7), // 0x7E
    op("???", Illegal, AbsoluteX, 7), // 0x7F
    // 0x80
    op("NOP", Nop, Immediate, 2), // 0x80
    op("STA", Sta, IndirectX, 6), // 0x81
    op("NOP", Nop, Immediate, 2), // 0x82
    op("???", Illegal, IndirectX, 6), // 0x83
    op("STY", Sty, ZeroPage, 3), // 0x84
    op("STA", Sta, ZeroPage, 3), // 0x85
    op("STX", Stx, ZeroPage, 3), // 0x86
    op("???", Illegal, ZeroPage, 3), // 0x87
    op("DEY", Dey, Implied, 2), // 0x88
    op("NOP", Nop, Immediate, 2), // 0x89
    op("TXA", Txa, Implied, 2), // 0x8A
    op("???", Illegal, Immediate, 2), // 0x8B
    op("STY", Sty, Absolute, 4), // 0x8C
    op("STA", Sta, Absolute, 4), // 0x8D
    op("STX", Stx, Absolute, 4), // 0x8E
    op("???", Illegal, Absolute, 4), // 0x8F
    // 0x90
    op("BCC", Bcc, Relative, 2), // 0x90
    op("STA", Sta, IndirectY, 6), // 0x91
    op("???", Illegal, Implied, 2), // 0x92
    op("???", Illegal, IndirectY, 6), // 0x93
    op("STY", Sty, ZeroPageX, 4), // 0x94
    op("STA", Sta, ZeroPageX, 4), // 0x95
    op("STX", Stx, ZeroPageY, 4), // 0x96
    op("???", Illegal, ZeroPageY, 4), // 0x97
    op("TYA", Tya, Implied, 2), // 0x98
    op("STA", Sta, AbsoluteY, 5), // 0x99
    op("TXS", Txs, Implied, 2), // 0x9A
    op("???", Illegal, AbsoluteY, 5), // 0x9B
    op("???", Illegal, AbsoluteX, 5), // 0x9C
    op("STA", Sta, AbsoluteX, 5), // 0x9D
    op("???", Illegal, AbsoluteY, 5), // 0x9E
    op("???", Illegal, AbsoluteY, 5), // 0x9F
    // 0xA0
    op("LDY", Ldy, Immediate, 2), // 0xA0
    op("LDA", Lda, IndirectX, 6), // 0xA1
    op("LDX", Ldx, Immediate, 2), // 0xA2
    op("???", Illegal, IndirectX, 6), // 0xA3
    op("LDY", Ldy, ZeroPage, 3), // 0xA4
    op("LDA", Lda, ZeroPage, 3), // 0xA5
    op("LDX", Ldx, ZeroPage, 3), // 0xA6
    op("???", Illegal, ZeroPage, 3), // 0xA7
    op("TAY", Tay, Implied, 2), // 0xA8
    op("LDA", Lda, Immediate, 2), // 0xA9
    op("TAX", Tax, Implied, 2), // 0xAA
    op("???", Illegal, Immediate, 2), // 0xAB
    op("LDY", Ldy, Absolute, 4), // 0xAC
    op("LDA", Lda, Absolute, 4), // 0xAD
    op("LDX", Ldx, Absolute, 4), // 0xAE
    op("???", Illegal, Absolute, 4), // 0xAF
    // 0xB0
    op("BCS", Bcs, Relative, 2), // 0xB0
    op("LDA", Lda, IndirectY, 5), // 0xB1
    op("???", Illegal, Implied, 2), // 0xB2
    op("???", Illegal, IndirectY, 5), // 0xB3
    op("LDY", Ldy, ZeroPageX, 4), // 0xB4
    op("LDA", Lda, ZeroPageX, 4), // 0xB5
    op("LDX", Ldx, ZeroPageY, 4), // 0xB6
    op("???", Illegal, ZeroPageY, 4), // 0xB7
    op("CLV", Clv, Implied, 2), // 0xB8
    op("LDA", Lda, AbsoluteY, 4), // 0xB9
    op("TSX", Tsx, Implied, 2), // 0xBA
    op("???", Illegal, AbsoluteY, 4), // 0xBB
    op("LDY", Ldy, AbsoluteX, 4), // 0xBC
    op("LDA", Lda, AbsoluteX, 4), // 0xBD
    op("LDX", Ldx, AbsoluteY, 4), // 0xBE
    op("???", Illegal, AbsoluteY, 4), // 0xBF
    // 0xC0
    op("CPY", Cpy, Immediate, 2), // 0xC0
    op("CMP", Cmp, IndirectX, 6), // 0xC1
    op("NOP", Nop, Immediate, 2), // 0xC2
    op("???", Illegal, IndirectX, 8), // 0xC3
    op("CPY", Cpy, ZeroPage, 3), // 0xC4
    op("CMP", Cmp, ZeroPage, 3), // 0xC5
    op("DEC", Dec, ZeroPage, 5), // 0xC6
    op("???", Illegal, ZeroPage, 5), // 0xC7
    op("INY", Iny, Implied, 2), // 0xC8
    op("CMP", Cmp, Immediate, 2), // 0xC9
    op("DEX", Dex, Implied, 2), // 0xCA
    op("???", Illegal, Immediate, 2), // 0xCB
    op("CPY", Cpy, Absolute, 4), // 0xCC
    op("CMP", Cmp, Absolute, 4), // 0xCD
    op("DEC", Dec, Absolute, 6), // 0xCE
    op("???", Illegal, Absolute, 6), // 0xCF
    // 0xD0
    op("BNE", Bne, Relative, 2), // 0xD0
    op("CMP", Cmp, IndirectY, 5), // 0xD1
    op("???", Illegal, Implied, 2), // 0xD2
    op("???", Illegal, IndirectY, 8), // 0xD3
    op("NOP", Nop, ZeroPageX, 4), // 0xD4
    op("CMP", Cmp, ZeroPageX, 4), // 0xD5
    op("DEC", Dec, ZeroPageX, 6), // 0xD6
    op("???", Illegal, ZeroPageX, 6), // 0xD7
    op("CLD", Cld, Implied, 2), // 0xD8
    op("CMP", Cmp, AbsoluteY, 4), // 0xD9
    op("NOP", Nop, Implied, 2), // 0xDA
    op("???", Illegal, AbsoluteY, 7), // 0xDB
    op("NOP", Nop, AbsoluteX, 4), // 0xDC
    op("CMP", Cmp, AbsoluteX, 4), // 0xDD
    op("DEC", Dec, AbsoluteX, 7), // 0xDE
    op("???", Illegal, AbsoluteX, 7), // 0xDF
    // 0xE0
    op("CPX", Cpx, Immediate, 2), // 0xE0
    op("SBC", Sbc, IndirectX, 6), // 0xE1
    op("NOP", Nop, Immediate, 2), // 0xE2
    op("???", Illegal, IndirectX, 8), // 0xE3
    op("CPX", Cpx, ZeroPage, 3), // 0xE4
    op("SBC", Sbc, ZeroPage, 3), // 0xE5
    op("INC", Inc, ZeroPage, 5), // 0xE6
    op("???", Illegal, ZeroPage, 5), // 0xE7
    op("INX", Inx, Implied, 2), // 0xE8
    op("SBC", Sbc, Immediate, 2), // 0xE9
    op("NOP", Nop, Implied, 2), // 0xEA
    op("???", Illegal, Immediate, 2), // 0xEB
    op("CPX", Cpx, Absolute, 4), // 0xEC
    op("SBC", Sbc, Absolute, 4), // 0xED
    op("INC", Inc, Absolute, 6), // 0xEE
    op("???", Illegal, Absolute, 6), // 0xEF
    // 0xF0
    op("BEQ", Beq, Relative, 2), // 0xF0
    op("SBC", Sbc, IndirectY, 5), // 0xF1
    op("???", Illegal, Implied, 2), // 0xF2
    op("???", Illegal, IndirectY, 8), // 0xF3
    op("NOP", Nop, ZeroPageX, 4), // 0xF4
    op("SBC", Sbc, ZeroPageX, 4), // 0xF5
    op("INC", Inc, ZeroPageX, 6), // 0xF6
    op("???", Illegal, ZeroPageX, 6), // 0xF7
    op("SED", Sed, Implied, 2), // 0xF8
    op("SBC", Sbc, AbsoluteY, 4), // 0xF9
    op("NOP", Nop, Implied, 2), // 0xFA
    op("???", Illegal, AbsoluteY, 7), // 0xFB
    op("NOP", Nop, AbsoluteX, 4), // 0xFC
    op("SBC", Sbc, AbsoluteX, 4), // 0xFD
    op("INC", Inc, AbsoluteX, 7), // 0xFE
    op("???", Illegal, AbsoluteX, 7), // 0xFF
];

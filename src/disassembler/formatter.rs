//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;
use crate::opcodes::Operation;
use crate::OPCODE_TABLE;

/// Format a single instruction as assembly text
///
/// Accumulator forms of the shift instructions print their `A` operand, and
/// branch targets are shown as absolute addresses.
pub fn format_instruction(instr: &Instruction) -> String {
    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

fn is_accumulator_shift(opcode: u8) -> bool {
    let entry = &OPCODE_TABLE[opcode as usize];
    entry.mode == AddressingMode::Implied
        && matches!(
            entry.operation,
            Operation::Asl | Operation::Lsr | Operation::Rol | Operation::Ror
        )
}

/// Format the operand based on addressing mode
fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    if instr.mnemonic == ".byte" {
        return format!("${:02X}", instr.opcode);
    }

    let byte = instr.operand_bytes.first().copied().unwrap_or(0);
    let word = match instr.operand_bytes.as_slice() {
        [lo, hi, ..] => u16::from_le_bytes([*lo, *hi]),
        _ => byte as u16,
    };

    match instr.addressing_mode {
        Implied if is_accumulator_shift(instr.opcode) => "A".to_string(),
        Implied => String::new(),
        Immediate => format!("#${:02X}", byte),
        ZeroPage => format!("${:02X}", byte),
        ZeroPageX => format!("${:02X},X", byte),
        ZeroPageY => format!("${:02X},Y", byte),
        Relative => {
            let target = instr
                .address
                .wrapping_add(2)
                .wrapping_add(byte as i8 as u16);
            format!("${:04X}", target)
        }
        Absolute => format!("${:04X}", word),
        AbsoluteX => format!("${:04X},X", word),
        AbsoluteY => format!("${:04X},Y", word),
        Indirect => format!("(${:04X})", word),
        IndirectX => format!("(${:02X},X)", byte),
        IndirectY => format!("(${:02X}),Y", byte),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disassembler::decoder::{data_byte, decode_instruction};

    fn format_bytes(bytes: &[u8], address: u16) -> String {
        format_instruction(&decode_instruction(bytes, address).unwrap())
    }

    #[test]
    fn test_format_immediate() {
        assert_eq!(format_bytes(&[0xA9, 0x42], 0x8000), "LDA #$42");
    }

    #[test]
    fn test_format_absolute() {
        assert_eq!(format_bytes(&[0x8D, 0x00, 0x80], 0x0000), "STA $8000");
    }

    #[test]
    fn test_format_implied_and_accumulator() {
        assert_eq!(format_bytes(&[0xEA], 0x1000), "NOP");
        assert_eq!(format_bytes(&[0x0A], 0x1000), "ASL A");
        assert_eq!(format_bytes(&[0x6A], 0x1000), "ROR A");
    }

    #[test]
    fn test_format_indirect_modes() {
        assert_eq!(format_bytes(&[0x6C, 0xFF, 0x10], 0x0000), "JMP ($10FF)");
        assert_eq!(format_bytes(&[0xA1, 0x40], 0x0000), "LDA ($40,X)");
        assert_eq!(format_bytes(&[0xB1, 0x40], 0x0000), "LDA ($40),Y");
    }

    #[test]
    fn test_format_branch_targets() {
        assert_eq!(format_bytes(&[0xB0, 0x0F], 0x00FE), "BCS $010F");
        assert_eq!(format_bytes(&[0xD0, 0xFE], 0x8000), "BNE $8000");
    }

    #[test]
    fn test_format_illegal_opcode() {
        assert_eq!(format_instruction(&data_byte(0xFF, 0x2000)), ".byte $FF");
    }
}

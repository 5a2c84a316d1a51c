//! Instruction decoder for the 6502 disassembler

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;
use crate::opcodes::OPCODE_TABLE;

/// Decode a single instruction from a byte slice
///
/// # Returns
///
/// `Some(Instruction)` for documented opcodes and unofficial NOPs, `None` for
/// other undocumented opcodes or when the slice is too short.
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;
    let entry = &OPCODE_TABLE[opcode as usize];

    if entry.is_illegal() {
        return None;
    }

    let operand_len = entry.mode.operand_bytes() as usize;
    let operand_bytes = rest.get(..operand_len)?.to_vec();

    Some(Instruction {
        address,
        opcode,
        mnemonic: entry.mnemonic,
        addressing_mode: entry.mode,
        operand_bytes,
        size_bytes: entry.size_bytes(),
        base_cycles: entry.cycles,
    })
}

/// A `.byte` entry for a byte that does not decode as an instruction.
pub fn data_byte(value: u8, address: u16) -> Instruction {
    Instruction {
        address,
        opcode: value,
        mnemonic: ".byte",
        addressing_mode: AddressingMode::Implied,
        operand_bytes: vec![value],
        size_bytes: 1,
        base_cycles: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_lda_immediate() {
        let instr = decode_instruction(&[0xA9, 0x42], 0x8000).unwrap();

        assert_eq!(instr.address, 0x8000);
        assert_eq!(instr.opcode, 0xA9);
        assert_eq!(instr.mnemonic, "LDA");
        assert_eq!(instr.addressing_mode, AddressingMode::Immediate);
        assert_eq!(instr.operand_bytes, vec![0x42]);
        assert_eq!(instr.size_bytes, 2);
    }

    #[test]
    fn test_decode_sta_absolute() {
        let instr = decode_instruction(&[0x8D, 0x00, 0x80], 0x0000).unwrap();

        assert_eq!(instr.mnemonic, "STA");
        assert_eq!(instr.addressing_mode, AddressingMode::Absolute);
        assert_eq!(instr.operand_bytes, vec![0x00, 0x80]);
        assert_eq!(instr.size_bytes, 3);
        assert_eq!(instr.base_cycles, 4);
    }

    #[test]
    fn test_decode_unofficial_nop_consumes_operand() {
        let instr = decode_instruction(&[0x0C, 0x00, 0x20], 0x1000).unwrap();
        assert_eq!(instr.mnemonic, "NOP");
        assert_eq!(instr.size_bytes, 3);
    }

    #[test]
    fn test_decode_illegal_and_short() {
        assert!(decode_instruction(&[0x02], 0x0000).is_none());
        assert!(decode_instruction(&[0xAD, 0x00], 0x0000).is_none());
        assert!(decode_instruction(&[], 0x0000).is_none());
    }
}

//! 6502 Disassembler Module
//!
//! Converts machine code into human-readable assembly for debug tooling. Code
//! can be decoded from a byte slice or straight from a bus; the bus path only
//! uses [`MemoryBus::peek`], so disassembling never disturbs I/O state.

pub mod decoder;
pub mod formatter;

use crate::addressing::AddressingMode;
use crate::MemoryBus;

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA", "JMP")
    pub mnemonic: &'static str,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Base cycle cost (excluding branch and page-crossing penalties)
    pub base_cycles: u8,
}

/// Options controlling disassembly
#[derive(Debug, Clone, Copy, Default)]
pub struct DisassemblyOptions {
    /// Address of the first byte (affects address display and branch targets)
    pub start_address: u16,
}

/// Disassemble a byte slice into a vector of instructions
///
/// Undocumented opcodes and instructions truncated by the end of the slice
/// become single-byte `.byte` entries.
///
/// # Examples
///
/// ```
/// use rp2a03::{disassemble, format_instruction, DisassemblyOptions};
///
/// let code = [0xA9, 0x42, 0x8D, 0x00, 0x02];
/// let lines: Vec<String> = disassemble(&code, DisassemblyOptions::default())
///     .iter()
///     .map(format_instruction)
///     .collect();
/// assert_eq!(lines, ["LDA #$42", "STA $0200"]);
/// ```
pub fn disassemble(bytes: &[u8], options: DisassemblyOptions) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut offset = 0;
    let mut address = options.start_address;

    while offset < bytes.len() {
        let instr = decoder::decode_instruction(&bytes[offset..], address)
            .unwrap_or_else(|| decoder::data_byte(bytes[offset], address));
        offset += instr.size_bytes as usize;
        address = address.wrapping_add(instr.size_bytes as u16);
        instructions.push(instr);
    }

    instructions
}

/// Disassemble `count` instructions from a bus, starting at `start`.
///
/// Reads wrap around at 0xFFFF.
pub fn disassemble_bus<B: MemoryBus>(bus: &B, start: u16, count: usize) -> Vec<Instruction> {
    let mut instructions = Vec::with_capacity(count);
    let mut address = start;

    for _ in 0..count {
        let window = [
            bus.peek(address),
            bus.peek(address.wrapping_add(1)),
            bus.peek(address.wrapping_add(2)),
        ];
        let instr = decoder::decode_instruction(&window, address)
            .unwrap_or_else(|| decoder::data_byte(window[0], address));
        address = address.wrapping_add(instr.size_bytes as u16);
        instructions.push(instr);
    }

    instructions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SystemBus;

    #[test]
    fn test_disassemble_empty() {
        let bytes = &[];
        let instructions = disassemble(bytes, DisassemblyOptions::default());
        assert_eq!(instructions.len(), 0);
    }

    #[test]
    fn test_disassemble_truncated_operand() {
        let instructions = disassemble(&[0xEA, 0xAD, 0x00], DisassemblyOptions::default());
        assert_eq!(instructions.len(), 3);
        assert_eq!(instructions[0].mnemonic, "NOP");
        assert_eq!(instructions[1].mnemonic, ".byte");
        assert_eq!(instructions[2].mnemonic, ".byte");
        assert_eq!(instructions[2].address, 0x0002);
    }

    #[test]
    fn test_disassemble_bus_wraps() {
        let mut bus = SystemBus::new();
        bus.write(0xFFFF, 0x4C).unwrap(); // JMP $1234, operand wraps to $0000
        bus.write(0x0000, 0x34).unwrap();
        bus.write(0x0001, 0x12).unwrap();

        let instructions = disassemble_bus(&bus, 0xFFFF, 2);
        assert_eq!(instructions[0].mnemonic, "JMP");
        assert_eq!(instructions[0].operand_bytes, vec![0x34, 0x12]);
        assert_eq!(instructions[1].address, 0x0002);
    }
}

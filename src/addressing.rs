//! # Addressing Modes
//!
//! This module defines the 12 addressing modes of the 6502 and the resolvers
//! that turn the bytes following an opcode into an effective address.
//!
//! Each resolver reads its operand bytes at the program counter (advancing it),
//! leaves the effective address in `addr_abs` (or the branch offset in
//! `addr_rel`), and reports whether indexing crossed a page boundary. Whether
//! that crossing costs a cycle is decided together with the operation.

use crate::{Cpu, CpuError, MemoryBus};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied (including accumulator forms such as `ASL A`)
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand. The accumulator is latched as the operand so that
    /// accumulator forms (ASL A, ROR A, ...) share the memory code path.
    Implied,

    /// 8-bit constant following the opcode.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X. May cross a page.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y. May cross a page.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y. May cross a page.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// True when `a` and `b` lie on different 256-byte pages.
pub(crate) fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

impl<B: MemoryBus> Cpu<B> {
    /// Resolves the operand location for `mode`.
    ///
    /// Returns `true` if indexing crossed a page boundary.
    pub(crate) fn resolve_address(&mut self, mode: AddressingMode) -> Result<bool, CpuError> {
        match mode {
            AddressingMode::Implied => {
                self.fetched = self.a;
                Ok(false)
            }
            AddressingMode::Immediate => {
                self.addr_abs = self.pc;
                self.pc = self.pc.wrapping_add(1);
                Ok(false)
            }
            AddressingMode::ZeroPage => {
                self.addr_abs = self.next_byte()? as u16;
                Ok(false)
            }
            AddressingMode::ZeroPageX => {
                self.addr_abs = self.next_byte()?.wrapping_add(self.x) as u16;
                Ok(false)
            }
            AddressingMode::ZeroPageY => {
                self.addr_abs = self.next_byte()?.wrapping_add(self.y) as u16;
                Ok(false)
            }
            AddressingMode::Relative => {
                // Sign-extend bit 7 across the high byte
                self.addr_rel = self.next_byte()? as i8 as u16;
                Ok(false)
            }
            AddressingMode::Absolute => {
                self.addr_abs = self.next_word()?;
                Ok(false)
            }
            AddressingMode::AbsoluteX => {
                let base = self.next_word()?;
                self.addr_abs = base.wrapping_add(self.x as u16);
                Ok(page_crossed(base, self.addr_abs))
            }
            AddressingMode::AbsoluteY => {
                let base = self.next_word()?;
                self.addr_abs = base.wrapping_add(self.y as u16);
                Ok(page_crossed(base, self.addr_abs))
            }
            AddressingMode::Indirect => {
                let ptr = self.next_word()?;

                // Hardware bug: the pointer's high byte never carries into the
                // next page, so JMP ($10FF) reads $10FF and $1000.
                let hi_ptr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let lo = self.read(ptr)? as u16;
                let hi = self.read(hi_ptr)? as u16;
                self.addr_abs = (hi << 8) | lo;
                Ok(false)
            }
            AddressingMode::IndirectX => {
                let zp = self.next_byte()?.wrapping_add(self.x);
                self.addr_abs = self.read_zero_page_word(zp)?;
                Ok(false)
            }
            AddressingMode::IndirectY => {
                let zp = self.next_byte()?;
                let base = self.read_zero_page_word(zp)?;
                self.addr_abs = base.wrapping_add(self.y as u16);
                Ok(page_crossed(base, self.addr_abs))
            }
        }
    }

    /// Reads the byte at PC and advances PC.
    fn next_byte(&mut self) -> Result<u8, CpuError> {
        let value = self.read(self.pc)?;
        self.pc = self.pc.wrapping_add(1);
        Ok(value)
    }

    /// Reads a little-endian word at PC and advances PC by two.
    fn next_word(&mut self) -> Result<u16, CpuError> {
        let lo = self.next_byte()? as u16;
        let hi = self.next_byte()? as u16;
        Ok((hi << 8) | lo)
    }

    /// Reads a little-endian pointer from zero page; the high byte wraps to $00.
    fn read_zero_page_word(&mut self, zp: u8) -> Result<u16, CpuError> {
        let lo = self.read(zp as u16)? as u16;
        let hi = self.read(zp.wrapping_add(1) as u16)? as u16;
        Ok((hi << 8) | lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SystemBus;

    fn cpu_with(program: &[u8]) -> Cpu<SystemBus> {
        let mut bus = SystemBus::new();
        bus.load(0x0200, program).unwrap();
        let mut cpu = Cpu::new();
        cpu.connect_bus(bus);
        cpu.set_pc(0x0200);
        cpu
    }

    #[test]
    fn test_operand_bytes() {
        assert_eq!(AddressingMode::Implied.operand_bytes(), 0);
        assert_eq!(AddressingMode::Relative.operand_bytes(), 1);
        assert_eq!(AddressingMode::IndirectY.operand_bytes(), 1);
        assert_eq!(AddressingMode::Indirect.operand_bytes(), 2);
    }

    #[test]
    fn test_relative_sign_extension() {
        let mut cpu = cpu_with(&[0x80]);
        assert!(!cpu.resolve_address(AddressingMode::Relative).unwrap());
        assert_eq!(cpu.addr_rel, 0xFF80);
        assert_eq!(cpu.pc(), 0x0201);

        let mut cpu = cpu_with(&[0x7F]);
        cpu.resolve_address(AddressingMode::Relative).unwrap();
        assert_eq!(cpu.addr_rel, 0x007F);
    }

    #[test]
    fn test_absolute_x_page_cross() {
        let mut cpu = cpu_with(&[0xFF, 0x12]);
        cpu.set_x(0x01);
        assert!(cpu.resolve_address(AddressingMode::AbsoluteX).unwrap());
        assert_eq!(cpu.addr_abs, 0x1300);
        assert_eq!(cpu.pc(), 0x0202);

        let mut cpu = cpu_with(&[0x00, 0x12]);
        cpu.set_x(0xFF);
        assert!(!cpu.resolve_address(AddressingMode::AbsoluteX).unwrap());
        assert_eq!(cpu.addr_abs, 0x12FF);
    }

    #[test]
    fn test_zero_page_x_wraps() {
        let mut cpu = cpu_with(&[0xF0]);
        cpu.set_x(0x20);
        cpu.resolve_address(AddressingMode::ZeroPageX).unwrap();
        assert_eq!(cpu.addr_abs, 0x0010);
    }

    #[test]
    fn test_indirect_page_bug() {
        let mut cpu = cpu_with(&[0xFF, 0x10]);
        cpu.write_to_bus(0x10FF, 0x34).unwrap();
        cpu.write_to_bus(0x1000, 0x12).unwrap();
        cpu.write_to_bus(0x1100, 0x56).unwrap();

        cpu.resolve_address(AddressingMode::Indirect).unwrap();
        assert_eq!(cpu.addr_abs, 0x1234);
    }

    #[test]
    fn test_indirect_x_pointer_wraps_in_zero_page() {
        let mut cpu = cpu_with(&[0xFE]);
        cpu.set_x(0x01);
        cpu.write_to_bus(0x00FF, 0x00).unwrap();
        cpu.write_to_bus(0x0000, 0x30).unwrap();

        cpu.resolve_address(AddressingMode::IndirectX).unwrap();
        assert_eq!(cpu.addr_abs, 0x3000);
    }

    #[test]
    fn test_indirect_y_page_cross() {
        let mut cpu = cpu_with(&[0x40]);
        cpu.set_y(0x10);
        cpu.write_to_bus(0x0040, 0xF8).unwrap();
        cpu.write_to_bus(0x0041, 0x20).unwrap();

        assert!(cpu.resolve_address(AddressingMode::IndirectY).unwrap());
        assert_eq!(cpu.addr_abs, 0x2108);
    }
}

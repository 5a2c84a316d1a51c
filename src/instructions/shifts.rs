//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! In implied mode (`ASL A` etc.) the accumulator is the operand and receives
//! the result; otherwise the memory operand is read, modified and written back.
//! All four update C, Z and N.

use crate::{AddressingMode, Cpu, CpuError, MemoryBus, Status};

/// Stores a shift result to the accumulator or back to memory.
fn write_back<B: MemoryBus>(cpu: &mut Cpu<B>, result: u8) -> Result<(), CpuError> {
    if cpu.mode == AddressingMode::Implied {
        cpu.a = result;
    } else {
        cpu.write(cpu.addr_abs, result)?;
    }
    cpu.set_zn(result);
    Ok(())
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 goes to carry, bit 0 becomes 0.
pub(crate) fn execute_asl<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    let value = cpu.fetch()?;
    cpu.status.set(Status::CARRY, value & 0x80 != 0);
    write_back(cpu, value << 1)?;
    Ok(false)
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to carry, bit 7 becomes 0.
pub(crate) fn execute_lsr<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    let value = cpu.fetch()?;
    cpu.status.set(Status::CARRY, value & 0x01 != 0);
    write_back(cpu, value >> 1)?;
    Ok(false)
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Old carry enters bit 0, bit 7 goes to carry.
pub(crate) fn execute_rol<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    let value = cpu.fetch()?;
    let carry_in = cpu.status.contains(Status::CARRY) as u8;
    cpu.status.set(Status::CARRY, value & 0x80 != 0);
    write_back(cpu, (value << 1) | carry_in)?;
    Ok(false)
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Old carry enters bit 7, bit 0 goes to carry.
pub(crate) fn execute_ror<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    let value = cpu.fetch()?;
    let carry_in = (cpu.status.contains(Status::CARRY) as u8) << 7;
    cpu.status.set(Status::CARRY, value & 0x01 != 0);
    write_back(cpu, (value >> 1) | carry_in)?;
    Ok(false)
}

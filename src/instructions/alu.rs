//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic, logical and compare operations:
//! - ADC, SBC: Add / subtract with carry (binary only; the 2A03 has no decimal mode)
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - BIT: Bit test
//! - CMP, CPX, CPY: Compare register with memory

use crate::{Cpu, CpuError, MemoryBus, Status};

/// Adds `value` plus carry to the accumulator, setting C, V, Z and N.
///
/// Overflow occurs when both operands share a sign the result does not:
/// V = (A ^ result) & (M ^ result) & 0x80.
fn add_with_carry<B: MemoryBus>(cpu: &mut Cpu<B>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.status.contains(Status::CARRY) as u16;

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.status.set(Status::CARRY, sum > 0xFF);
    cpu.status
        .set(Status::OVERFLOW, (a ^ result) & (value ^ result) & 0x80 != 0);
    cpu.set_zn(result);
    cpu.a = result;
}

/// Executes the ADC (Add with Carry) instruction.
///
/// A = A + M + C. Updates C, V, Z and N.
pub(crate) fn execute_adc<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    let value = cpu.fetch()?;
    add_with_carry(cpu, value);
    Ok(true)
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A = A - M - (1 - C), computed as A + !M + C so that carry means "no borrow".
pub(crate) fn execute_sbc<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    let value = cpu.fetch()?;
    add_with_carry(cpu, !value);
    Ok(true)
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    let value = cpu.fetch()?;
    cpu.a &= value;
    cpu.set_zn(cpu.a);
    Ok(true)
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    let value = cpu.fetch()?;
    cpu.a |= value;
    cpu.set_zn(cpu.a);
    Ok(true)
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    let value = cpu.fetch()?;
    cpu.a ^= value;
    cpu.set_zn(cpu.a);
    Ok(true)
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from A & M; bits 7 and 6 of M are copied into N and V. The
/// accumulator is not modified.
pub(crate) fn execute_bit<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    let value = cpu.fetch()?;
    cpu.status.set(Status::ZERO, cpu.a & value == 0);
    cpu.status.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.status.set(Status::OVERFLOW, value & 0x40 != 0);
    Ok(false)
}

/// Shared compare: C if register >= M, Z if equal, N from bit 7 of the difference.
fn compare<B: MemoryBus>(cpu: &mut Cpu<B>, register: u8) -> Result<(), CpuError> {
    let value = cpu.fetch()?;
    cpu.status.set(Status::CARRY, register >= value);
    cpu.set_zn(register.wrapping_sub(value));
    Ok(())
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    let register = cpu.a;
    compare(cpu, register)?;
    Ok(true)
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    let register = cpu.x;
    compare(cpu, register)?;
    Ok(false)
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    let register = cpu.y;
    compare(cpu, register)?;
    Ok(false)
}

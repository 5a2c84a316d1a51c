//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC / SEC: Clear / set carry
//! - CLI / SEI: Clear / set interrupt disable
//! - CLV: Clear overflow
//! - CLD / SED: Clear / set decimal mode (the flag is stored but arithmetic ignores it)
//!
//! These instructions use implied addressing and execute in 2 cycles.

use crate::{Cpu, CpuError, MemoryBus, Status};

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.status.remove(Status::CARRY);
    Ok(false)
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.status.insert(Status::CARRY);
    Ok(false)
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.status.remove(Status::INTERRUPT_DISABLE);
    Ok(false)
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.status.insert(Status::INTERRUPT_DISABLE);
    Ok(false)
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.status.remove(Status::DECIMAL);
    Ok(false)
}

/// Executes the SED (Set Decimal Mode) instruction.
pub(crate) fn execute_sed<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.status.insert(Status::DECIMAL);
    Ok(false)
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.status.remove(Status::OVERFLOW);
    Ok(false)
}

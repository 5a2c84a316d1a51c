//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA / LDX / LDY: Load a register from memory, updating Z and N
//! - STA / STX / STY: Store a register to memory, no flags affected
//!
//! Loads pay the page-crossing cycle in indexed modes; stores never do, since
//! their base cycle counts already include the fix-up cycle.

use crate::{Cpu, CpuError, MemoryBus};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.a = cpu.fetch()?;
    cpu.set_zn(cpu.a);
    Ok(true)
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.x = cpu.fetch()?;
    cpu.set_zn(cpu.x);
    Ok(true)
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.y = cpu.fetch()?;
    cpu.set_zn(cpu.y);
    Ok(true)
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.write(cpu.addr_abs, cpu.a)?;
    Ok(false)
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.write(cpu.addr_abs, cpu.x)?;
    Ok(false)
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.write(cpu.addr_abs, cpu.y)?;
    Ok(false)
}

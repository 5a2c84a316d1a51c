//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC / DEC: Memory, read-modify-write
//! - INX / INY / DEX / DEY: Index registers
//!
//! All wrap at 8 bits and update Z and N.

use crate::{Cpu, CpuError, MemoryBus};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    let result = cpu.fetch()?.wrapping_add(1);
    cpu.write(cpu.addr_abs, result)?;
    cpu.set_zn(result);
    Ok(false)
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    let result = cpu.fetch()?.wrapping_sub(1);
    cpu.write(cpu.addr_abs, result)?;
    cpu.set_zn(result);
    Ok(false)
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_zn(cpu.x);
    Ok(false)
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_zn(cpu.y);
    Ok(false)
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_zn(cpu.x);
    Ok(false)
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_zn(cpu.y);
    Ok(false)
}

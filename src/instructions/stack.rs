//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA / PLA: Push / pull the accumulator
//! - PHP / PLP: Push / pull the status register
//!
//! The stack lives at 0x0100-0x01FF and grows downward. SP wraps at 8 bits.

use crate::{Cpu, CpuError, MemoryBus, Status};

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.push(cpu.a)?;
    Ok(false)
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy always has Break and the unused bit set.
pub(crate) fn execute_php<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.push(cpu.status.to_stack(true))?;
    Ok(false)
}

/// Executes the PLA (Pull Accumulator) instruction.
pub(crate) fn execute_pla<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.a = cpu.pull()?;
    cpu.set_zn(cpu.a);
    Ok(false)
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Every flag is restored from the stack except Break, which is dropped; the
/// unused bit stays set.
pub(crate) fn execute_plp<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    let status = cpu.pull()?;
    cpu.status = Status::from_stack(status);
    Ok(false)
}

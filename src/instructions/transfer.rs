//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX / TAY: Accumulator to X / Y
//! - TXA / TYA: X / Y to accumulator
//! - TSX: Stack pointer to X
//! - TXS: X to stack pointer (the only transfer that leaves the flags alone)

use crate::{Cpu, CpuError, MemoryBus};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.x = cpu.a;
    cpu.set_zn(cpu.x);
    Ok(false)
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.y = cpu.a;
    cpu.set_zn(cpu.y);
    Ok(false)
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.a = cpu.x;
    cpu.set_zn(cpu.a);
    Ok(false)
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.a = cpu.y;
    cpu.set_zn(cpu.a);
    Ok(false)
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.x = cpu.sp;
    cpu.set_zn(cpu.x);
    Ok(false)
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
pub(crate) fn execute_txs<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.sp = cpu.x;
    Ok(false)
}

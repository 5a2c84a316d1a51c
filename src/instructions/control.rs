//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR / RTS: Call and return from subroutine
//! - BRK / RTI: Software interrupt and return from interrupt
//! - NOP: No operation (including the unofficial NOP variants)
//! - Undocumented opcodes, which behave as no-ops

use crate::cpu::IRQ_VECTOR;
use crate::{Cpu, CpuError, MemoryBus, Status};

/// Executes the JMP (Jump) instruction.
///
/// The addressing mode has already resolved the target, including the
/// indirect page-wrap bug for `JMP ($xxFF)`.
pub(crate) fn execute_jmp<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.pc = cpu.addr_abs;
    Ok(false)
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (PC - 1), high
/// byte first, then jumps.
pub(crate) fn execute_jsr<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_address)?;
    cpu.pc = cpu.addr_abs;
    Ok(false)
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the address pushed by JSR and resumes at the byte after it.
pub(crate) fn execute_rts<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.pc = cpu.pull_word()?.wrapping_add(1);
    Ok(false)
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK is one byte but skips a padding byte, so the pushed return address is
/// the opcode address + 2. The status is pushed with Break set, I is set, and
/// PC is loaded from the IRQ vector at $FFFE/F.
pub(crate) fn execute_brk<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.push_word(cpu.pc)?;
    cpu.push(cpu.status.to_stack(true))?;
    cpu.status.insert(Status::INTERRUPT_DISABLE);

    let lo = cpu.read(IRQ_VECTOR)? as u16;
    let hi = cpu.read(IRQ_VECTOR.wrapping_add(1))? as u16;
    cpu.pc = (hi << 8) | lo;
    Ok(false)
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status (Break dropped, unused bit set), then PC.
pub(crate) fn execute_rti<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    let status = cpu.pull()?;
    cpu.status = Status::from_stack(status);
    cpu.pc = cpu.pull_word()?;
    Ok(false)
}

/// Executes NOP.
///
/// The unofficial `NOP abs,X` forms pay the page-crossing cycle like other
/// reads, so NOP reports the penalty; the other modes never cross.
pub(crate) fn execute_nop<B: MemoryBus>(_cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    Ok(true)
}

/// Executes an undocumented opcode: only its base cycles are consumed.
pub(crate) fn execute_illegal<B: MemoryBus>(_cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    Ok(false)
}

//! # Branch Instructions
//!
//! This module implements the conditional branches. Each tests one status flag
//! and, if the condition holds, adds the sign-extended relative offset to PC.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! No flags are affected.

use crate::{Cpu, CpuError, MemoryBus, Status};

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.branch_if(!cpu.status.contains(Status::CARRY));
    Ok(false)
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.branch_if(cpu.status.contains(Status::CARRY));
    Ok(false)
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.branch_if(cpu.status.contains(Status::ZERO));
    Ok(false)
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.branch_if(!cpu.status.contains(Status::ZERO));
    Ok(false)
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.branch_if(cpu.status.contains(Status::NEGATIVE));
    Ok(false)
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.branch_if(!cpu.status.contains(Status::NEGATIVE));
    Ok(false)
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.branch_if(!cpu.status.contains(Status::OVERFLOW));
    Ok(false)
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<B: MemoryBus>(cpu: &mut Cpu<B>) -> Result<bool, CpuError> {
    cpu.branch_if(cpu.status.contains(Status::OVERFLOW));
    Ok(false)
}

//! # 2A03 Processor Core
//!
//! A cycle-counted emulation of the 6502 instruction-processing unit found in the
//! NES (the Ricoh 2A03 variant, which has no decimal mode), together with the flat
//! 64 KiB memory bus it addresses.
//!
//! The processor is driven one clock pulse at a time by an external loop calling
//! [`Cpu::tick`]. All fetch/decode/execute work for an instruction happens on the
//! tick where the remaining-cycle counter is zero; the following ticks only count
//! down the instruction's latency.
//!
//! ## Quick Start
//!
//! ```rust
//! use rp2a03::{Cpu, MemoryBus, SystemBus};
//!
//! let mut bus = SystemBus::new();
//! bus.write(0xFFFC, 0x00).unwrap(); // reset vector low byte
//! bus.write(0xFFFD, 0x80).unwrap(); // reset vector high byte
//! bus.load(0x8000, &[0xA9, 0x42]).unwrap(); // LDA #$42
//!
//! let mut cpu = Cpu::new();
//! cpu.connect_bus(bus);
//! cpu.reset().unwrap();
//! cpu.step().unwrap(); // finish the reset sequence
//! cpu.step().unwrap(); // LDA #$42
//!
//! assert_eq!(cpu.a(), 0x42);
//! assert_eq!(cpu.pc(), 0x8002);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - processor state, clock state machine, reset and interrupts
//! - `memory` - `MemoryBus` trait and the flat `SystemBus`
//! - `opcodes` - the 256-entry opcode table
//! - `addressing` - addressing modes and their resolvers
//! - `status` - status register flags
//! - `trace` - injectable per-tick trace sinks
//! - `disassembler` - side-effect-free instruction decoding for debug tooling

pub mod addressing;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod status;
pub mod trace;
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

use thiserror::Error;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{Cpu, Interrupt, Registers, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR, STACK_BASE};
pub use disassembler::{
    disassemble, disassemble_bus, formatter::format_instruction, DisassemblyOptions, Instruction,
};
pub use memory::{MemoryBus, SystemBus, MEMORY_SIZE};
pub use opcodes::{Opcode, Operation, OPCODE_TABLE};
pub use status::Status;
pub use trace::{LogTracer, TraceEvent, TraceKind, TraceSink};

/// Errors raised by a memory bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BusError {
    /// The address lies outside the 16-bit address space.
    #[error("address ${address:X} is outside the 16-bit address space")]
    OutOfRange {
        /// The offending address.
        address: u32,
    },

    /// The value does not fit in a single byte.
    #[error("value {value:#X} is not an 8-bit value")]
    ValueOutOfRange {
        /// The offending value.
        value: u32,
    },
}

/// Errors that can occur while the processor executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpuError {
    /// A bus access was attempted before a bus was connected.
    #[error("no bus connected")]
    NoBus,

    /// The connected bus rejected an access.
    #[error(transparent)]
    Bus(#[from] BusError),
}

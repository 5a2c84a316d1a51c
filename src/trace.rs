//! # Execution Tracing
//!
//! The processor has no logging state of its own. Callers that want a trace
//! install a [`TraceSink`] with [`Cpu::set_trace_sink`](crate::Cpu::set_trace_sink);
//! the processor then hands it one [`TraceEvent`] per tick. With no sink
//! installed, no event is built.
//!
//! Any `FnMut(&TraceEvent)` closure is a sink. [`LogTracer`] forwards events to
//! the `log` facade.

use crate::cpu::{Interrupt, Registers};
use crate::AddressingMode;

/// What happened on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    /// An instruction was fetched, decoded and executed.
    Fetch {
        opcode: u8,
        mnemonic: &'static str,
        mode: AddressingMode,
    },
    /// An interrupt or reset sequence was entered.
    Interrupt(Interrupt),
    /// The tick only counted down the in-flight instruction.
    Wait,
}

/// One structured trace record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEvent {
    /// Clock count after this tick.
    pub clock: u64,
    /// Program counter at the start of the tick.
    pub pc: u16,
    pub kind: TraceKind,
    /// Registers after this tick's work.
    pub registers: Registers,
    /// Cycles left on the in-flight instruction after this tick.
    pub cycles_remaining: u8,
}

/// Receiver for per-tick trace events.
pub trait TraceSink {
    fn record(&mut self, event: &TraceEvent);
}

impl<F: FnMut(&TraceEvent)> TraceSink for F {
    fn record(&mut self, event: &TraceEvent) {
        self(event)
    }
}

/// Writes instruction and interrupt events to the `log` facade at trace level.
///
/// Wait ticks are skipped unless `include_waits` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracer {
    pub include_waits: bool,
}

impl TraceSink for LogTracer {
    fn record(&mut self, event: &TraceEvent) {
        let r = &event.registers;
        match event.kind {
            TraceKind::Fetch {
                opcode, mnemonic, ..
            } => log::trace!(
                "{:04X}  {:02X}  {}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
                event.pc,
                opcode,
                mnemonic,
                r.a,
                r.x,
                r.y,
                r.status.bits(),
                r.sp,
                event.clock
            ),
            TraceKind::Interrupt(signal) => log::trace!(
                "{:04X}  {:?} -> {:04X}  CYC:{}",
                event.pc,
                signal,
                r.pc,
                event.clock
            ),
            TraceKind::Wait if self.include_waits => {
                log::trace!("{:04X}  wait {}  CYC:{}", event.pc, event.cycles_remaining, event.clock)
            }
            TraceKind::Wait => {}
        }
    }
}

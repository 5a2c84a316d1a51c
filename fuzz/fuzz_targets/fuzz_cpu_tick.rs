//! Fuzz target for the processor clock.
//!
//! This target creates arbitrary processor states and memory contents,
//! raises interrupts at arbitrary ticks, and clocks the processor to find
//! panics (arithmetic overflow, out-of-bounds indexing) in execution.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rp2a03::{Cpu, Status, SystemBus};

/// Arbitrary processor state
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    pc: u16,
    status: u8,
}

/// Signal raised before a tick
#[derive(Debug, Arbitrary)]
enum FuzzSignal {
    None,
    Irq,
    Nmi,
    Reset,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    /// Written at 0x0000 (zero page, stack and beyond)
    low_memory: Vec<u8>,
    /// Written at the program counter
    program: [u8; 16],
    vectors: [u8; 6],
    signals: Vec<FuzzSignal>,
}

fuzz_target!(|input: FuzzInput| {
    let mut bus = SystemBus::new();

    let low_len = input.low_memory.len().min(0x1000);
    let _ = bus.load(0x0000, &input.low_memory[..low_len]);
    let _ = bus.load(0xFFFA, &input.vectors);
    let pc = input.cpu_state.pc.min(0xFFF0);
    let _ = bus.load(pc, &input.program);

    let mut cpu = Cpu::new();
    cpu.connect_bus(bus);

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_pc(pc);
    cpu.set_status(Status::from_bits_retain(input.cpu_state.status));

    for signal in input.signals.iter().take(256) {
        match signal {
            FuzzSignal::None => {}
            FuzzSignal::Irq => cpu.irq(),
            FuzzSignal::Nmi => cpu.nmi(),
            FuzzSignal::Reset => {
                // A flat bus never faults
                cpu.reset().unwrap();
            }
        }

        cpu.tick().unwrap();

        // No instruction or interrupt sequence is longer than 8 cycles
        assert!(cpu.cycles() <= 8);
        assert!(cpu.flag(Status::UNUSED));
    }
});

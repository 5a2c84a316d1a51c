//! Tests for AND (Logical AND).
//!
//! AND only touches Zero and Negative. Every other status bit, including
//! Carry and Overflow, passes through unchanged.

use rp2a03::{Cpu, Status, SystemBus};

/// Helper function to create a CPU with `program` at 0x8000, reset and ready
fn setup_cpu(program: &[u8]) -> Cpu {
    let mut bus = SystemBus::new();
    bus.load(0xFFFC, &[0x00, 0x80]).unwrap();
    bus.load(0x8000, program).unwrap();

    let mut cpu = Cpu::new();
    cpu.connect_bus(bus);
    cpu.reset().unwrap();
    cpu.step().unwrap();
    cpu
}

/// Runs `opcode #operand` with the given accumulator and carry.
fn run_immediate(opcode: u8, a: u8, operand: u8, carry: bool) -> Cpu {
    let mut cpu = setup_cpu(&[opcode, operand]);
    cpu.set_a(a);
    cpu.set_flag(Status::CARRY, carry);
    assert_eq!(cpu.step().unwrap(), 2);
    cpu
}

// ========== Results and status byte ==========

#[test]
fn test_and_immediate_basic() {
    let cpu = run_immediate(0x29, 0xFF, 0x0F, false);

    assert_eq!(cpu.a(), 0x0F);
    assert_eq!(cpu.pc(), 0x8002);
    // Only I and the unused bit remain from reset
    assert_eq!(cpu.status().bits(), 0x24);
}

#[test]
fn test_and_status_byte() {
    // (A, M, result, P after) starting from P = $24
    let cases = [
        (0xCC, 0xAA, 0x88, 0xA4),
        (0x0F, 0xF0, 0x00, 0x26),
        (0x80, 0xFF, 0x80, 0xA4),
        (0x7F, 0x3C, 0x3C, 0x24),
    ];

    for (a, m, result, status) in cases {
        let cpu = run_immediate(0x29, a, m, false);
        assert_eq!(cpu.a(), result, "{a:02X} & {m:02X}");
        assert_eq!(cpu.status().bits(), status, "P after {a:02X} & {m:02X}");
    }
}

#[test]
fn test_and_keeps_carry_and_overflow() {
    let mut cpu = setup_cpu(&[0x29, 0x81]);
    cpu.set_a(0xFF);
    cpu.set_flag(Status::CARRY, true);
    cpu.set_flag(Status::OVERFLOW, true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x81);
    assert_eq!(cpu.status().bits(), 0xE5);
}

#[test]
fn test_and_clears_stale_zero_and_negative() {
    let mut cpu = setup_cpu(&[0x29, 0x01]);
    cpu.set_a(0x01);
    cpu.set_status(Status::NEGATIVE | Status::ZERO | Status::INTERRUPT_DISABLE);
    assert_eq!(cpu.status().bits(), 0xA6);

    cpu.step().unwrap();

    assert_eq!(cpu.status().bits(), 0x24);
}

#[test]
fn test_and_does_not_touch_carry_or_overflow_on_zero() {
    let mut cpu = setup_cpu(&[0x29, 0x00]);
    cpu.set_flag(Status::CARRY, true);
    cpu.set_flag(Status::OVERFLOW, true);

    cpu.step().unwrap();

    assert!(cpu.flag(Status::CARRY));
    assert!(cpu.flag(Status::OVERFLOW));
    assert_eq!(cpu.status().bits(), 0x67);
}

// ========== Addressing modes and cycles ==========

#[test]
fn test_and_zero_page() {
    let mut cpu = setup_cpu(&[0x25, 0x42]);
    cpu.write_to_bus(0x0042, 0x3C).unwrap();
    cpu.set_a(0xF0);

    assert_eq!(cpu.step().unwrap(), 3);
    assert_eq!(cpu.a(), 0x30);
}

#[test]
fn test_and_absolute_x_page_cross_cycles() {
    let mut cpu = setup_cpu(&[0x3D, 0xF0, 0x20]);
    cpu.write_to_bus(0x2100, 0x0F).unwrap();
    cpu.set_a(0xFF);
    cpu.set_x(0x10);

    assert_eq!(cpu.step().unwrap(), 5);
    assert_eq!(cpu.a(), 0x0F);
}

#[test]
fn test_and_absolute_y_same_page_cycles() {
    let mut cpu = setup_cpu(&[0x39, 0x00, 0x20]);
    cpu.write_to_bus(0x2010, 0xAA).unwrap();
    cpu.set_a(0xFF);
    cpu.set_y(0x10);

    assert_eq!(cpu.step().unwrap(), 4);
    assert_eq!(cpu.a(), 0xAA);
    assert!(cpu.flag(Status::NEGATIVE));
}

//! Tests for JMP, JSR, RTS, BRK and RTI.

use rp2a03::{Cpu, MemoryBus, Status, SystemBus};

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

fn peek(cpu: &Cpu, addr: u16) -> u8 {
    cpu.bus().unwrap().peek(addr)
}

// ========== JMP ==========

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu(&[0x4C, 0x34, 0x12]);

    assert_eq!(cpu.step().unwrap(), 3);
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu(&[0x6C, 0x00, 0x02]);
    cpu.write_to_bus(0x0200, 0xCD).unwrap();
    cpu.write_to_bus(0x0201, 0xAB).unwrap();

    assert_eq!(cpu.step().unwrap(), 5);
    assert_eq!(cpu.pc(), 0xABCD);
}

#[test]
fn test_jmp_indirect_page_boundary_bug() {
    // JMP ($10FF) takes the high byte from $1000, not $1100
    let mut cpu = setup_cpu(&[0x6C, 0xFF, 0x10]);
    cpu.write_to_bus(0x10FF, 0x34).unwrap();
    cpu.write_to_bus(0x1000, 0x12).unwrap();
    cpu.write_to_bus(0x1100, 0x56).unwrap();

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x1234);
}

// ========== JSR / RTS ==========

#[test]
fn test_jsr_rts() {
    let mut cpu = setup_cpu(&[0x20, 0x00, 0x90]);
    cpu.write_to_bus(0x9000, 0x60).unwrap(); // RTS

    assert_eq!(cpu.step().unwrap(), 6);
    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFB);
    // Return address is the last byte of the JSR
    assert_eq!(peek(&cpu, 0x01FD), 0x80);
    assert_eq!(peek(&cpu, 0x01FC), 0x02);

    assert_eq!(cpu.step().unwrap(), 6);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_nested_subroutines() {
    // $8000: JSR $9000; $9000: JSR $A000; RTS; $A000: RTS
    let mut cpu = setup_cpu(&[0x20, 0x00, 0x90, 0xEA]);
    cpu.write_to_bus(0x9000, 0x20).unwrap();
    cpu.write_to_bus(0x9001, 0x00).unwrap();
    cpu.write_to_bus(0x9002, 0xA0).unwrap();
    cpu.write_to_bus(0x9003, 0x60).unwrap();
    cpu.write_to_bus(0xA000, 0x60).unwrap();

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0xA000);
    assert_eq!(cpu.sp(), 0xF9);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x9003);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0xFD);
}

// ========== BRK / RTI ==========

#[test]
fn test_brk_first_tick() {
    let mut bus = SystemBus::new();
    bus.write(0x0000, 0x00).unwrap(); // BRK
    bus.load(0xFFFE, &[0x34, 0x12]).unwrap();

    let mut cpu = Cpu::new();
    cpu.connect_bus(bus);
    cpu.set_flag(Status::INTERRUPT_DISABLE, false);

    cpu.tick().unwrap();

    assert_eq!(cpu.cycles(), 6);
    assert!(cpu.flag(Status::INTERRUPT_DISABLE));
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_brk_stack_frame() {
    let mut cpu = setup_cpu(&[0x00, 0xFF]);
    cpu.write_to_bus(0xFFFE, 0x00).unwrap();
    cpu.write_to_bus(0xFFFF, 0x90).unwrap();
    cpu.set_status(Status::CARRY);

    assert_eq!(cpu.step().unwrap(), 7);

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFA);
    // Return address skips the padding byte
    assert_eq!(peek(&cpu, 0x01FD), 0x80);
    assert_eq!(peek(&cpu, 0x01FC), 0x02);
    // Status copy has Break and unused set
    assert_eq!(peek(&cpu, 0x01FB), 0x31);
    assert!(!cpu.flag(Status::BREAK));
}

#[test]
fn test_brk_then_rti_returns_past_padding() {
    let mut cpu = setup_cpu(&[0x00, 0xFF, 0xEA]);
    cpu.write_to_bus(0xFFFE, 0x00).unwrap();
    cpu.write_to_bus(0xFFFF, 0x90).unwrap();
    cpu.write_to_bus(0x9000, 0x40).unwrap(); // RTI
    cpu.set_status(Status::CARRY | Status::ZERO);

    cpu.step().unwrap();
    assert_eq!(cpu.step().unwrap(), 6);

    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.status(), Status::CARRY | Status::ZERO | Status::UNUSED);
}

#[test]
fn test_rti_restores_flags_and_pc() {
    // Hand-built frame: status $C3 then PC $1234
    let mut cpu = setup_cpu(&[0x40]);
    cpu.write_to_bus(0x01FE, 0xC3).unwrap();
    cpu.write_to_bus(0x01FF, 0x34).unwrap();
    cpu.write_to_bus(0x0100, 0x12).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.status().bits(), 0xE3);
}

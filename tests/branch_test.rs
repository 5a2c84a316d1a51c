//! Tests for the conditional branches, with tick-level timing.
//!
//! A branch costs 2 cycles, 3 when taken, and 4 when the target is on a
//! different page from the instruction that follows the branch.

use rp2a03::{Cpu, MemoryBus, Status, SystemBus};

/// Places `opcode offset` at `addr` and points PC at it, without a reset.
fn setup_branch(addr: u16, opcode: u8, offset: u8) -> Cpu {
    let mut bus = SystemBus::new();
    bus.write(addr, opcode).unwrap();
    bus.write(addr.wrapping_add(1), offset).unwrap();

    let mut cpu = Cpu::new();
    cpu.connect_bus(bus);
    cpu.set_pc(addr);
    cpu
}

#[test]
fn test_bcs_taken_same_page() {
    let mut cpu = setup_branch(0x00FE, 0xB0, 0x0F);
    cpu.set_flag(Status::CARRY, true);

    cpu.tick().unwrap();

    assert_eq!(cpu.cycles(), 2);
    assert_eq!(cpu.pc(), 0x010F);
}

#[test]
fn test_bcs_taken_page_cross() {
    let mut cpu = setup_branch(0x00FE, 0xB0, 0xFF);
    cpu.set_flag(Status::CARRY, true);

    cpu.tick().unwrap();

    assert_eq!(cpu.cycles(), 3);
    assert_eq!(cpu.pc(), 0x00FF);
}

#[test]
fn test_bcs_not_taken() {
    let mut cpu = setup_branch(0x00FE, 0xB0, 0x0F);
    cpu.set_flag(Status::CARRY, false);

    cpu.tick().unwrap();

    assert_eq!(cpu.cycles(), 1);
    assert_eq!(cpu.pc(), 0x0100);
}

#[test]
fn test_branch_backward() {
    // BNE -4 from $8010 lands on $800E
    let mut cpu = setup_branch(0x8010, 0xD0, 0xFC);
    cpu.set_flag(Status::ZERO, false);

    assert_eq!(cpu.step().unwrap(), 3);
    assert_eq!(cpu.pc(), 0x800E);
}

#[test]
fn test_branch_to_self() {
    // BEQ $FE loops forever on the same instruction
    let mut cpu = setup_branch(0x0400, 0xF0, 0xFE);
    cpu.set_flag(Status::ZERO, true);

    for _ in 0..3 {
        assert_eq!(cpu.step().unwrap(), 3);
        assert_eq!(cpu.pc(), 0x0400);
    }
}

#[test]
fn test_every_branch_condition() {
    // (opcode, flag, branch when flag is set)
    let cases = [
        (0x10, Status::NEGATIVE, false), // BPL
        (0x30, Status::NEGATIVE, true),  // BMI
        (0x50, Status::OVERFLOW, false), // BVC
        (0x70, Status::OVERFLOW, true),  // BVS
        (0x90, Status::CARRY, false),    // BCC
        (0xB0, Status::CARRY, true),     // BCS
        (0xD0, Status::ZERO, false),     // BNE
        (0xF0, Status::ZERO, true),      // BEQ
    ];

    // (branch address, taken target, ticks when taken): same page, then a
    // target on the page after the one holding the next instruction
    let placements = [(0x0200, 0x0212, 3), (0x02FD, 0x030F, 4)];

    for (opcode, flag, when_set) in cases {
        for (addr, target, taken_ticks) in placements {
            for flag_value in [false, true] {
                let mut cpu = setup_branch(addr, opcode, 0x10);
                cpu.set_flag(flag, flag_value);

                let ticks = cpu.step().unwrap();
                let taken = flag_value == when_set;

                let expected_pc = if taken { target } else { addr + 2 };
                assert_eq!(
                    cpu.pc(),
                    expected_pc,
                    "opcode {opcode:02X} at ${addr:04X} flag {flag_value}"
                );
                assert_eq!(
                    ticks,
                    if taken { taken_ticks } else { 2 },
                    "opcode {opcode:02X} at ${addr:04X} flag {flag_value}"
                );
            }
        }
    }
}

#[test]
fn test_every_branch_backward_page_cross() {
    // Offset -$10 from $0305 lands on $02F7, one page below $0307
    for opcode in [0x10, 0x30, 0x50, 0x70, 0x90, 0xB0, 0xD0, 0xF0] {
        let mut cpu = setup_branch(0x0305, opcode, 0xF0);
        // Clear every flag, then set the one this opcode branches on
        cpu.set_status(Status::empty());
        match opcode {
            0x30 => cpu.set_flag(Status::NEGATIVE, true),
            0x70 => cpu.set_flag(Status::OVERFLOW, true),
            0xB0 => cpu.set_flag(Status::CARRY, true),
            0xF0 => cpu.set_flag(Status::ZERO, true),
            _ => {}
        }

        assert_eq!(cpu.step().unwrap(), 4, "opcode {opcode:02X}");
        assert_eq!(cpu.pc(), 0x02F7, "opcode {opcode:02X}");
    }
}

#[test]
fn test_branch_leaves_flags_alone() {
    let mut cpu = setup_branch(0x0200, 0x90, 0x10);
    cpu.set_status(Status::NEGATIVE | Status::OVERFLOW);
    let before = cpu.status();

    cpu.step().unwrap();

    assert_eq!(cpu.status(), before);
}
